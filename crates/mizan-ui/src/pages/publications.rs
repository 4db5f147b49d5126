use yew::prelude::*;

use crate::app::{use_i18n, use_toasts};
use crate::content::{PUBLICATIONS, safe_image};
use crate::pages::{not_implemented, page_hero};

#[function_component(PublicationsPage)]
pub(crate) fn publications_page() -> Html {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let on_download = not_implemented(&toasts);

    html! {
        <>
            {page_hero(i18n.t("publications"), None)}
            <section class="max-w-5xl mx-auto px-4 py-12 space-y-6">
                {for PUBLICATIONS.iter().map(|publication| html! {
                    <article class="card card-side bg-base-100 shadow" lang="id">
                        if let Some(src) = safe_image(publication.image) {
                            <figure class="w-40 shrink-0"><img src={src} alt={publication.title} loading="lazy" class="h-full object-cover" /></figure>
                        }
                        <div class="card-body">
                            <span class="badge badge-outline">{publication.category}</span>
                            <h2 class="card-title">{publication.title}</h2>
                            <p>{publication.description}</p>
                            <p class="text-sm opacity-70" dir="ltr">
                                {format!("{} · {} · {} downloads", publication.date, publication.size, publication.downloads)}
                            </p>
                            <div class="card-actions justify-end">
                                <button type="button" class="btn btn-primary btn-sm" onclick={on_download.clone()}>{i18n.t("readMore")}</button>
                            </div>
                        </div>
                    </article>
                })}
            </section>
        </>
    }
}
