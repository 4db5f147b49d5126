use yew::prelude::*;

use crate::app::{use_i18n, use_toasts};
use crate::content::{NEWS, safe_image};
use crate::pages::{not_implemented, page_hero};

#[function_component(NewsPage)]
pub(crate) fn news_page() -> Html {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let on_read = not_implemented(&toasts);

    html! {
        <>
            {page_hero(i18n.t("news"), None)}
            <section class="max-w-6xl mx-auto px-4 py-12 grid gap-6 md:grid-cols-3">
                {for NEWS.iter().enumerate().map(|(index, item)| html! {
                    <article class={classes!("card", "bg-base-100", "shadow", (index == 0).then_some("md:col-span-3"))} lang="id">
                        if let Some(src) = safe_image(item.image) {
                            <figure><img src={src} alt={item.title} loading="lazy" class="h-48 w-full object-cover" /></figure>
                        }
                        <div class="card-body">
                            <span class="badge badge-secondary">{item.category}</span>
                            <h2 class="card-title">{item.title}</h2>
                            <p>{item.excerpt}</p>
                            <p class="text-sm opacity-70" dir="ltr">{format!("{} · {}", item.date, item.author)}</p>
                            <div class="card-actions justify-end">
                                <button type="button" class="btn btn-ghost btn-sm" onclick={on_read.clone()}>{i18n.t("readMore")}</button>
                            </div>
                        </div>
                    </article>
                })}
            </section>
        </>
    }
}
