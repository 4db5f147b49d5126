use yew::prelude::*;

use crate::app::{use_i18n, use_toasts};
use crate::pages::{not_implemented, page_hero};

const VISION: &str = "Menjadi lembaga sosial terpercaya yang melahirkan generasi yatim mandiri, berakhlak, dan berprestasi.";
const MISSIONS: [&str; 3] = [
    "Menyelenggarakan pendidikan berkualitas bagi anak yatim.",
    "Menjamin kesehatan dan gizi anak asuh.",
    "Memberdayakan ekonomi keluarga yatim dan dhuafa.",
];

#[function_component(AboutPage)]
pub(crate) fn about_page() -> Html {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let on_document = not_implemented(&toasts);

    html! {
        <>
            {page_hero(i18n.t("about"), None)}
            <section class="max-w-5xl mx-auto px-4 py-12 grid gap-8 md:grid-cols-2">
                <article class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{i18n.t("vision")}</h2>
                        <p lang="id">{VISION}</p>
                    </div>
                </article>
                <article class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{i18n.t("mission")}</h2>
                        <ul class="list-disc ps-5" lang="id">
                            {for MISSIONS.iter().map(|mission| html! { <li>{*mission}</li> })}
                        </ul>
                    </div>
                </article>
                <article class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{i18n.t("organizationalStructure")}</h2>
                        <button type="button" class="btn btn-outline btn-sm" onclick={on_document.clone()}>{i18n.t("readMore")}</button>
                    </div>
                </article>
                <article class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{i18n.t("legalDocuments")}</h2>
                        <button type="button" class="btn btn-outline btn-sm" onclick={on_document}>{i18n.t("readMore")}</button>
                    </div>
                </article>
            </section>
        </>
    }
}
