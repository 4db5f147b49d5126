use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{Route, use_i18n, use_toasts};
use crate::content::PROGRAM_KEYS;
use crate::pages::{not_implemented, page_hero};

#[function_component(ProgramsPage)]
pub(crate) fn programs_page() -> Html {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let on_details = not_implemented(&toasts);

    html! {
        <>
            {page_hero(i18n.t("programs"), Some(i18n.t("heroSubtitle")))}
            <section class="max-w-6xl mx-auto px-4 py-12 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {for PROGRAM_KEYS.iter().map(|key| html! {
                    <article class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{i18n.t(key)}</h2>
                            <div class="card-actions justify-end">
                                <button type="button" class="btn btn-ghost btn-sm" onclick={on_details.clone()}>{i18n.t("learnMore")}</button>
                            </div>
                        </div>
                    </article>
                })}
            </section>
            <section class="text-center pb-16">
                <Link<Route> to={Route::Donation} classes={classes!("btn", "btn-primary")}>{i18n.t("donateNow")}</Link<Route>>
            </section>
        </>
    }
}
