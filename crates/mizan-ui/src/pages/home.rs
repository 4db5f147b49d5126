use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{Route, use_i18n};
use crate::content::PROGRAM_KEYS;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let i18n = use_i18n();

    html! {
        <>
            <section class="hero min-h-[70vh] bg-gradient-to-br from-primary to-secondary">
                <div class="hero-content text-center text-primary-content">
                    <div class="max-w-3xl">
                        <h1 class="text-4xl md:text-6xl font-heading">{i18n.t("heroTitle")}</h1>
                        <p class="mt-6 text-lg">{i18n.t("heroSubtitle")}</p>
                        <div class="mt-8 flex flex-wrap justify-center gap-4">
                            <Link<Route> to={Route::Donation} classes={classes!("btn", "btn-accent")}>{i18n.t("donateNow")}</Link<Route>>
                            <Link<Route> to={Route::About} classes={classes!("btn", "btn-outline")}>{i18n.t("learnMore")}</Link<Route>>
                        </div>
                    </div>
                </div>
            </section>
            <section class="max-w-6xl mx-auto px-4 py-16">
                <h2 class="text-3xl font-heading mb-8">{i18n.t("programs")}</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-6">
                    {for PROGRAM_KEYS.iter().map(|key| html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body items-center text-center">
                                <h3 class="card-title">{i18n.t(key)}</h3>
                            </div>
                        </div>
                    })}
                </div>
                <div class="mt-8 text-center">
                    <Link<Route> to={Route::Programs} classes={classes!("btn", "btn-ghost")}>{i18n.t("viewAll")}</Link<Route>>
                </div>
            </section>
        </>
    }
}
