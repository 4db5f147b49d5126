use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{Route, use_i18n};

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    let i18n = use_i18n();

    html! {
        <section class="min-h-[50vh] flex flex-col items-center justify-center gap-6">
            <h1 class="text-4xl font-heading">{i18n.t("notFound")}</h1>
            <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>{i18n.t("backHome")}</Link<Route>>
        </section>
    }
}
