use yew::prelude::*;

use crate::app::{use_i18n, use_toasts};
use crate::content::ADMIN_STATS;
use crate::pages::not_implemented;

const ACTION_KEYS: [&str; 3] = ["manageContent", "manageDonations", "managePublications"];

#[function_component(AdminPage)]
pub(crate) fn admin_page() -> Html {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let on_action = not_implemented(&toasts);

    html! {
        <section class="max-w-6xl mx-auto px-4 py-12 space-y-8">
            <header class="flex items-center justify-between">
                <h1 class="text-3xl font-heading">{i18n.t("dashboard")}</h1>
                <button type="button" class="btn btn-outline btn-sm" onclick={on_action.clone()}>{i18n.t("logout")}</button>
            </header>
            <div class="stats stats-vertical lg:stats-horizontal shadow w-full" lang="id">
                {for ADMIN_STATS.iter().map(|stat| html! {
                    <div class="stat">
                        <div class="stat-title">{stat.title}</div>
                        <div class="stat-value" dir="ltr">{stat.value}</div>
                    </div>
                })}
            </div>
            <div class="grid gap-6 md:grid-cols-3">
                {for ACTION_KEYS.iter().map(|key| html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{i18n.t(key)}</h2>
                            <div class="card-actions justify-end">
                                <button type="button" class="btn btn-primary btn-sm" onclick={on_action.clone()}>{i18n.t("edit")}</button>
                            </div>
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}
