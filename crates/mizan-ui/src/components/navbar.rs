//! Top navigation bar.

use mizan_i18n::LanguageCode;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{Route, use_i18n};
use crate::components::locale_menu::LocaleMenu;
use crate::nav::{NAV_ITEMS, NavItem};

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let i18n = use_i18n();
    let active = use_route::<Route>().unwrap_or(Route::NotFound);
    let menu_open = use_state(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let on_select = {
        let i18n = i18n.clone();
        Callback::from(move |language: LanguageCode| i18n.select(language))
    };

    let links = NAV_ITEMS
        .iter()
        .map(|item| nav_link(*item, &i18n.t(item.page.title_key()), active))
        .collect::<Html>();

    html! {
        <nav class="navbar sticky top-0 z-50 backdrop-blur-xl bg-base-100/70 border-b" role="navigation" aria-label="Main navigation">
            <div class="navbar-start">
                <Link<Route> to={Route::Home} classes={classes!("btn", "btn-ghost", "text-xl")}>{"Rumah Yatim Mizan"}</Link<Route>>
            </div>
            <div class="navbar-center hidden md:flex">
                <ul class="menu menu-horizontal gap-2" role="menubar">{links.clone()}</ul>
            </div>
            <div class="navbar-end gap-2">
                <LocaleMenu
                    language={i18n.language()}
                    available={i18n.available()}
                    on_select={on_select}
                    aria_label={i18n.t("language")}
                />
                <Link<Route> to={Route::Donation} classes={classes!("btn", "btn-primary", "btn-sm", "hidden", "md:inline-flex")}>
                    {i18n.t("donateNow")}
                </Link<Route>>
                <button class="btn btn-ghost btn-sm md:hidden" aria-label="Toggle navigation" aria-expanded={(*menu_open).to_string()} onclick={toggle_menu}>
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
            </div>
            if *menu_open {
                <ul class="menu md:hidden w-full" role="menu">
                    {links}
                    <li>
                        <Link<Route> to={Route::Donation} classes={classes!("btn", "btn-primary", "btn-sm")}>{i18n.t("donateNow")}</Link<Route>>
                    </li>
                </ul>
            }
        </nav>
    }
}

fn nav_link(item: NavItem, label: &str, active: Route) -> Html {
    let route = Route::from(item.page);
    let current = active == route;
    let classes = classes!("nav-item", current.then_some("active"));
    html! {
        <li role="none" title={item.aria_label} aria-current={current.then_some("page")}>
            <Link<Route> to={route} classes={classes}>{label.to_string()}</Link<Route>>
        </li>
    }
}

