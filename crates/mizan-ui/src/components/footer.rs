use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{Route, use_i18n};
use crate::nav::FOOTER_LINKS;

const ADDRESS: &str = "Jl. Raya Bogor KM 24, Cijantung, Jakarta Timur 13770";
const PHONE: &str = "+62 21 8400 8080";
const EMAIL: &str = "info@rumahyatimmizan.org";
const SOCIAL: [&str; 4] = ["Facebook", "Instagram", "Twitter", "YouTube"];

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    let i18n = use_i18n();

    html! {
        <footer class="footer p-10 bg-base-200 text-base-content" dir={i18n.direction().as_str()}>
            <aside class="max-w-sm">
                <strong>{"Rumah Yatim Mizan"}</strong>
                <p>{i18n.t("heroSubtitle")}</p>
            </aside>
            <nav aria-label={i18n.t("quickLinks")}>
                <h3 class="footer-title">{i18n.t("quickLinks")}</h3>
                {for FOOTER_LINKS.iter().map(|page| html! {
                    <Link<Route> to={Route::from(*page)} classes={classes!("link", "link-hover")}>
                        {i18n.t(page.title_key())}
                    </Link<Route>>
                })}
            </nav>
            <address class="not-italic">
                <h3 class="footer-title">{i18n.t("contact")}</h3>
                <span>{ADDRESS}</span>
                <span dir="ltr">{PHONE}</span>
                <span>{EMAIL}</span>
            </address>
            <nav>
                <h3 class="footer-title">{i18n.t("followUs")}</h3>
                <div class="flex gap-4">
                    {for SOCIAL.iter().map(|label| html! {
                        <a href="#" class="link link-hover" aria-label={*label}>{*label}</a>
                    })}
                </div>
                <p class="text-sm">{format!("© Rumah Yatim Mizan. {}", i18n.t("allRightsReserved"))}</p>
            </nav>
        </footer>
    }
}
