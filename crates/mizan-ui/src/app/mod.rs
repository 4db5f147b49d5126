//! App root: store ownership, context wiring and document direction.

use gloo::console;
use gloo::utils::document;
use mizan_forms::Notice;
use mizan_i18n::{LanguageCode, LocalizationStore, TranslationCatalog};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::toast::ToastHost;
use crate::models::{Toast, ToastAction, ToastQueue};
use crate::nav::{ARABIC_FONT_CLASS, font_class};
use crate::pages::{
    about::AboutPage, admin::AdminPage, contact::ContactPage, donation::DonationPage,
    dormitories::DormitoriesPage, home::HomePage, news::NewsPage, not_found::NotFoundPage,
    programs::ProgramsPage, publications::PublicationsPage,
};
pub(crate) use context::{I18nCtx, ToastCtx, use_i18n, use_toasts};
use preferences::LocalStoragePreferences;
pub(crate) use routes::Route;

mod context;
mod preferences;
mod routes;

#[function_component(MizanApp)]
fn mizan_app() -> Html {
    let store = use_mut_ref(|| {
        LocalizationStore::initialize(TranslationCatalog::builtin(), LocalStoragePreferences)
    });
    let language = use_state(|| store.borrow().current_language());
    let toasts = use_reducer(ToastQueue::default);
    let toast_id = use_mut_ref(|| 0u64);

    {
        let language = *language;
        use_effect_with_deps(
            move |language: &LanguageCode| {
                apply_direction(*language);
                || ()
            },
            language,
        );
    }

    let on_select = {
        let store = store.clone();
        let language = language.clone();
        Callback::from(move |next: LanguageCode| {
            let mut store = store.borrow_mut();
            if store.change_language(next.code()) {
                language.set(store.current_language());
            }
        })
    };

    let notify = {
        let store = store.clone();
        let toasts = toasts.dispatcher();
        Callback::from(move |notice: Notice| {
            let id = {
                let mut next = toast_id.borrow_mut();
                *next += 1;
                *next
            };
            let toast = Toast::from_notice(id, notice, |key| store.borrow().text(key));
            toasts.dispatch(ToastAction::Push(toast));
        })
    };

    let dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let i18n = I18nCtx::new(store, *language, on_select);
    let toast_ctx = ToastCtx { notify };
    let dismiss_label = i18n.t("dismiss");

    html! {
        <ContextProvider<I18nCtx> context={i18n}>
            <ContextProvider<ToastCtx> context={toast_ctx}>
                <BrowserRouter>
                    <div class="min-h-screen bg-background">
                        <a href="#main-content" class="skip-link">{"Skip to main content"}</a>
                        <Navbar />
                        <main id="main-content" class="min-h-screen" role="main" aria-label="Main content">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                        <ToastHost toasts={toasts.toasts().to_vec()} on_dismiss={dismiss} dismiss_label={dismiss_label} />
                    </div>
                </BrowserRouter>
            </ContextProvider<ToastCtx>>
        </ContextProvider<I18nCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Programs => html! { <ProgramsPage /> },
        Route::Dormitories => html! { <DormitoriesPage /> },
        Route::Publications => html! { <PublicationsPage /> },
        Route::News => html! { <NewsPage /> },
        Route::Donation => html! { <DonationPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

fn apply_direction(language: LanguageCode) {
    let Some(root) = document().document_element() else {
        return;
    };
    let _ = root.set_attribute("dir", language.direction().as_str());
    let _ = root.set_attribute("lang", language.code());
    let classes = root.class_list();
    let result = match font_class(language) {
        Some(class) => classes.add_1(class),
        None => classes.remove_1(ARABIC_FONT_CLASS),
    };
    if result.is_err() {
        console::warn!("failed to update font class", language.code());
    }
}

/// Mount the site on `#root`, or on the body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<MizanApp>::with_root(root).render();
    } else {
        yew::Renderer::<MizanApp>::new().render();
    }
}
