//! Routed pages and the helpers they share.

use mizan_forms::Notice;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::ToastCtx;

pub(crate) mod about;
pub(crate) mod admin;
pub(crate) mod contact;
pub(crate) mod donation;
pub(crate) mod dormitories;
pub(crate) mod home;
pub(crate) mod news;
pub(crate) mod not_found;
pub(crate) mod programs;
pub(crate) mod publications;

/// Current value of the input or textarea that raised `event`.
pub(crate) fn input_value(event: &InputEvent) -> String {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| {
            event
                .target_dyn_into::<HtmlTextAreaElement>()
                .map(|area| area.value())
        })
        .unwrap_or_default()
}

/// Input handler writing the typed text into one field of a form held in state.
pub(crate) fn bind_field<F>(form: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<InputEvent>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        let mut next = (*form).clone();
        apply(&mut next, input_value(&event));
        form.set(next);
    })
}

/// Click handler that raises the "feature not implemented" toast.
pub(crate) fn not_implemented(toasts: &ToastCtx) -> Callback<MouseEvent> {
    let notify = toasts.notify.clone();
    Callback::from(move |_| notify.emit(Notice::feature_not_implemented()))
}

pub(crate) fn page_hero(title: String, subtitle: Option<String>) -> Html {
    html! {
        <section class="hero py-16 md:py-24 bg-gradient-to-br from-primary to-secondary">
            <div class="hero-content text-center text-primary-content">
                <div class="max-w-3xl">
                    <h1 class="text-4xl md:text-6xl font-heading">{title}</h1>
                    if let Some(subtitle) = subtitle {
                        <p class="mt-4 text-lg">{subtitle}</p>
                    }
                </div>
            </div>
        </section>
    }
}
