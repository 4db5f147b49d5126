use mizan_forms::contact::ContactForm;
use yew::prelude::*;

use crate::app::{use_i18n, use_toasts};
use crate::pages::{bind_field, page_hero};

#[function_component(ContactPage)]
pub(crate) fn contact_page() -> Html {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let form = use_state(ContactForm::default);

    let onsubmit = {
        let form = form.clone();
        let notify = toasts.notify.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.submit() {
                Ok(notice) => {
                    notify.emit(notice);
                    form.set(ContactForm::default());
                }
                Err(err) => notify.emit(err.notice()),
            }
        })
    };

    html! {
        <>
            {page_hero(i18n.t("contact"), None)}
            <form class="max-w-2xl mx-auto px-4 py-12 space-y-4" onsubmit={onsubmit} novalidate=true>
                <label class="form-control">
                    <span class="label-text">{i18n.t("fullName")}</span>
                    <input class="input input-bordered" required=true value={form.name.clone()}
                        oninput={bind_field(&form, |draft: &mut ContactForm, value| draft.name = value)} />
                </label>
                <label class="form-control">
                    <span class="label-text">{i18n.t("email")}</span>
                    <input class="input input-bordered" type="email" required=true dir="ltr" value={form.email.clone()}
                        oninput={bind_field(&form, |draft: &mut ContactForm, value| draft.email = value)} />
                </label>
                <label class="form-control">
                    <span class="label-text">{i18n.t("subject")}</span>
                    <input class="input input-bordered" required=true value={form.subject.clone()}
                        oninput={bind_field(&form, |draft: &mut ContactForm, value| draft.subject = value)} />
                </label>
                <label class="form-control">
                    <span class="label-text">{i18n.t("message")}</span>
                    <textarea class="textarea textarea-bordered" required=true rows="6" value={form.message.clone()}
                        oninput={bind_field(&form, |draft: &mut ContactForm, value| draft.message = value)} />
                </label>
                <button type="submit" class="btn btn-primary">{i18n.t("submit")}</button>
            </form>
        </>
    }
}
