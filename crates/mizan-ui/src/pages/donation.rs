//! Donation funnel: amount selection, impact preview and donor details.

use mizan_forms::donation::{AmountChoice, DonationForm, PRESET_AMOUNTS, format_rupiah, impact_for};
use yew::prelude::*;

use crate::app::{use_i18n, use_toasts};
use crate::pages::{bind_field, input_value, page_hero};

#[function_component(DonationPage)]
pub(crate) fn donation_page() -> Html {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let form = use_state(DonationForm::default);

    let amount = form.amount.amount();
    let impact = impact_for(amount);

    let on_custom = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*form).clone();
            next.amount = AmountChoice::custom(&input_value(&event));
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notify = toasts.notify.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.submit() {
                Ok(notice) => {
                    notify.emit(notice);
                    form.set(DonationForm::default());
                }
                Err(err) => notify.emit(err.notice()),
            }
        })
    };

    let custom_value = match &form.amount {
        AmountChoice::Custom(digits) => digits.clone(),
        AmountChoice::Preset(_) => String::new(),
    };

    html! {
        <>
            {page_hero(i18n.t("donation"), Some(i18n.t("heroSubtitle")))}
            <form class="max-w-3xl mx-auto px-4 py-12 space-y-10" onsubmit={onsubmit} novalidate=true>
                <fieldset class="space-y-4">
                    <legend class="text-2xl font-heading">{i18n.t("donationAmount")}</legend>
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                        {for PRESET_AMOUNTS.iter().map(|&preset| {
                            let selected = form.amount == AmountChoice::Preset(preset);
                            let onclick = {
                                let form = form.clone();
                                Callback::from(move |_| {
                                    let mut next = (*form).clone();
                                    next.amount = AmountChoice::Preset(preset);
                                    form.set(next);
                                })
                            };
                            html! {
                                <button
                                    type="button"
                                    class={classes!("btn", if selected { "btn-primary" } else { "btn-outline" })}
                                    aria-pressed={selected.to_string()}
                                    dir="ltr"
                                    onclick={onclick}
                                >
                                    {format_rupiah(preset)}
                                </button>
                            }
                        })}
                    </div>
                    <label class="form-control">
                        <span class="label-text">{i18n.t("customAmount")}</span>
                        <input
                            class="input input-bordered"
                            inputmode="numeric"
                            dir="ltr"
                            value={custom_value}
                            oninput={on_custom}
                        />
                    </label>
                    if amount > 0 {
                        <p class="alert" role="status">
                            <span>{format!("{} {}", i18n.t("impactPrefix"), i18n.t(impact.key))}</span>
                        </p>
                    }
                </fieldset>
                <fieldset class="space-y-4">
                    <legend class="text-2xl font-heading">{i18n.t("donorInfo")}</legend>
                    <label class="form-control">
                        <span class="label-text">{i18n.t("fullName")}</span>
                        <input class="input input-bordered" required=true value={form.name.clone()}
                            oninput={bind_field(&form, |draft: &mut DonationForm, value| draft.name = value)} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{i18n.t("email")}</span>
                        <input class="input input-bordered" type="email" required=true dir="ltr" value={form.email.clone()}
                            oninput={bind_field(&form, |draft: &mut DonationForm, value| draft.email = value)} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{i18n.t("phone")}</span>
                        <input class="input input-bordered" type="tel" dir="ltr" value={form.phone.clone()}
                            oninput={bind_field(&form, |draft: &mut DonationForm, value| draft.phone = value)} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{i18n.t("message")}</span>
                        <textarea class="textarea textarea-bordered" value={form.message.clone()}
                            oninput={bind_field(&form, |draft: &mut DonationForm, value| draft.message = value)} />
                    </label>
                </fieldset>
                <button type="submit" class="btn btn-primary w-full">
                    {format!("{} · {}", i18n.t("donateNow"), format_rupiah(amount))}
                </button>
            </form>
        </>
    }
}
