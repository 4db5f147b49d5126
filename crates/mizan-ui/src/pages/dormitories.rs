//! Dormitory listing with the sponsorship form.

use mizan_forms::donation::{MAX_NOTE_CHARS, SponsorshipForm};
use yew::prelude::*;

use crate::app::{use_i18n, use_toasts};
use crate::content::{DORMITORIES, DORMITORY_IMAGE, Dormitory, safe_image};
use crate::pages::{bind_field, page_hero};

#[function_component(DormitoriesPage)]
pub(crate) fn dormitories_page() -> Html {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let form = use_state(SponsorshipForm::default);
    let selected = use_state(|| None::<&'static str>);

    let onsubmit = {
        let form = form.clone();
        let notify = toasts.notify.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.submit() {
                Ok(notice) => {
                    notify.emit(notice);
                    form.set(SponsorshipForm::default());
                }
                Err(err) => notify.emit(err.notice()),
            }
        })
    };

    let sponsor_label = i18n.t("sponsorDormitory");

    html! {
        <>
            {page_hero(i18n.t("asrama"), None)}
            <section class="max-w-6xl mx-auto px-4 py-12 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {for DORMITORIES.iter().map(|dormitory| {
                    let onclick = {
                        let selected = selected.clone();
                        let name = dormitory.name;
                        Callback::from(move |_| selected.set(Some(name)))
                    };
                    dormitory_card(dormitory, &sponsor_label, onclick)
                })}
            </section>
            <section id="sponsor" class="max-w-2xl mx-auto px-4 pb-16">
                <h2 class="text-2xl font-heading mb-2">{sponsor_label.clone()}</h2>
                if let Some(name) = *selected {
                    <p class="mb-4 badge badge-primary">{name}</p>
                }
                <form class="space-y-4" onsubmit={onsubmit} novalidate=true>
                    <label class="form-control">
                        <span class="label-text">{i18n.t("fullName")}</span>
                        <input class="input input-bordered" required=true value={form.name.clone()}
                            oninput={bind_field(&form, |draft: &mut SponsorshipForm, value| draft.name = value)} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{i18n.t("donationAmount")}</span>
                        <input class="input input-bordered" inputmode="numeric" dir="ltr" required=true value={form.amount.clone()}
                            oninput={bind_field(&form, |draft: &mut SponsorshipForm, value| draft.amount = value)} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{i18n.t("note")}</span>
                        <textarea class="textarea textarea-bordered" maxlength={MAX_NOTE_CHARS.to_string()} value={form.note.clone()}
                            oninput={bind_field(&form, |draft: &mut SponsorshipForm, value| draft.note = value)} />
                        <span class="label-text-alt" dir="ltr">{format!("{}/{MAX_NOTE_CHARS}", form.note.chars().count())}</span>
                    </label>
                    <button type="submit" class="btn btn-primary">{i18n.t("donateNow")}</button>
                </form>
            </section>
        </>
    }
}

fn dormitory_card(dormitory: &Dormitory, sponsor_label: &str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <article class="card bg-base-100 shadow" lang="id">
            if let Some(src) = safe_image(DORMITORY_IMAGE) {
                <figure><img src={src} alt={dormitory.name} loading="lazy" class="h-40 w-full object-cover" /></figure>
            }
            <div class="card-body">
                <div class="flex items-center justify-between gap-2">
                    <h3 class="card-title">{dormitory.name}</h3>
                    <span class="badge badge-primary" dir="ltr">{format!("{}/{}", dormitory.occupancy, dormitory.capacity)}</span>
                </div>
                <p class="text-sm">{dormitory.address}</p>
                <progress class="progress progress-primary" value={dormitory.occupancy_percent().to_string()} max="100" />
                <div class="flex flex-wrap gap-2">
                    {for dormitory.facilities.iter().map(|facility| html! {
                        <span class="badge badge-ghost">{*facility}</span>
                    })}
                </div>
                <p class="text-sm" dir="ltr">{dormitory.phone}</p>
                <p class="text-sm" dir="ltr">{dormitory.email}</p>
                <div class="card-actions justify-end">
                    <a href="#sponsor" class="btn btn-primary btn-sm" onclick={onclick}>{sponsor_label.to_string()}</a>
                </div>
            </div>
        </article>
    }
}
