//! Language picker used in the navbar.
//!
//! # Design
//! - Presentation only; selection is emitted through the callback.
//! - The trigger shows the active flag; entries show flag and native label.

use mizan_i18n::LanguageCode;
use yew::prelude::*;

use crate::nav::{flag_src, language_options};

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub language: LanguageCode,
    pub available: Vec<LanguageCode>,
    pub on_select: Callback<LanguageCode>,
    #[prop_or_default]
    pub aria_label: AttrValue,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    html! {
        <div class={classes!("dropdown", "dropdown-end", (*open).then_some("dropdown-open"))}>
            <button
                type="button"
                class="btn btn-ghost btn-circle btn-sm"
                aria-label={props.aria_label.clone()}
                aria-haspopup="listbox"
                aria-expanded={(*open).to_string()}
                onclick={toggle}
            >
                <img
                    src={flag_src(props.language)}
                    alt={props.language.label()}
                    class="rounded-box size-4.5 object-cover"
                />
            </button>
            <ul class="dropdown-content menu mt-2 w-48 p-2 shadow bg-base-100 rounded-box" role="listbox">
                {for language_options(&props.available, props.language).into_iter().map(|option| {
                    let on_select = props.on_select.clone();
                    let open = open.clone();
                    let next = option.language;
                    let onclick = Callback::from(move |_| {
                        open.set(false);
                        on_select.emit(next);
                    });
                    html! {
                        <li role="option" aria-selected={option.active.to_string()}>
                            <button
                                type="button"
                                class={classes!("flex", "items-center", "gap-2", option.active.then_some("active"))}
                                aria-label={format!("Switch to {}", option.label)}
                                onclick={onclick}
                            >
                                <img src={option.flag_src} alt="" class="rounded-box size-4.5 object-cover" />
                                <span lang={option.language.code()}>{option.label}</span>
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
