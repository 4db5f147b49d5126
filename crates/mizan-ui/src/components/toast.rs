use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::models::{TOAST_TIMEOUT_MS, Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
    pub dismiss_label: String,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast toast-end toast-bottom" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                    dismiss_label={props.dismiss_label.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
    dismiss_label: String,
}

/// One toast; its timer starts on mount and only restarts for a new id.
#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u64| {
                let id = *id;
                let handle = Timeout::new(TOAST_TIMEOUT_MS, move || on_dismiss.emit(id));
                move || drop(handle)
            },
            props.toast.id,
        );
    }

    let toast = &props.toast;
    let class = match toast.kind {
        ToastKind::Info => "alert-info",
        ToastKind::Error => "alert-error",
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = toast.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("alert", class)} role="status">
            <div>
                <strong>{toast.title.clone()}</strong>
                <p>{toast.message.clone()}</p>
            </div>
            <button class="btn btn-ghost btn-xs" aria-label={props.dismiss_label.clone()} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
