//! View models shared by the app shell and its components.

use std::rc::Rc;

use mizan_forms::Notice;
use yew::Reducible;

/// How long a toast stays on screen.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Visual variant for toasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information.
    Info,
    /// Rejected input.
    Error,
}

/// Toast message rendered by the toast host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used for dismissal.
    pub id: u64,
    /// Translated title.
    pub title: String,
    /// Translated body.
    pub message: String,
    /// Variant.
    pub kind: ToastKind,
}

impl Toast {
    /// Translate `notice` into a toast with `translate`.
    #[must_use]
    pub fn from_notice<F>(id: u64, notice: Notice, translate: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        Self {
            id,
            title: translate(notice.title_key),
            message: translate(notice.body_key),
            kind: if notice.is_error {
                ToastKind::Error
            } else {
                ToastKind::Info
            },
        }
    }
}

/// Change applied to the toast queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastAction {
    /// Show a new toast after the existing ones.
    Push(Toast),
    /// Remove the toast with this id, if still shown.
    Dismiss(u64),
}

/// Toasts on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Toasts in display order.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Whether a toast with `id` is shown.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.toasts.iter().any(|toast| toast.id == id)
    }

    /// Queue after `action`; other toasts keep their order.
    #[must_use]
    pub fn apply(&self, action: ToastAction) -> Self {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Self { toasts }
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let ToastAction::Dismiss(id) = action
            && !self.contains(id)
        {
            return self;
        }
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mizan_i18n::{LanguageCode, TranslationCatalog};

    #[test]
    fn notice_is_translated_in_active_language() {
        let catalog = TranslationCatalog::builtin();
        let toast = Toast::from_notice(7, Notice::feature_not_implemented(), |key| {
            catalog.resolve(LanguageCode::En, key).to_string()
        });
        assert_eq!(toast.id, 7);
        assert_eq!(toast.title, "Feature Not Available");
        assert_eq!(toast.kind, ToastKind::Info);
        assert!(toast.message.contains("isn't implemented"));
    }

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            title: format!("title {id}"),
            message: String::new(),
            kind: ToastKind::Info,
        }
    }

    #[test]
    fn dismissing_one_toast_keeps_the_others_in_order() {
        let queue = [1, 2, 3]
            .into_iter()
            .fold(ToastQueue::default(), |queue, id| queue.apply(ToastAction::Push(toast(id))));
        let after = queue.apply(ToastAction::Dismiss(2));
        let ids: Vec<u64> = after.toasts().iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(queue.contains(2));
    }

    #[test]
    fn late_dismissal_of_a_gone_toast_changes_nothing() {
        let queue = Rc::new(ToastQueue::default().apply(ToastAction::Push(toast(1))));
        let same = Rc::clone(&queue).reduce(ToastAction::Dismiss(9));
        assert!(Rc::ptr_eq(&queue, &same));

        let emptied = queue.reduce(ToastAction::Dismiss(1));
        assert!(emptied.toasts().is_empty());
    }
}
