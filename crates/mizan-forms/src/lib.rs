#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Form handling for the Mizan site: one sanitization policy shared by every
//! input, plus the donation and contact flows built on it.
//!
//! None of the flows reach a backend. A valid submission yields the
//! "feature not implemented" [`Notice`].

pub mod contact;
pub mod donation;
pub mod sanitize;

use serde::Serialize;

/// Translation key of the "not available yet" notice title.
pub const FEATURE_UNAVAILABLE_KEY: &str = "featureUnavailable";
/// Translation key of the "not implemented yet" notice body.
pub const FEATURE_NOT_IMPLEMENTED_KEY: &str = "featureNotImplemented";

/// Toast content expressed as translation keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Key for the toast title.
    pub title_key: &'static str,
    /// Key for the toast body.
    pub body_key: &'static str,
    /// Whether the toast reports a problem with the user's input.
    pub is_error: bool,
}

impl Notice {
    /// Notice shown for every action that would need a server.
    #[must_use]
    pub const fn feature_not_implemented() -> Self {
        Self {
            title_key: FEATURE_UNAVAILABLE_KEY,
            body_key: FEATURE_NOT_IMPLEMENTED_KEY,
            is_error: false,
        }
    }

    pub(crate) const fn error(title_key: &'static str, body_key: &'static str) -> Self {
        Self {
            title_key,
            body_key,
            is_error: true,
        }
    }
}

/// Loose shape check: one `@`, non-empty local part, dotted domain.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("donor@example.org"));
        assert!(!looks_like_email("donor@localhost"));
        assert!(!looks_like_email("@example.org"));
        assert!(!looks_like_email("a@b@example.org"));
        assert!(!looks_like_email("donor@example."));
        assert!(!looks_like_email(""));
    }

    #[test]
    fn feature_notice_uses_shared_keys() {
        let notice = Notice::feature_not_implemented();
        assert_eq!(notice.body_key, "featureNotImplemented");
        assert!(!notice.is_error);
    }
}
