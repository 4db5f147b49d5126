//! Contact form validation.

use serde::Serialize;
use thiserror::Error;

use crate::sanitize::{SanitizeProfile, sanitize};
use crate::{Notice, looks_like_email};

/// Contact form state as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// Sanitized contact message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// Reasons a contact form is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Fields left empty after sanitization.
    #[error("contact form is incomplete")]
    Incomplete {
        /// Names of the empty fields, in form order.
        missing: Vec<&'static str>,
    },
    /// Email does not look like an address.
    #[error("contact email is malformed")]
    InvalidEmail,
}

impl ContactError {
    /// Toast describing the problem.
    #[must_use]
    pub const fn notice(&self) -> Notice {
        Notice::error("incompleteInfo", "incompleteInfoHint")
    }
}

impl ContactForm {
    /// Sanitize every field; all four are required.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Incomplete`] listing empty fields, or
    /// [`ContactError::InvalidEmail`].
    pub fn validate(&self) -> Result<ContactDraft, ContactError> {
        let draft = ContactDraft {
            name: sanitize(&self.name, SanitizeProfile::Contact),
            email: sanitize(&self.email, SanitizeProfile::Contact),
            subject: sanitize(&self.subject, SanitizeProfile::Contact),
            message: sanitize(&self.message, SanitizeProfile::Contact),
        };
        let missing: Vec<&'static str> = [
            ("name", &draft.name),
            ("email", &draft.email),
            ("subject", &draft.subject),
            ("message", &draft.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(ContactError::Incomplete { missing });
        }
        if !looks_like_email(&draft.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(draft)
    }

    /// Validate, then answer with the notice the site shows.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactError`] when validation fails.
    pub fn submit(&self) -> Result<Notice, ContactError> {
        self.validate().map(|_| Notice::feature_not_implemented())
    }
}
