//! Command handlers grouped by concern.

pub(crate) mod catalog;
pub(crate) mod lang;
pub(crate) mod sanitize;
pub(crate) mod translate;
