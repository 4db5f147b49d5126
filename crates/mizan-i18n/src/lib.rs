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
//! Localization store for the Mizan foundation site.
//!
//! Layout:
//! - `language.rs`: supported language codes and text direction
//! - `catalog.rs`: translation tables, the built-in catalog, coverage checks
//! - `storage.rs`: durable preference port plus memory and file adapters
//! - `store.rs`: the active-language state with `translate`/`change_language`
//! - `error.rs`: error types for catalog parsing and preference storage

pub mod catalog;
pub mod error;
pub mod language;
pub mod storage;
pub mod store;

pub use catalog::{CoverageGap, CoverageReport, TranslationCatalog, TranslationTable};
pub use error::{CatalogError, CatalogResult, PreferenceError, PreferenceResult};
pub use language::{DEFAULT_LANGUAGE, LanguageCode, TextDirection};
pub use storage::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use store::{LANGUAGE_PREFERENCE_KEY, LocalizationStore};
