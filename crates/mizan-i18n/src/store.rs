//! Active-language state shared by every rendering component.
//!
//! # Design
//! - One owned store per client session, handed to consumers by reference or
//!   context; tests build fresh instances over fixture catalogs.
//! - Every out-of-domain input is absorbed: unknown keys echo back, unknown
//!   codes are ignored, unreadable preferences mean "use the default".

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::TranslationCatalog;
use crate::error::PreferenceResult;
use crate::language::{DEFAULT_LANGUAGE, LanguageCode, TextDirection};
use crate::storage::PreferenceStore;

/// Preference key holding the chosen language code.
pub const LANGUAGE_PREFERENCE_KEY: &str = "language";

/// Current language plus the catalog and preference storage behind it.
#[derive(Debug)]
pub struct LocalizationStore<S> {
    catalog: Arc<TranslationCatalog>,
    current: LanguageCode,
    storage: S,
}

impl<S: PreferenceStore> LocalizationStore<S> {
    /// Build the store at startup, restoring a stored language when valid.
    #[must_use]
    pub fn initialize(catalog: Arc<TranslationCatalog>, storage: S) -> Self {
        Self::initialize_with_default(catalog, storage, DEFAULT_LANGUAGE)
    }

    /// [`LocalizationStore::initialize`] with an explicit first-run language.
    #[must_use]
    pub fn initialize_with_default(
        catalog: Arc<TranslationCatalog>,
        storage: S,
        default: LanguageCode,
    ) -> Self {
        let current = restore_language(&catalog, &storage).unwrap_or(default);
        debug!(language = %current, "localization store initialised");
        Self {
            catalog,
            current,
            storage,
        }
    }

    /// Display text for `key` in the current language, or `key` when missing.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.resolve(self.current, key)
    }

    /// Owned variant of [`LocalizationStore::translate`].
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.translate(key).to_string()
    }

    /// Switch to the language named by `code` and persist it.
    ///
    /// Codes that are not catalog languages leave both the current language
    /// and the stored preference untouched. Returns whether the switch applied.
    pub fn change_language(&mut self, code: &str) -> bool {
        match LanguageCode::from_code(code) {
            Some(language) => self.set_language(language),
            None => {
                warn!(code, "ignoring unsupported language code");
                false
            }
        }
    }

    /// Typed variant of [`LocalizationStore::change_language`].
    ///
    /// A failed write is logged; the session still switches.
    pub fn set_language(&mut self, language: LanguageCode) -> bool {
        match self.try_set_language(language) {
            Ok(applied) => applied,
            Err(err) => {
                warn!(language = %language, error = %err, "failed to persist language preference");
                true
            }
        }
    }

    /// Switch to `language` and report whether the preference was written.
    ///
    /// Returns `Ok(false)` for a language without a table, leaving everything
    /// untouched. The in-memory switch happens before the write.
    ///
    /// # Errors
    ///
    /// Returns the storage error when the preference cannot be saved.
    pub fn try_set_language(&mut self, language: LanguageCode) -> PreferenceResult<bool> {
        if !self.catalog.contains(language) {
            warn!(language = %language, "ignoring language without a translation table");
            return Ok(false);
        }
        self.current = language;
        debug!(language = %language, rtl = language.is_right_to_left(), "language changed");
        self.storage.save(LANGUAGE_PREFERENCE_KEY, language.code())?;
        Ok(true)
    }

    /// Language currently used by [`LocalizationStore::translate`].
    #[must_use]
    pub const fn current_language(&self) -> LanguageCode {
        self.current
    }

    /// Whether the current language is laid out right to left.
    #[must_use]
    pub const fn is_right_to_left(&self) -> bool {
        self.current.is_right_to_left()
    }

    /// Text direction for the current language.
    #[must_use]
    pub const fn direction(&self) -> TextDirection {
        self.current.direction()
    }

    /// Languages a picker may offer.
    #[must_use]
    pub fn available_languages(&self) -> Vec<LanguageCode> {
        self.catalog.languages()
    }

    /// Catalog backing the lookups.
    #[must_use]
    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    /// Preference storage backing the store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the storage, e.g. to re-initialize over it after a reload.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn restore_language<S: PreferenceStore>(
    catalog: &TranslationCatalog,
    storage: &S,
) -> Option<LanguageCode> {
    let stored = match storage.load(LANGUAGE_PREFERENCE_KEY) {
        Ok(stored) => stored?,
        Err(err) => {
            warn!(error = %err, "language preference unreadable; using default");
            return None;
        }
    };
    let language = LanguageCode::from_code(&stored).filter(|language| catalog.contains(*language));
    if language.is_none() {
        warn!(stored = %stored, "stored language preference is not supported; using default");
    }
    language
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TranslationTable;
    use crate::error::PreferenceError;
    use crate::storage::MemoryPreferences;

    fn fixture() -> Arc<TranslationCatalog> {
        Arc::new(
            TranslationCatalog::new()
                .with_table(LanguageCode::Id, [("home", "Beranda")].into_iter().collect())
                .with_table(LanguageCode::En, [("home", "Home")].into_iter().collect())
                .with_table(LanguageCode::Ar, TranslationTable::new()),
        )
    }

    #[derive(Default)]
    struct BrokenStorage {
        writes: usize,
    }

    impl PreferenceStore for BrokenStorage {
        fn load(&self, key: &str) -> PreferenceResult<Option<String>> {
            Err(PreferenceError::Backend {
                operation: "get",
                key: key.to_string(),
                detail: "unavailable".into(),
            })
        }

        fn save(&mut self, key: &str, _value: &str) -> PreferenceResult<()> {
            self.writes += 1;
            Err(PreferenceError::Backend {
                operation: "set",
                key: key.to_string(),
                detail: "quota exceeded".into(),
            })
        }
    }

    #[test]
    fn defaults_to_indonesian_without_preference() {
        let store = LocalizationStore::initialize(fixture(), MemoryPreferences::new());
        assert_eq!(store.current_language(), LanguageCode::Id);
        assert_eq!(store.translate("home"), "Beranda");
        assert!(!store.is_right_to_left());
    }

    #[test]
    fn explicit_default_is_honoured() {
        let store = LocalizationStore::initialize_with_default(
            fixture(),
            MemoryPreferences::new(),
            LanguageCode::En,
        );
        assert_eq!(store.translate("home"), "Home");
    }

    #[test]
    fn restores_stored_language() {
        let storage = MemoryPreferences::with_value(LANGUAGE_PREFERENCE_KEY, "en");
        let store = LocalizationStore::initialize(fixture(), storage);
        assert_eq!(store.current_language(), LanguageCode::En);
    }

    #[test]
    fn malformed_stored_values_fall_back_to_default() {
        for stored in ["xx", "", "EN", "\"en\"", "fr"] {
            let storage = MemoryPreferences::with_value(LANGUAGE_PREFERENCE_KEY, stored);
            let store = LocalizationStore::initialize(fixture(), storage);
            assert_eq!(store.current_language(), LanguageCode::Id, "stored {stored:?}");
        }
    }

    #[test]
    fn stored_language_missing_from_catalog_is_ignored() {
        let catalog = Arc::new(
            TranslationCatalog::new().with_table(LanguageCode::Id, TranslationTable::new()),
        );
        let storage = MemoryPreferences::with_value(LANGUAGE_PREFERENCE_KEY, "en");
        let store = LocalizationStore::initialize(catalog, storage);
        assert_eq!(store.current_language(), LanguageCode::Id);
    }

    #[test]
    fn change_language_persists_and_flips_direction() {
        let mut store = LocalizationStore::initialize(fixture(), MemoryPreferences::new());
        assert!(store.change_language("ar"));
        assert!(store.is_right_to_left());
        assert_eq!(store.direction(), TextDirection::Rtl);
        assert_eq!(store.storage().get(LANGUAGE_PREFERENCE_KEY), Some("ar"));

        assert!(store.change_language("en"));
        assert!(!store.is_right_to_left());
        assert_eq!(store.storage().get(LANGUAGE_PREFERENCE_KEY), Some("en"));
    }

    #[test]
    fn unsupported_code_is_a_no_op() {
        let mut store = LocalizationStore::initialize(fixture(), MemoryPreferences::new());
        assert!(store.change_language("en"));
        assert!(!store.change_language("xx"));
        assert!(!store.change_language("En"));
        assert_eq!(store.current_language(), LanguageCode::En);
        assert_eq!(store.storage().get(LANGUAGE_PREFERENCE_KEY), Some("en"));
    }

    #[test]
    fn language_without_table_cannot_be_selected() {
        let catalog = Arc::new(
            TranslationCatalog::new().with_table(LanguageCode::En, TranslationTable::new()),
        );
        let mut store = LocalizationStore::initialize_with_default(
            catalog,
            MemoryPreferences::new(),
            LanguageCode::En,
        );
        assert!(!store.set_language(LanguageCode::Ar));
        assert_eq!(store.current_language(), LanguageCode::En);
        assert_eq!(store.storage().get(LANGUAGE_PREFERENCE_KEY), None);
    }

    #[test]
    fn partial_tables_echo_keys() {
        let mut store = LocalizationStore::initialize(fixture(), MemoryPreferences::new());
        assert!(store.change_language("ar"));
        assert_eq!(store.translate("home"), "home");
        assert_eq!(store.text("home"), "home");
    }

    #[test]
    fn storage_failures_are_absorbed() {
        let mut store = LocalizationStore::initialize(fixture(), BrokenStorage::default());
        assert_eq!(store.current_language(), LanguageCode::Id);
        assert!(store.change_language("en"));
        assert_eq!(store.translate("home"), "Home");
        assert_eq!(store.storage().writes, 1);
    }

    #[test]
    fn try_set_language_surfaces_write_failures() {
        let mut store = LocalizationStore::initialize(fixture(), BrokenStorage::default());
        assert!(matches!(
            store.try_set_language(LanguageCode::Ar),
            Err(PreferenceError::Backend { .. })
        ));
        assert_eq!(store.current_language(), LanguageCode::Ar);
    }

    #[test]
    fn try_set_language_reports_unknown_table_without_writing() -> PreferenceResult<()> {
        let catalog = Arc::new(
            TranslationCatalog::new().with_table(LanguageCode::Id, TranslationTable::new()),
        );
        let mut store = LocalizationStore::initialize(catalog, MemoryPreferences::new());
        assert!(!store.try_set_language(LanguageCode::En)?);
        assert!(store.try_set_language(LanguageCode::Id)?);
        assert_eq!(store.storage().get(LANGUAGE_PREFERENCE_KEY), Some("id"));
        Ok(())
    }
}
