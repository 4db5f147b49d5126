//! Translation tables per language and the built-in catalog.
//!
//! # Design
//! - Catalog content is data (JSON embedded at compile time); lookup is code.
//! - Partial or missing tables are tolerated; [`TranslationCatalog::resolve`]
//!   falls back to the key itself so rendering never sees empty text.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::Serialize;
use tracing::error;

use crate::error::{CatalogError, CatalogResult};
use crate::language::LanguageCode;

/// Key to display-text mapping for one language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of `key: text` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when `raw` is not an object of strings.
    pub fn from_json_str(language: LanguageCode, raw: &str) -> CatalogResult<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(raw)
            .map_err(|source| CatalogError::Parse { language, source })?;
        Ok(Self { entries })
    }

    /// Read and parse a table file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when the file cannot be read and
    /// [`CatalogError::Parse`] when its contents are not an object of strings.
    pub fn from_json_file(language: LanguageCode, path: &Path) -> CatalogResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            language,
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(language, &raw)
    }

    /// Insert or replace a single entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Text stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over the keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}

/// Translation tables for every language the site can switch to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    tables: HashMap<LanguageCode, TranslationTable>,
}

static BUILTIN: LazyLock<Arc<TranslationCatalog>> =
    LazyLock::new(|| Arc::new(TranslationCatalog::load_builtin()));

impl TranslationCatalog {
    /// Empty catalog; no language is selectable until a table is added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the catalog shipped with the site.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Builder-style [`TranslationCatalog::insert`].
    #[must_use]
    pub fn with_table(mut self, language: LanguageCode, table: TranslationTable) -> Self {
        self.insert(language, table);
        self
    }

    /// Add or replace the table for `language`.
    pub fn insert(&mut self, language: LanguageCode, table: TranslationTable) {
        self.tables.insert(language, table);
    }

    /// Table for `language`, if the catalog has one.
    #[must_use]
    pub fn table(&self, language: LanguageCode) -> Option<&TranslationTable> {
        self.tables.get(&language)
    }

    /// Whether `language` is selectable.
    #[must_use]
    pub fn contains(&self, language: LanguageCode) -> bool {
        self.tables.contains_key(&language)
    }

    /// Catalog languages in picker order.
    #[must_use]
    pub fn languages(&self) -> Vec<LanguageCode> {
        LanguageCode::all()
            .into_iter()
            .filter(|language| self.contains(*language))
            .collect()
    }

    /// Display text for `key` in `language`, or `key` itself when missing.
    #[must_use]
    pub fn resolve<'a>(&'a self, language: LanguageCode, key: &'a str) -> &'a str {
        self.table(language)
            .and_then(|table| table.get(key))
            .unwrap_or(key)
    }

    /// Keys each language is missing relative to the union of all tables.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        let all_keys: BTreeSet<&str> = self
            .tables
            .values()
            .flat_map(|table| table.keys())
            .collect();
        let gaps = self
            .languages()
            .into_iter()
            .filter_map(|language| {
                let table = self.table(language)?;
                let missing: Vec<String> = all_keys
                    .iter()
                    .filter(|key| !table.contains_key(key))
                    .map(|key| (*key).to_string())
                    .collect();
                (!missing.is_empty()).then_some(CoverageGap { language, missing })
            })
            .collect();
        CoverageReport {
            total_keys: all_keys.len(),
            languages: self.languages(),
            gaps,
        }
    }

    fn load_builtin() -> Self {
        LanguageCode::all()
            .into_iter()
            .fold(Self::new(), |catalog, language| {
                let table = TranslationTable::from_json_str(language, builtin_source(language))
                    .unwrap_or_else(|err| {
                        error!(language = %language, error = %err, "built-in translation table is invalid");
                        TranslationTable::new()
                    });
                catalog.with_table(language, table)
            })
    }
}

const fn builtin_source(language: LanguageCode) -> &'static str {
    match language {
        LanguageCode::Id => include_str!("../i18n/id.json"),
        LanguageCode::En => include_str!("../i18n/en.json"),
        LanguageCode::Ar => include_str!("../i18n/ar.json"),
    }
}

/// Result of [`TranslationCatalog::coverage`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Distinct keys across all tables.
    pub total_keys: usize,
    /// Languages that have a table.
    pub languages: Vec<LanguageCode>,
    /// Languages with missing keys; empty when every table is complete.
    pub gaps: Vec<CoverageGap>,
}

impl CoverageReport {
    /// Whether every table carries every key.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }
}

/// Keys one language lacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoverageGap {
    /// Language with the incomplete table.
    pub language: LanguageCode,
    /// Missing keys, sorted.
    pub missing: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> TranslationCatalog {
        TranslationCatalog::new()
            .with_table(
                LanguageCode::En,
                [("home", "Home"), ("about", "About Us")].into_iter().collect(),
            )
            .with_table(LanguageCode::Ar, [("home", "الرئيسية")].into_iter().collect())
    }

    #[test]
    fn resolve_falls_back_to_key() {
        let catalog = fixture();
        assert_eq!(catalog.resolve(LanguageCode::En, "home"), "Home");
        assert_eq!(catalog.resolve(LanguageCode::Ar, "about"), "about");
        assert_eq!(catalog.resolve(LanguageCode::Id, "home"), "home");
        assert_eq!(catalog.resolve(LanguageCode::En, ""), "");
    }

    #[test]
    fn languages_follow_picker_order() {
        assert_eq!(fixture().languages(), vec![LanguageCode::En, LanguageCode::Ar]);
        assert!(TranslationCatalog::new().languages().is_empty());
    }

    #[test]
    fn coverage_lists_missing_keys() {
        let report = fixture().coverage();
        assert_eq!(report.total_keys, 2);
        assert!(!report.is_complete());
        assert_eq!(
            report.gaps,
            vec![CoverageGap {
                language: LanguageCode::Ar,
                missing: vec!["about".to_string()],
            }]
        );
    }

    #[test]
    fn builtin_catalog_is_complete() {
        let catalog = TranslationCatalog::builtin();
        assert_eq!(catalog.languages(), LanguageCode::all().to_vec());
        let report = catalog.coverage();
        assert!(report.is_complete(), "gaps: {:?}", report.gaps);
        for language in LanguageCode::all() {
            let table = catalog.table(language).map_or(0, TranslationTable::len);
            assert_eq!(table, report.total_keys);
        }
    }

    #[test]
    fn builtin_texts_are_non_empty() {
        let catalog = TranslationCatalog::builtin();
        for language in LanguageCode::all() {
            let Some(table) = catalog.table(language) else {
                panic!("missing built-in table for {language}");
            };
            for key in table.keys() {
                assert!(
                    table.get(key).is_some_and(|text| !text.trim().is_empty()),
                    "{language}.{key} is empty"
                );
            }
        }
    }

    #[test]
    fn rejects_non_string_values() {
        let err = TranslationTable::from_json_str(LanguageCode::En, r#"{"home": 1}"#);
        assert!(matches!(
            err,
            Err(CatalogError::Parse {
                language: LanguageCode::En,
                ..
            })
        ));
    }

    #[test]
    fn loads_table_files() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("en.json");
        fs::write(&path, r#"{"home": "Home"}"#)?;
        let table = TranslationTable::from_json_file(LanguageCode::En, &path)?;
        assert_eq!(table.get("home"), Some("Home"));

        let missing = TranslationTable::from_json_file(LanguageCode::En, &dir.path().join("no.json"));
        assert!(matches!(missing, Err(CatalogError::Io { .. })));
        Ok(())
    }
}
