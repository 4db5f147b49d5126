//! Durable preference storage port and native adapters.
//!
//! # Design
//! - One small string key-value trait so browser storage, files and test
//!   doubles plug into the same store.
//! - Adapters report failures; deciding to ignore them is the caller's job.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{PreferenceError, PreferenceResult};

/// String key-value storage that survives across sessions.
pub trait PreferenceStore {
    /// Read the value stored under `key`; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`PreferenceError`] when the backend cannot be read.
    fn load(&self, key: &str) -> PreferenceResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`PreferenceError`] when the backend cannot be written.
    fn save(&mut self, key: &str, value: &str) -> PreferenceResult<()>;
}

/// In-process preferences that vanish with the process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values }
    }

    /// Direct read without the `Result` wrapper.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> PreferenceResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept in a JSON object file, e.g. `{"language": "en"}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Adapter over `path`; the file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> PreferenceResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PreferenceError::Io {
                    operation: "preferences.read",
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| PreferenceError::Json {
            operation: "preferences.parse",
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> PreferenceResult<()> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PreferenceError::Io {
                operation: "preferences.create_dir",
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let body = serde_json::to_string_pretty(values).map_err(|source| PreferenceError::Json {
            operation: "preferences.serialize",
            path: self.path.clone(),
            source,
        })?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, body).map_err(|source| PreferenceError::Io {
            operation: "preferences.write",
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &self.path).map_err(|source| PreferenceError::Io {
            operation: "preferences.rename",
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self, key: &str) -> PreferenceResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        // Unparsable contents are replaced; an unreadable file is an error.
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(err @ PreferenceError::Json { .. }) => {
                warn!(path = %self.path.display(), error = %err, "replacing unparsable preference file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() -> PreferenceResult<()> {
        let mut store = MemoryPreferences::new();
        assert_eq!(store.load("language")?, None);
        store.save("language", "en")?;
        store.save("language", "ar")?;
        assert_eq!(store.load("language")?.as_deref(), Some("ar"));
        assert_eq!(store.get("language"), Some("ar"));
        Ok(())
    }

    #[test]
    fn file_store_missing_file_is_empty() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FilePreferences::new(dir.path().join("prefs.json"));
        assert_eq!(store.load("language")?, None);
        Ok(())
    }

    #[test]
    fn file_store_persists_and_keeps_other_keys() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("prefs.json");
        fs::create_dir_all(dir.path().join("nested"))?;
        fs::write(&path, r#"{"theme": "dark"}"#)?;

        let mut store = FilePreferences::new(&path);
        store.save("language", "en")?;

        let reopened = FilePreferences::new(&path);
        assert_eq!(reopened.load("language")?.as_deref(), Some("en"));
        assert_eq!(reopened.load("theme")?.as_deref(), Some("dark"));
        assert!(!path.with_extension("json.tmp").exists());
        Ok(())
    }

    #[test]
    fn file_store_creates_parent_directories() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("a").join("b").join("prefs.json");
        let mut store = FilePreferences::new(&path);
        store.save("language", "id")?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn file_store_reports_corrupt_contents() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json")?;
        let mut store = FilePreferences::new(&path);
        assert!(matches!(
            store.load("language"),
            Err(PreferenceError::Json { .. })
        ));

        store.save("language", "ar")?;
        assert_eq!(store.load("language")?.as_deref(), Some("ar"));
        Ok(())
    }

    #[test]
    fn file_store_save_reports_unreadable_path() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut store = FilePreferences::new(dir.path());
        assert!(matches!(
            store.save("language", "en"),
            Err(PreferenceError::Io { operation: "preferences.read", .. })
        ));
        assert!(dir.path().is_dir());
        Ok(())
    }
}
