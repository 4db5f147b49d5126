//! Browser `localStorage` adapter for the language preference.

use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use mizan_i18n::{PreferenceError, PreferenceResult, PreferenceStore};

/// Preference storage backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self, key: &str) -> PreferenceResult<Option<String>> {
        match LocalStorage::get::<String>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(backend_error("load", key, &err)),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        LocalStorage::set(key, value).map_err(|err| backend_error("save", key, &err))
    }
}

fn backend_error(operation: &'static str, key: &str, err: &StorageError) -> PreferenceError {
    let detail = err.to_string();
    console::error!("storage operation failed", operation, key, detail.as_str());
    PreferenceError::Backend {
        operation,
        key: key.to_string(),
        detail,
    }
}
