//! # Design
//!
//! - Errors stay internal to the adapters and loaders; the store absorbs them.
//! - Constant messages, with the failing operation and path carried as fields.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::language::LanguageCode;

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors produced while building translation tables.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Table source was not a JSON object of strings.
    #[error("translation table parse failure")]
    Parse {
        /// Language the table was being loaded for.
        language: LanguageCode,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Reading a table file from disk failed.
    #[error("translation table io failure")]
    Io {
        /// Language the table was being loaded for.
        language: LanguageCode,
        /// File that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

/// Result type for preference storage.
pub type PreferenceResult<T> = Result<T, PreferenceError>;

/// Errors produced by durable preference adapters.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// IO failure while reading or writing the preference file.
    #[error("preference io failure")]
    Io {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Preference file contents were not a JSON object of strings.
    #[error("preference json failure")]
    Json {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Backend-specific failure (for example browser storage quota).
    #[error("preference backend failure")]
    Backend {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Key involved in the failure.
        key: String,
        /// Backend detail message.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages_are_constant_and_sources_preserved() {
        let err = PreferenceError::Io {
            operation: "read",
            path: PathBuf::from("/tmp/prefs.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "preference io failure");
        assert!(err.source().is_some());

        let backend = PreferenceError::Backend {
            operation: "set",
            key: "language".into(),
            detail: "quota".into(),
        };
        assert_eq!(backend.to_string(), "preference backend failure");
        assert!(backend.source().is_none());
    }
}
