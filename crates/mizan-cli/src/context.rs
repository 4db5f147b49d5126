//! Shared store wiring and error types for the CLI.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use mizan_i18n::{FilePreferences, LocalizationStore, TranslationCatalog};

use crate::output::OutputFormat;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Application context passed to command handlers.
#[derive(Debug, Clone)]
pub(crate) struct AppContext {
    pub(crate) prefs_path: PathBuf,
    pub(crate) output: OutputFormat,
}

impl AppContext {
    /// Localization store over the built-in catalog and the preference file.
    pub(crate) fn open_store(&self) -> LocalizationStore<FilePreferences> {
        LocalizationStore::initialize(
            TranslationCatalog::builtin(),
            FilePreferences::new(&self.prefs_path),
        )
    }
}
