//! Error types for the translation layer.
//!
//! Resolution of a translation key never fails, so nothing here describes a
//! missing translation. These errors cover construction of tables, the strict
//! language selection policy and the persistence backend.

use thiserror::Error;

/// Errors surfaced by the i18n layer.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A language code outside the supported set was requested under the
    /// strict selection policy.
    #[error("Unsupported language code: '{0}'")]
    InvalidLanguage(String),

    /// The fallback language table does not define every translation key.
    #[error("Fallback language '{language}' is missing {} key(s): {}", .missing.len(), .missing.join(", "))]
    IncompleteFallback {
        language: &'static str,
        missing: Vec<&'static str>,
    },

    /// A JSON override document could not be parsed.
    #[error("Invalid translation override for '{language}': {source}")]
    Override {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    /// The override directory or one of its files could not be read.
    #[error("Cannot read translation overrides at {path}: {source}")]
    OverrideIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An override file is named after a code outside the supported set.
    #[error("Override file {path} is not named after a supported language code")]
    UnknownOverrideLanguage { path: String },

    /// An override file was read but could not be merged.
    #[error("Failed to apply override file {path}: {source}")]
    OverrideFile {
        path: String,
        #[source]
        source: Box<I18nError>,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by a [`LanguageStore`](crate::i18n::LanguageStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored document exists but cannot be read as a key/value object.
    #[error("Stored preferences at {path} are corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[source] serde_json::Error),

    /// In-memory store lock was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    Poisoned,
}
