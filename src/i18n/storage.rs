//! Persistence backends for the language selection.
//!
//! The interface mirrors browser local storage: string values under string
//! keys. `TranslationService` owns the `"language"` key; other keys in the
//! same backend are left alone.

use crate::error::StoreError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Key/value persistence used by `TranslationService`.
pub trait LanguageStore {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: LanguageStore + ?Sized> LanguageStore for &T {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

impl<T: LanguageStore + ?Sized> LanguageStore for Arc<T> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

// ==================== File Store ====================

/// Stores values in a JSON object file, e.g. `{"language": "hi"}`.
///
/// The file may be shared with other preferences of any JSON type. Only
/// string values are visible through [`LanguageStore::load`]; `save` rewrites
/// its own key and leaves every other entry as it was.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.display_path(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: self.display_path(),
            source,
        })
    }
}

impl LanguageStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.read_all()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                warn!(
                    "Ignoring non-string value for '{}' in {}: {}",
                    key,
                    self.display_path(),
                    other
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // Only a document that is not a JSON object gets replaced.
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StoreError::Corrupt { .. }) => {
                debug!("Replacing corrupt preferences file {}", self.display_path());
                Map::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&values).map_err(StoreError::Serialize)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.display_path(),
            source,
        })
    }
}

// ==================== Memory Store ====================

/// Process-local store for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl LanguageStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
