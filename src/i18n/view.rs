//! Read-only snapshot of every translation for one language.

use crate::i18n::{Language, TranslationKey};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::Index;

/// Every translation key resolved for a single language.
///
/// The view is rebuilt by `TranslationService` whenever the language changes.
/// Besides keyed lookup it has one accessor per key (`view.home()`), generated
/// alongside [`TranslationKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationView {
    language: Language,
    // Indexed by `TranslationKey::index`; always `TranslationKey::ALL.len()` long.
    values: Vec<String>,
}

impl TranslationView {
    /// Build a view by resolving each key with `resolve`.
    pub(crate) fn build<F>(language: Language, mut resolve: F) -> Self
    where
        F: FnMut(TranslationKey) -> String,
    {
        let values = TranslationKey::ALL.iter().map(|key| resolve(*key)).collect();
        Self { language, values }
    }

    /// The language this view was resolved for.
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: TranslationKey) -> &str {
        &self.values[key.index()]
    }

    /// Iterate over `(key, text)` pairs in key declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TranslationKey, &str)> + '_ {
        TranslationKey::ALL
            .iter()
            .zip(self.values.iter())
            .map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Index<TranslationKey> for TranslationView {
    type Output = str;

    fn index(&self, key: TranslationKey) -> &str {
        self.get(key)
    }
}

/// Serializes as a flat `{ "camelCaseKey": "text", ... }` object.
impl Serialize for TranslationView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
