//! Translation table: per-language key/text maps with a guaranteed-complete
//! fallback language.

use crate::error::I18nError;
use crate::i18n::strings::builtin_strings;
use crate::i18n::{Language, TranslationKey};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Per-language translations.
///
/// Invariant: the fallback language defines every [`TranslationKey`] with a
/// non-empty string. Every constructor and mutator checks it.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    fallback: Language,
    entries: HashMap<Language, HashMap<TranslationKey, String>>,
}

impl TranslationTable {
    /// Create a table from explicit entries.
    ///
    /// Languages without an entry are treated as empty (every key falls back).
    pub fn new(
        fallback: Language,
        entries: HashMap<Language, HashMap<TranslationKey, String>>,
    ) -> Result<Self, I18nError> {
        let table = Self { fallback, entries };
        table.check_fallback()?;
        Ok(table)
    }

    /// The table compiled into the crate.
    pub fn builtin() -> Result<Self, I18nError> {
        let entries = Language::ALL
            .iter()
            .map(|language| {
                let strings = builtin_strings(*language)
                    .iter()
                    .map(|(key, text)| (*key, (*text).to_string()))
                    .collect();
                (*language, strings)
            })
            .collect();

        Self::new(Language::fallback(), entries)
    }

    /// The language that backs every missing key.
    pub fn fallback(&self) -> Language {
        self.fallback
    }

    /// Text for `key` in `language` only, ignoring fallback.
    ///
    /// Empty strings are treated as absent.
    pub fn lookup(&self, language: Language, key: TranslationKey) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|strings| strings.get(&key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Keys with no usable text in `language`, in declaration order.
    pub fn missing_keys(&self, language: Language) -> Vec<TranslationKey> {
        TranslationKey::ALL
            .iter()
            .copied()
            .filter(|key| self.lookup(language, *key).is_none())
            .collect()
    }

    /// Number of keys `language` defines itself.
    pub fn defined_count(&self, language: Language) -> usize {
        TranslationKey::ALL.len() - self.missing_keys(language).len()
    }

    /// `(key, text)` pairs `language` defines itself.
    pub fn entries(&self, language: Language) -> impl Iterator<Item = (TranslationKey, &str)> + '_ {
        TranslationKey::ALL
            .iter()
            .filter_map(move |key| self.lookup(language, *key).map(|text| (*key, text)))
    }

    /// Merge a flat JSON object of `{"camelCaseKey": "text"}` over `language`.
    ///
    /// Unknown keys reject the whole document. The merge is all-or-nothing:
    /// if it would leave the fallback language incomplete, nothing changes.
    ///
    /// # Returns
    /// The number of keys written.
    pub fn merge_json(&mut self, language: Language, json: &str) -> Result<usize, I18nError> {
        let overrides: HashMap<TranslationKey, String> =
            serde_json::from_str(json).map_err(|source| I18nError::Override {
                language: language.code().to_string(),
                source,
            })?;

        let mut merged = self.entries.get(&language).cloned().unwrap_or_default();
        let count = overrides.len();
        merged.extend(overrides);

        let previous = self.entries.insert(language, merged);
        if let Err(e) = self.check_fallback() {
            match previous {
                Some(previous) => self.entries.insert(language, previous),
                None => self.entries.remove(&language),
            };
            return Err(e);
        }

        debug!("Merged {} override(s) into {} table", count, language);
        Ok(count)
    }

    /// Merge every `<code>.json` file in `dir`, in file-name order.
    ///
    /// Files without a `.json` extension and subdirectories are ignored. A
    /// `.json` file whose stem is not a supported language code is an error,
    /// as is any file that fails [`merge_json`](Self::merge_json). Errors name
    /// the offending file and leave the table unchanged.
    ///
    /// # Returns
    /// The total number of keys written.
    pub fn merge_dir(&mut self, dir: &Path) -> Result<usize, I18nError> {
        let read_error = |path: &Path, source| I18nError::OverrideIo {
            path: path.display().to_string(),
            source,
        };

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| read_error(dir, e))? {
            let path = entry.map_err(|e| read_error(dir, e))?.path();
            if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                files.push(path);
            }
        }
        files.sort();

        let mut staged = self.clone();
        let mut total = 0;
        for path in &files {
            let language = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|code| Language::from_code(code).ok())
                .ok_or_else(|| I18nError::UnknownOverrideLanguage {
                    path: path.display().to_string(),
                })?;

            let json = fs::read_to_string(path).map_err(|e| read_error(path, e))?;
            let count = staged
                .merge_json(language, &json)
                .map_err(|source| I18nError::OverrideFile {
                    path: path.display().to_string(),
                    source: Box::new(source),
                })?;

            info!("Loaded {} override(s) for {} from {}", count, language, path.display());
            total += count;
        }

        *self = staged;
        Ok(total)
    }

    fn check_fallback(&self) -> Result<(), I18nError> {
        let missing: Vec<_> = self
            .missing_keys(self.fallback)
            .into_iter()
            .map(|key| key.as_str())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(I18nError::IncompleteFallback {
                language: self.fallback.code(),
                missing,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn complete_english() -> HashMap<TranslationKey, String> {
        TranslationKey::ALL
            .iter()
            .map(|key| (*key, format!("en:{}", key)))
            .collect()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_builtin_table_is_valid() {
        let table = TranslationTable::builtin().expect("Built-in table should be complete");
        assert_eq!(table.fallback(), Language::English);
        assert!(table.missing_keys(Language::English).is_empty());
    }

    #[test]
    fn test_new_rejects_incomplete_fallback() {
        let mut english = complete_english();
        english.remove(&TranslationKey::Checkout);

        let result = TranslationTable::new(
            Language::English,
            HashMap::from([(Language::English, english)]),
        );

        match result {
            Err(I18nError::IncompleteFallback { language, missing }) => {
                assert_eq!(language, "en");
                assert_eq!(missing, vec!["checkout"]);
            }
            other => panic!("Expected IncompleteFallback, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_empty_fallback_string() {
        let mut english = complete_english();
        english.insert(TranslationKey::Home, String::new());

        let result = TranslationTable::new(
            Language::English,
            HashMap::from([(Language::English, english)]),
        );
        assert!(matches!(result, Err(I18nError::IncompleteFallback { .. })));
    }

    #[test]
    fn test_new_rejects_missing_fallback_language() {
        let result = TranslationTable::new(Language::English, HashMap::new());
        assert!(result.is_err());
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_does_not_fall_back() {
        let table = TranslationTable::builtin().unwrap();
        assert_eq!(table.lookup(Language::Maithili, TranslationKey::Home), Some("होम"));
        assert_eq!(table.lookup(Language::Maithili, TranslationKey::Checkout), None);
    }

    #[test]
    fn test_lookup_treats_empty_as_absent() {
        let table = TranslationTable::new(
            Language::English,
            HashMap::from([
                (Language::English, complete_english()),
                (
                    Language::Hindi,
                    HashMap::from([(TranslationKey::Home, String::new())]),
                ),
            ]),
        )
        .unwrap();

        assert_eq!(table.lookup(Language::Hindi, TranslationKey::Home), None);
    }

    #[test]
    fn test_missing_keys_and_counts() {
        let table = TranslationTable::builtin().unwrap();
        assert!(table.missing_keys(Language::Hindi).is_empty());
        assert_eq!(table.defined_count(Language::Hindi), TranslationKey::ALL.len());

        let missing = table.missing_keys(Language::Bhojpuri);
        assert!(missing.contains(&TranslationKey::Checkout));
        assert_eq!(
            table.defined_count(Language::Bhojpuri) + missing.len(),
            TranslationKey::ALL.len()
        );
    }

    #[test]
    fn test_entries_only_own_strings() {
        let table = TranslationTable::builtin().unwrap();
        let count = table.entries(Language::Maithili).count();
        assert_eq!(count, table.defined_count(Language::Maithili));
    }

    // ==================== merge_json Tests ====================

    #[test]
    fn test_merge_json_adds_and_overrides() {
        let mut table = TranslationTable::builtin().unwrap();
        let written = table
            .merge_json(
                Language::Maithili,
                r#"{"checkout": "चेकआउट करू", "home": "गृह"}"#,
            )
            .expect("Should merge");

        assert_eq!(written, 2);
        assert_eq!(table.lookup(Language::Maithili, TranslationKey::Checkout), Some("चेकआउट करू"));
        assert_eq!(table.lookup(Language::Maithili, TranslationKey::Home), Some("गृह"));
        // Untouched keys survive
        assert_eq!(table.lookup(Language::Maithili, TranslationKey::Cart), Some("कार्ट"));
    }

    #[test]
    fn test_merge_json_unknown_key_rejected() {
        let mut table = TranslationTable::builtin().unwrap();
        let result = table.merge_json(Language::Hindi, r#"{"notAKey": "x"}"#);

        assert!(matches!(result, Err(I18nError::Override { ref language, .. }) if language == "hi"));
    }

    #[test]
    fn test_merge_json_malformed_rejected() {
        let mut table = TranslationTable::builtin().unwrap();
        assert!(table.merge_json(Language::Hindi, "not json").is_err());
        assert!(table.merge_json(Language::Hindi, r#"["home"]"#).is_err());
    }

    #[test]
    fn test_merge_json_cannot_break_fallback() {
        let mut table = TranslationTable::builtin().unwrap();
        let result = table.merge_json(Language::English, r#"{"home": ""}"#);

        assert!(matches!(result, Err(I18nError::IncompleteFallback { .. })));
        assert_eq!(table.lookup(Language::English, TranslationKey::Home), Some("Home"));
    }

    // ==================== merge_dir Tests ====================

    fn overrides_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, contents) in files {
            fs::write(temp_dir.path().join(name), contents).expect("Failed to write override");
        }
        temp_dir
    }

    #[test]
    fn test_merge_dir_applies_json_files() {
        let dir = overrides_dir(&[
            ("bho.json", r#"{"checkout": "चेकआउट करीं"}"#),
            ("mai.json", r#"{"checkout": "चेकआउट करू", "compare": "तुलना"}"#),
            ("README.txt", "not an override"),
        ]);
        fs::create_dir(dir.path().join("archive.json")).unwrap();

        let mut table = TranslationTable::builtin().unwrap();
        let written = table.merge_dir(dir.path()).expect("Should merge directory");

        assert_eq!(written, 3);
        assert_eq!(table.lookup(Language::Bhojpuri, TranslationKey::Checkout), Some("चेकआउट करीं"));
        assert_eq!(table.lookup(Language::Maithili, TranslationKey::Compare), Some("तुलना"));
    }

    #[test]
    fn test_merge_dir_empty_directory() {
        let dir = overrides_dir(&[]);
        let mut table = TranslationTable::builtin().unwrap();
        assert_eq!(table.merge_dir(dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_merge_dir_rejects_unknown_language() {
        let dir = overrides_dir(&[
            ("bho.json", r#"{"checkout": "चेकआउट करीं"}"#),
            ("fr.json", r#"{"checkout": "Paiement"}"#),
        ]);

        let mut table = TranslationTable::builtin().unwrap();
        match table.merge_dir(dir.path()) {
            Err(I18nError::UnknownOverrideLanguage { path }) => assert!(path.ends_with("fr.json")),
            other => panic!("Expected UnknownOverrideLanguage, got {:?}", other),
        }
        // bho.json sorts first but is not applied either
        assert_eq!(table.lookup(Language::Bhojpuri, TranslationKey::Checkout), None);
    }

    #[test]
    fn test_merge_dir_bad_key_names_file() {
        let dir = overrides_dir(&[("hi.json", r#"{"notAKey": "x"}"#)]);

        let mut table = TranslationTable::builtin().unwrap();
        let err = table.merge_dir(dir.path()).unwrap_err();

        match &err {
            I18nError::OverrideFile { path, source } => {
                assert!(path.ends_with("hi.json"));
                assert!(matches!(**source, I18nError::Override { .. }));
            }
            other => panic!("Expected OverrideFile, got {:?}", other),
        }
        assert!(err.to_string().contains("hi.json"));
    }

    #[test]
    fn test_merge_dir_missing_directory() {
        let dir = overrides_dir(&[]);
        let mut table = TranslationTable::builtin().unwrap();

        let result = table.merge_dir(&dir.path().join("absent"));
        assert!(matches!(result, Err(I18nError::OverrideIo { .. })));
    }
}
