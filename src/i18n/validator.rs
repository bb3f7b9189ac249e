//! Translation quality validation module.
//!
//! Localized strings are filled in at runtime with `{placeholder}` values
//! (product names, percentages). A translation that drops or renames a
//! placeholder would show a raw brace token or lose data, so every localized
//! string must carry the same placeholders as its fallback string.

use crate::i18n::{Language, TranslationKey, TranslationTable};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn extend(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate that a localized string keeps the placeholders of its
    /// fallback string.
    ///
    /// Missing placeholders are errors (the value would be lost); extra
    /// placeholders are warnings (they would render as raw `{name}` text).
    pub fn validate(fallback: &str, localized: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        let expected = Self::extract_placeholders(fallback);
        let actual = Self::extract_placeholders(localized);

        let missing: Vec<_> = expected.difference(&actual).collect();
        if !missing.is_empty() {
            report.errors.push(format!(
                "Missing placeholder(s) {:?} (expected {:?})",
                missing, expected
            ));
        }

        let unexpected: Vec<_> = actual.difference(&expected).collect();
        if !unexpected.is_empty() {
            report.warnings.push(format!(
                "Unexpected placeholder(s) {:?} (expected {:?})",
                unexpected, expected
            ));
        }

        report
    }

    /// Validate every localized entry of a table against the fallback language.
    ///
    /// Messages are prefixed with `"<code>.<key>: "`.
    pub fn validate_table(table: &TranslationTable) -> ValidationReport {
        let fallback = table.fallback();
        let mut report = ValidationReport::new();

        for language in Language::ALL.iter().filter(|l| **l != fallback) {
            for (key, localized) in table.entries(*language) {
                let Some(reference) = table.lookup(fallback, key) else {
                    continue;
                };
                report.extend(Self::prefixed(
                    *language,
                    key,
                    Self::validate(reference, localized),
                ));
            }
        }

        report
    }

    fn prefixed(language: Language, key: TranslationKey, report: ValidationReport) -> ValidationReport {
        let prefix = |message: String| format!("{}.{}: {}", language, key, message);
        ValidationReport {
            errors: report.errors.into_iter().map(prefix).collect(),
            warnings: report.warnings.into_iter().map(prefix).collect(),
        }
    }

    /// Extract the distinct `{placeholder}` names in text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
        });

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
