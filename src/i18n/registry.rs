//! Language registry: which languages are offered, in what order, and which
//! play the fallback and initial roles.
//!
//! Entries are derived from [`Language`], which owns each language's code and
//! names. The registry is a `OnceLock` singleton and immutable; the *current*
//! language lives in the `TranslationService`, never here.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// Short language code (e.g., "hi", "en", "bho")
    pub code: &'static str,

    /// English name of the language (e.g., "Hindi", "Bengali")
    pub name: &'static str,

    /// Native name of the language (e.g., "हिंदी", "বাংলা")
    pub native_name: &'static str,

    /// Whether this is the fallback language (only one should be true).
    /// Its table must define every translation key.
    pub is_fallback: bool,

    /// Whether this is the language selected when nothing valid is persisted
    /// (only one should be true)
    pub is_initial: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Codes are matched exactly; "HI" is not "hi".
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration for a language.
    ///
    /// Entries are built from `Language::ALL`, so every variant has one.
    pub fn get_by_language(&self, language: Language) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.language == language)
    }

    /// All languages in display order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the fallback language configuration.
    ///
    /// # Panics
    /// Panics if no fallback language is found or if multiple fallback
    /// languages are defined (this indicates a configuration error).
    pub fn fallback(&self) -> &LanguageConfig {
        let fallback_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_fallback)
            .collect();

        match fallback_langs.len() {
            0 => panic!("No fallback language found in registry"),
            1 => fallback_langs[0],
            _ => panic!("Multiple fallback languages found in registry"),
        }
    }

    /// Get the initial language configuration.
    ///
    /// # Panics
    /// Panics if zero or several languages are marked initial.
    pub fn initial(&self) -> &LanguageConfig {
        let initial_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_initial)
            .collect();

        match initial_langs.len() {
            0 => panic!("No initial language found in registry"),
            1 => initial_langs[0],
            _ => panic!("Multiple initial languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default language configurations, in display order.
///
/// Hindi is selected on first launch; English backs every missing string.
fn default_languages() -> Vec<LanguageConfig> {
    Language::ALL
        .iter()
        .map(|&language| LanguageConfig {
            language,
            code: language.code(),
            name: language.name(),
            native_name: language.native_name(),
            is_fallback: language == Language::English,
            is_initial: language == Language::Hindi,
        })
        .collect()
}
