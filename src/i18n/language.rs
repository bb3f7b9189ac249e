//! Language type: the closed set of storefront locales.
//!
//! `Language` is a plain enum so that an unsupported language can never be
//! constructed in typed code. Per-language facts (code, names) live here;
//! the registry only adds ordering and the fallback/initial roles. Untyped
//! input (persisted values, CLI arguments) goes through
//! [`Language::from_code`], which validates against the registry.

use crate::error::I18nError;
use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported storefront language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "mr")]
    Marathi,
    #[serde(rename = "bho")]
    Bhojpuri,
    #[serde(rename = "mai")]
    Maithili,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: &'static [Language] = &[
        Language::Hindi,
        Language::English,
        Language::Bengali,
        Language::Marathi,
        Language::Bhojpuri,
        Language::Maithili,
    ];

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err(I18nError::InvalidLanguage)` otherwise
    ///
    /// # Example
    /// ```
    /// use medicine_store_i18n::i18n::Language;
    ///
    /// let bengali = Language::from_code("bn").unwrap();
    /// assert_eq!(bengali, Language::Bengali);
    /// assert!(Language::from_code("xx").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.language)
            .ok_or_else(|| I18nError::InvalidLanguage(code.to_string()))
    }

    /// The language backing every missing translation.
    pub fn fallback() -> Language {
        LanguageRegistry::get().fallback().language
    }

    /// The language selected when nothing valid has been persisted.
    pub fn initial() -> Language {
        LanguageRegistry::get().initial().language
    }

    /// Short language code used for persistence (e.g., "hi", "bho").
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
            Language::Bengali => "bn",
            Language::Marathi => "mr",
            Language::Bhojpuri => "bho",
            Language::Maithili => "mai",
        }
    }

    /// Language name in its own script, as shown in the language picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Hindi => "हिंदी",
            Language::English => "English",
            Language::Bengali => "বাংলা",
            Language::Marathi => "मराठी",
            Language::Bhojpuri => "भोजपुरी",
            Language::Maithili => "मैथिली",
        }
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::English => "English",
            Language::Bengali => "Bengali",
            Language::Marathi => "Marathi",
            Language::Bhojpuri => "Bhojpuri",
            Language::Maithili => "Maithili",
        }
    }

    /// Registry entry for this language.
    pub fn config(&self) -> Option<&'static LanguageConfig> {
        LanguageRegistry::get().get_by_language(*self)
    }

    /// Check if this is the fallback language.
    pub fn is_fallback(&self) -> bool {
        *self == Language::fallback()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
