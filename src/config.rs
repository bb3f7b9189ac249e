use crate::i18n::{SelectionPolicy, ServiceOptions};
use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Persistence
    pub storage_path: String,

    // Language selection
    pub strict_language: bool,

    // Translation overrides (directory of <code>.json files)
    pub overrides_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            storage_path: std::env::var("I18N_STORAGE_PATH")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),

            strict_language: match std::env::var("I18N_STRICT_LANGUAGE") {
                Ok(value) => parse_bool("I18N_STRICT_LANGUAGE", &value)?,
                Err(_) => false,
            },

            overrides_dir: std::env::var("I18N_OVERRIDES_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty()),
        })
    }

    /// Service options derived from this configuration.
    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions {
            policy: if self.strict_language {
                SelectionPolicy::Strict
            } else {
                SelectionPolicy::Lenient
            },
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("{} must be a boolean (true/false), got '{}'", name, other),
    }
}
