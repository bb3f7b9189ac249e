//! Command-line front end for the translation service.
//!
//! Usage:
//!   medicine-store-i18n languages     # List supported languages
//!   medicine-store-i18n current       # Show the persisted language
//!   medicine-store-i18n set <code>    # Select and persist a language
//!   medicine-store-i18n t <key>       # Translate one key
//!   medicine-store-i18n view          # Print every key as JSON
//!   medicine-store-i18n validate      # Check translations for placeholder mistakes
//!
//! Optional environment variables:
//! - I18N_STORAGE_PATH (defaults to data/preferences.json)
//! - I18N_STRICT_LANGUAGE (defaults to false)
//! - I18N_OVERRIDES_DIR (directory of <code>.json override files)

use anyhow::{bail, Context, Result};
use medicine_store_i18n::config::Config;
use medicine_store_i18n::i18n::{FileStore, TranslationService, TranslationTable, TranslationValidator};
use std::path::Path;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medicine_store_i18n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let mut table = TranslationTable::builtin().context("Built-in translations are invalid")?;
    if let Some(dir) = &config.overrides_dir {
        table
            .merge_dir(Path::new(dir))
            .with_context(|| format!("Failed to load translation overrides from {}", dir))?;
    }

    // Placeholder mistakes are reported on every run; `validate` makes them fatal
    let report = TranslationValidator::validate_table(&table);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for error in &report.errors {
        warn!("{}", error);
    }

    let store = FileStore::new(&config.storage_path);
    let mut service = TranslationService::new(table, store, config.service_options());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("current");

    match command {
        "languages" => {
            for language in service.available_languages() {
                let marker = if *language == service.current_language() { "*" } else { " " };
                println!("{} {:<4} {}", marker, language.code(), service.display_name(*language));
            }
        }
        "current" => {
            let language = service.current_language();
            println!("{} ({})", language.code(), service.current_language_name());
        }
        "set" => {
            let code = args.get(1).context("Usage: set <language code>")?;
            service.set_language_code(code)?;
            let language = service.current_language();
            println!("{} ({})", language.code(), service.current_language_name());
        }
        "t" => {
            let key = args.get(1).context("Usage: t <translation key>")?;
            println!("{}", service.translate_str(key));
        }
        "view" => {
            let json = serde_json::to_string_pretty(service.view())
                .context("Failed to serialize translation view")?;
            println!("{}", json);
        }
        "validate" => {
            for error in &report.errors {
                println!("error: {}", error);
            }
            for language in service.available_languages() {
                info!(
                    "{}: {} of {} keys translated",
                    language.code(),
                    service.table().defined_count(*language),
                    service.view().len()
                );
            }
            if report.has_errors() {
                bail!("{} translation error(s) found", report.errors.len());
            }
            println!("Translations OK");
        }
        other => bail!("Unknown command '{}'", other),
    }

    Ok(())
}
