//! Translation service: the current language and everything resolved from it.
//!
//! The service is an explicitly owned value. The host creates one at startup,
//! hands `&TranslationService` to readers and keeps `&mut` access for the
//! language picker. Readers that need to react to changes hold a
//! `watch::Receiver<Language>` from [`TranslationService::subscribe`].

use crate::error::I18nError;
use crate::i18n::metrics::Resolution;
use crate::i18n::{
    Language, LanguageStore, MetricsReport, TranslationKey, TranslationMetrics, TranslationTable,
    TranslationView,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Storage key holding the selected language code.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// What `set_language_code` does with a code outside the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Log and keep the current language.
    #[default]
    Lenient,
    /// Return `I18nError::InvalidLanguage`.
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    pub policy: SelectionPolicy,
}

/// Owns the current language and resolves translation keys for it.
#[derive(Debug)]
pub struct TranslationService<S> {
    table: TranslationTable,
    store: S,
    policy: SelectionPolicy,
    language: Language,
    view: TranslationView,
    notifier: watch::Sender<Language>,
    metrics: TranslationMetrics,
}

impl<S: LanguageStore> TranslationService<S> {
    /// Create a service, restoring the persisted language from `store`.
    ///
    /// A missing, unsupported or unreadable persisted value selects the
    /// initial language. Initialization never fails.
    pub fn new(table: TranslationTable, store: S, options: ServiceOptions) -> Self {
        let language = restore_language(&store);
        let view = build_view(&table, language);
        let (notifier, _) = watch::channel(language);

        Self {
            table,
            store,
            policy: options.policy,
            language,
            view,
            notifier,
            metrics: TranslationMetrics::new(),
        }
    }

    pub fn current_language(&self) -> Language {
        self.language
    }

    /// Native-script name of the current language.
    pub fn current_language_name(&self) -> &'static str {
        self.language.native_name()
    }

    /// Select `language`, persist it and notify subscribers.
    ///
    /// Persisting is best-effort: a storage failure is logged and counted but
    /// the in-memory selection still changes. Selecting the current language
    /// again rewrites storage and does not notify.
    pub fn set_language(&mut self, language: Language) {
        let changed = language != self.language;

        if changed {
            self.language = language;
            self.view = build_view(&self.table, language);
            self.metrics.record_language_change();
            self.notifier.send_if_modified(|current| {
                if *current == language {
                    false
                } else {
                    *current = language;
                    true
                }
            });
            info!("Language changed to {} ({})", language.name(), language.code());
        } else {
            debug!("Language {} already selected", language.code());
        }

        self.persist(language);
    }

    /// Select a language by code.
    ///
    /// Under [`SelectionPolicy::Lenient`] an unsupported code is ignored;
    /// under [`SelectionPolicy::Strict`] it is returned as
    /// `I18nError::InvalidLanguage`. Either way the current language is kept.
    pub fn set_language_code(&mut self, code: &str) -> Result<(), I18nError> {
        match Language::from_code(code) {
            Ok(language) => {
                self.set_language(language);
                Ok(())
            }
            Err(e) => match self.policy {
                SelectionPolicy::Strict => Err(e),
                SelectionPolicy::Lenient => {
                    warn!(
                        "Ignoring unsupported language code '{}', keeping {}",
                        code,
                        self.language.code()
                    );
                    Ok(())
                }
            },
        }
    }

    /// Resolve `key` for the current language.
    ///
    /// Falls back to the fallback language, then to the key's own name.
    /// Never fails and never returns an empty string.
    pub fn translate(&self, key: TranslationKey) -> &str {
        let (text, resolution) = resolve(&self.table, self.language, key);
        self.metrics.record_resolution(resolution);

        if resolution != Resolution::Direct {
            report_missing(key.as_str(), self.language);
        }

        text
    }

    /// Resolve a key given by its camelCase name.
    ///
    /// Names outside the key set are returned unchanged.
    pub fn translate_str<'a>(&'a self, name: &'a str) -> &'a str {
        match TranslationKey::from_name(name) {
            Some(key) => self.translate(key),
            None => {
                self.metrics.record_resolution(Resolution::Identity);
                report_missing(name, self.language);
                name
            }
        }
    }

    /// Resolve `key` and substitute `{placeholder}` tokens from `args`.
    ///
    /// Tokens without a matching argument are left as-is.
    pub fn format(&self, key: TranslationKey, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.translate(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }

    /// Every key resolved for the current language.
    ///
    /// Rebuilt on each language change, so it always matches
    /// [`current_language`](Self::current_language).
    pub fn view(&self) -> &TranslationView {
        &self.view
    }

    /// Supported languages in display order. Independent of the current language.
    pub fn available_languages(&self) -> &'static [Language] {
        Language::ALL
    }

    /// Native-script name of `language`.
    pub fn display_name(&self, language: Language) -> &'static str {
        language.native_name()
    }

    /// Receive every subsequent language change.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.notifier.subscribe()
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }

    fn persist(&self, language: Language) {
        if let Err(e) = self.store.save(LANGUAGE_STORAGE_KEY, language.code()) {
            self.metrics.record_persist_failure();
            warn!("Failed to persist language '{}': {}", language.code(), e);
        }
    }
}

fn restore_language<S: LanguageStore>(store: &S) -> Language {
    let initial = Language::initial();

    match store.load(LANGUAGE_STORAGE_KEY) {
        Ok(Some(code)) => match Language::from_code(&code) {
            Ok(language) => {
                debug!("Restored persisted language {}", language.code());
                language
            }
            Err(_) => {
                warn!(
                    "Ignoring unsupported persisted language '{}', using {}",
                    code,
                    initial.code()
                );
                initial
            }
        },
        Ok(None) => {
            debug!("No persisted language, using {}", initial.code());
            initial
        }
        Err(e) => {
            warn!("Failed to read persisted language, using {}: {}", initial.code(), e);
            initial
        }
    }
}

fn resolve(table: &TranslationTable, language: Language, key: TranslationKey) -> (&str, Resolution) {
    if let Some(text) = table.lookup(language, key) {
        return (text, Resolution::Direct);
    }
    if let Some(text) = table.lookup(table.fallback(), key) {
        return (text, Resolution::Fallback);
    }
    (key.as_str(), Resolution::Identity)
}

fn build_view(table: &TranslationTable, language: Language) -> TranslationView {
    let mut fallbacks = 0usize;
    let view = TranslationView::build(language, |key| {
        let (text, resolution) = resolve(table, language, key);
        if resolution != Resolution::Direct {
            fallbacks += 1;
        }
        text.to_string()
    });

    debug!(
        "Built translation view for {}: {} of {} keys use fallback",
        language.code(),
        fallbacks,
        view.len()
    );
    view
}

/// Development-build diagnostic for a lookup that left the current language.
fn report_missing(key: &str, language: Language) {
    if cfg!(debug_assertions) {
        warn!(
            "[i18n] Missing translation key \"{}\" for language \"{}\"",
            key,
            language.code()
        );
    }
}
