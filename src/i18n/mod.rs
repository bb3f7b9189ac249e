//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic, localized strings, and translation
//! infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Display order and fallback/initial roles, derived from `Language`
//! - `language`: Closed `Language` enum with codes and names
//! - `keys`: Closed `TranslationKey` set and the per-key view accessors
//! - `strings`: Built-in localized strings
//! - `table`: Per-language string maps with a complete fallback language and JSON overrides
//! - `view`: Snapshot of every key resolved for one language
//! - `service`: Current language, lookup with fallback, persistence, change notification
//! - `storage`: Persistence backends for the language selection
//! - `validator`: Placeholder preservation checks
//! - `metrics`: Lookup observability
//!
//! # Example
//!
//! ```
//! use medicine_store_i18n::i18n::{
//!     Language, MemoryStore, ServiceOptions, TranslationKey, TranslationService,
//!     TranslationTable,
//! };
//!
//! let table = TranslationTable::builtin().unwrap();
//! let mut service = TranslationService::new(table, MemoryStore::new(), ServiceOptions::default());
//!
//! service.set_language(Language::English);
//! assert_eq!(service.translate(TranslationKey::Checkout), "Checkout");
//! assert_eq!(service.view().checkout(), "Checkout");
//! ```

mod keys;
mod language;
mod metrics;
mod registry;
mod service;
mod storage;
mod strings;
mod table;
mod validator;
mod view;

pub use keys::TranslationKey;
pub use language::Language;
pub use metrics::{MetricsReport, Resolution, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use service::{SelectionPolicy, ServiceOptions, TranslationService, LANGUAGE_STORAGE_KEY};
pub use storage::{FileStore, LanguageStore, MemoryStore};
pub use strings::{builtin_strings, StringTable};
pub use table::TranslationTable;
pub use validator::{TranslationValidator, ValidationReport};
pub use view::TranslationView;
