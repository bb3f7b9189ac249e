//! Integration tests for the medicine store translation layer
//!
//! These tests exercise the public API the way a host application does:
//! build a table, wire a store, drive the service and read views.

use medicine_store_i18n::i18n::{
    FileStore, Language, LanguageStore, MemoryStore, SelectionPolicy, ServiceOptions,
    TranslationKey, TranslationService, TranslationTable, LANGUAGE_STORAGE_KEY,
};
use medicine_store_i18n::storefront::{
    add_to_cart, AuthState, Cart, CartItem, CatalogFilter, Medicine, Notice, ALL_CATEGORIES,
};
use medicine_store_i18n::I18nError;
use proptest::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

// ==================== Test Helpers ====================

fn builtin_service<S: LanguageStore>(store: S) -> TranslationService<S> {
    TranslationService::new(
        TranslationTable::builtin().expect("Built-in table is complete"),
        store,
        ServiceOptions::default(),
    )
}

fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn key_strategy() -> impl Strategy<Value = TranslationKey> {
    prop::sample::select(TranslationKey::ALL.to_vec())
}

// ==================== Resolution Properties ====================

proptest! {
    #[test]
    fn prop_translate_never_empty(language in language_strategy(), key in key_strategy()) {
        let mut service = builtin_service(MemoryStore::new());
        service.set_language(language);

        prop_assert!(!service.translate(key).is_empty());
    }

    #[test]
    fn prop_missing_key_resolves_to_fallback(language in language_strategy(), key in key_strategy()) {
        let mut service = builtin_service(MemoryStore::new());
        service.set_language(language);

        let table = service.table();
        let expected = table
            .lookup(language, key)
            .or_else(|| table.lookup(Language::English, key))
            .map(str::to_string);

        prop_assert_eq!(Some(service.translate(key).to_string()), expected);
    }

    #[test]
    fn prop_view_agrees_with_translate(language in language_strategy(), key in key_strategy()) {
        let mut service = builtin_service(MemoryStore::new());
        service.set_language(language);

        prop_assert_eq!(service.view().get(key), service.translate(key));
    }

    #[test]
    fn prop_unknown_key_is_identity(name in "[a-z][a-zA-Z]{0,20}") {
        prop_assume!(TranslationKey::from_name(&name).is_none());
        let service = builtin_service(MemoryStore::new());

        prop_assert_eq!(service.translate_str(&name), name.as_str());
    }
}

// ==================== Service Behaviour ====================

#[test]
fn test_bengali_view_uses_bengali_strings() {
    let mut service = builtin_service(MemoryStore::new());
    service.set_language(Language::Bengali);

    assert_eq!(service.current_language(), Language::Bengali);
    let table = service.table();
    for (key, text) in table.entries(Language::Bengali) {
        assert_eq!(service.view().get(key), text, "key {}", key);
    }
    assert_eq!(service.view().home(), "হোম");
}

#[test]
fn test_persistence_roundtrip_with_shared_store() {
    let store = Arc::new(MemoryStore::new());

    let mut first = builtin_service(Arc::clone(&store));
    first.set_language(Language::Marathi);
    drop(first);

    let reloaded = builtin_service(Arc::clone(&store));
    assert_eq!(reloaded.current_language(), Language::Marathi);
}

#[test]
fn test_persistence_roundtrip_with_file_store() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("preferences.json");

    let mut first = builtin_service(FileStore::new(&path));
    first.set_language(Language::Marathi);

    let reloaded = builtin_service(FileStore::new(&path));
    assert_eq!(reloaded.current_language(), Language::Marathi);
    assert_eq!(reloaded.view().home(), "मुख्यपृष्ठ");
}

#[test]
fn test_corrupted_persisted_value_uses_default() {
    let store = MemoryStore::with_value(LANGUAGE_STORAGE_KEY, "xx");
    let service = builtin_service(store);

    assert_eq!(service.current_language(), Language::Hindi);
}

#[test]
fn test_corrupted_preferences_file_uses_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.json");
    std::fs::write(&path, "<<not json>>").unwrap();

    let mut service = builtin_service(FileStore::new(&path));
    assert_eq!(service.current_language(), Language::Hindi);

    // The next selection repairs the file
    service.set_language(Language::English);
    let reloaded = builtin_service(FileStore::new(&path));
    assert_eq!(reloaded.current_language(), Language::English);
}

#[test]
fn test_available_languages_fixed_order() {
    let mut service = builtin_service(MemoryStore::new());
    let expected = vec![
        Language::Hindi,
        Language::English,
        Language::Bengali,
        Language::Marathi,
        Language::Bhojpuri,
        Language::Maithili,
    ];

    for language in Language::ALL {
        service.set_language(*language);
        assert_eq!(service.available_languages(), expected.as_slice());
    }
}

#[test]
fn test_set_language_twice_matches_once() {
    let mut once = builtin_service(MemoryStore::new());
    once.set_language(Language::Bhojpuri);

    let mut twice = builtin_service(MemoryStore::new());
    twice.set_language(Language::Bhojpuri);
    twice.set_language(Language::Bhojpuri);

    assert_eq!(once.current_language(), twice.current_language());
    assert_eq!(once.view(), twice.view());
    assert_eq!(
        once.metrics().language_changes,
        twice.metrics().language_changes
    );
}

#[test]
fn test_display_names_are_total() {
    let service = builtin_service(MemoryStore::new());
    for language in service.available_languages() {
        assert!(!service.display_name(*language).is_empty());
    }
}

#[test]
fn test_strict_policy_surfaces_invalid_language() {
    let mut service = TranslationService::new(
        TranslationTable::builtin().unwrap(),
        MemoryStore::new(),
        ServiceOptions {
            policy: SelectionPolicy::Strict,
        },
    );

    let err = service.set_language_code("xx").unwrap_err();
    assert!(matches!(err, I18nError::InvalidLanguage(_)));
    assert_eq!(service.current_language(), Language::Hindi);
}

#[test]
fn test_overrides_flow_through_service() {
    let mut table = TranslationTable::builtin().unwrap();
    table
        .merge_json(Language::Bhojpuri, r#"{"checkout": "चेकआउट करीं"}"#)
        .unwrap();

    let mut service = builtin_service(MemoryStore::new());
    service.set_language(Language::Bhojpuri);
    assert_eq!(service.translate(TranslationKey::Checkout), "Checkout");

    let mut service = TranslationService::new(table, MemoryStore::new(), ServiceOptions::default());
    service.set_language(Language::Bhojpuri);
    assert_eq!(service.translate(TranslationKey::Checkout), "चेकआउट करीं");
}

#[test]
fn test_override_directory_flows_through_service() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        temp_dir.path().join("mai.json"),
        r#"{"checkout": "चेकआउट करू", "storeTagline": "सस्त आ नीक दवाइ"}"#,
    )
    .unwrap();
    std::fs::write(temp_dir.path().join("notes.md"), "ignored").unwrap();

    let mut table = TranslationTable::builtin().unwrap();
    assert_eq!(table.merge_dir(temp_dir.path()).unwrap(), 2);

    let mut service = TranslationService::new(table, MemoryStore::new(), ServiceOptions::default());
    service.set_language(Language::Maithili);
    assert_eq!(service.view().checkout(), "चेकआउट करू");
    assert_eq!(service.view().store_tagline(), "सस्त आ नीक दवाइ");
}

#[test]
fn test_override_directory_rejects_unsupported_language() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("ta.json"), r#"{"home": "முகப்பு"}"#).unwrap();

    let mut table = TranslationTable::builtin().unwrap();
    let err = table.merge_dir(temp_dir.path()).unwrap_err();

    assert!(matches!(err, I18nError::UnknownOverrideLanguage { .. }));
    assert!(err.to_string().contains("ta.json"));
}

#[test]
fn test_language_selection_keeps_other_preferences() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("preferences.json");
    std::fs::write(&path, r#"{"theme": "dark", "fontSize": 14}"#).unwrap();

    let mut service = builtin_service(FileStore::new(&path));
    service.set_language(Language::English);

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["language"], "en");
    assert_eq!(saved["theme"], "dark");
    assert_eq!(saved["fontSize"], 14);
}

// ==================== Storefront Flow ====================

struct LoggedIn;

impl AuthState for LoggedIn {
    fn is_authenticated(&self) -> bool {
        true
    }
}

#[derive(Default)]
struct RecordingCart {
    items: Vec<CartItem>,
}

impl Cart for RecordingCart {
    fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }
}

#[test]
fn test_storefront_search_and_add_follow_language() {
    let catalog: Vec<Medicine> = serde_json::from_str(
        r#"[
            {"id": "1", "name": "Paracetamol 500mg", "nameHi": "पैरासिटामोल 500mg",
             "description": "Fever relief", "descriptionHi": "बुखार से राहत",
             "category": "fever", "price": 25, "originalPrice": 30,
             "image": "/p.jpg", "rating": 4.6},
            {"id": "2", "name": "ORS Powder", "nameHi": "ओआरएस पाउडर",
             "description": "Rehydration", "descriptionHi": "पानी की कमी",
             "category": "digestive", "price": 20, "originalPrice": 20,
             "image": "/o.jpg", "rating": 4.2}
        ]"#,
    )
    .expect("Catalog JSON should parse");

    let found = CatalogFilter::new("para", ALL_CATEGORIES).apply(&catalog);
    assert_eq!(found.len(), 1);

    let mut service = builtin_service(MemoryStore::new());
    let mut cart = RecordingCart::default();

    let notice = add_to_cart(found[0], &LoggedIn, &mut cart, &service);
    assert_eq!(
        notice,
        Notice::Added("पैरासिटामोल 500mg कार्ट में जोड़ा गया".to_string())
    );

    service.set_language(Language::English);
    let notice = add_to_cart(found[0], &LoggedIn, &mut cart, &service);
    assert_eq!(notice.message(), "Paracetamol 500mg added to cart");
    assert_eq!(cart.items.len(), 2);
}
