//! Store heading, search box and category chips.

use crate::i18n::{LanguageStore, TranslationKey, TranslationService};
use crate::storefront::catalog::{CatalogFilter, Category, ALL_CATEGORIES};
use serde::Serialize;

/// One category button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChip {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

/// Everything above the product grid, resolved for the current language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreHeader {
    pub title: String,
    pub tagline: String,
    pub search_placeholder: String,
    pub categories: Vec<CategoryChip>,
}

impl StoreHeader {
    /// Build the header for `categories`, marking the one `filter` selects.
    ///
    /// The "all" chip always comes first and is labelled from the translation
    /// table; a catalog entry with the same id only fixes its position.
    pub fn build<S: LanguageStore>(
        categories: &[Category],
        filter: &CatalogFilter,
        service: &TranslationService<S>,
    ) -> Self {
        let language = service.current_language();
        let chip = |id: &str, label: String| CategoryChip {
            id: id.to_string(),
            label,
            selected: filter.category == id,
        };

        let mut chips = vec![chip(
            ALL_CATEGORIES,
            service.translate(TranslationKey::AllCategories).to_string(),
        )];
        chips.extend(
            categories
                .iter()
                .filter(|category| category.id != ALL_CATEGORIES)
                .map(|category| chip(&category.id, category.display_name(language).to_string())),
        );

        Self {
            title: service.translate(TranslationKey::MedicineStore).to_string(),
            tagline: service.translate(TranslationKey::StoreTagline).to_string(),
            search_placeholder: service.translate(TranslationKey::Search).to_string(),
            categories: chips,
        }
    }
}
