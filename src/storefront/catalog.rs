//! Catalog records and search/category filtering.
//!
//! The catalog itself is supplied by the host (usually deserialized from
//! JSON); nothing here owns product data.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category id that matches every medicine.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub name_hi: String,
    pub description: String,
    pub description_hi: String,
    pub category: String,
    /// Selling price in rupees
    pub price: f64,
    /// List price in rupees; a discount is shown when above `price`
    pub original_price: f64,
    pub image: String,
    pub rating: f32,
}

impl Medicine {
    /// Product name for `language`.
    ///
    /// The catalog carries English and Hindi names only, so every language
    /// other than Hindi shows the English name.
    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::Hindi => &self.name_hi,
            _ => &self.name,
        }
    }

    pub fn display_description(&self, language: Language) -> &str {
        match language {
            Language::Hindi => &self.description_hi,
            _ => &self.description,
        }
    }

    /// Discount off the list price, rounded to the nearest whole percent.
    ///
    /// `None` when there is no discount.
    pub fn discount_percent(&self) -> Option<u32> {
        if self.original_price > self.price && self.original_price > 0.0 {
            let percent = (self.original_price - self.price) / self.original_price * 100.0;
            Some(percent.round() as u32)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub name_hi: String,
}

impl Category {
    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::Hindi => &self.name_hi,
            _ => &self.name,
        }
    }
}

/// Search text plus selected category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub query: String,
    pub category: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CatalogFilter {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// English names match case-insensitively; Hindi names match as typed.
    pub fn matches(&self, medicine: &Medicine) -> bool {
        let matches_search = medicine
            .name
            .to_lowercase()
            .contains(&self.query.to_lowercase())
            || medicine.name_hi.contains(&self.query);

        let matches_category =
            self.category == ALL_CATEGORIES || medicine.category == self.category;

        matches_search && matches_category
    }

    /// Medicines passing the filter, in catalog order.
    pub fn apply<'a>(&self, medicines: &'a [Medicine]) -> Vec<&'a Medicine> {
        medicines.iter().filter(|m| self.matches(m)).collect()
    }
}

// ==================== Generic Comparison ====================

/// A cheaper generic equivalent of a branded medicine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericAlternative {
    pub generic_name: String,
    pub brand_price: f64,
    pub generic_price: f64,
}

impl GenericAlternative {
    /// Rupees saved by choosing the generic (never negative).
    pub fn savings(&self) -> f64 {
        (self.brand_price - self.generic_price).max(0.0)
    }
}

/// Generic alternatives keyed by branded medicine name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenericComparison {
    alternatives: HashMap<String, GenericAlternative>,
}

impl GenericComparison {
    pub fn new(alternatives: HashMap<String, GenericAlternative>) -> Self {
        Self { alternatives }
    }

    pub fn lookup(&self, medicine_name: &str) -> Option<&GenericAlternative> {
        self.alternatives.get(medicine_name)
    }

    pub fn has_cheaper_generic(&self, medicine_name: &str) -> bool {
        self.lookup(medicine_name).is_some()
    }
}
