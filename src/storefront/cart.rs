//! Add-to-cart flow and localized product cards.
//!
//! Cart storage and authentication belong to the host application; they are
//! reached through the [`Cart`] and [`AuthState`] traits.

use crate::i18n::{LanguageStore, TranslationKey, TranslationService};
use crate::storefront::catalog::{GenericComparison, Medicine};
use serde::Serialize;
use tracing::debug;

/// Line item handed to the host's cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub name_hi: String,
    pub price: f64,
    pub image: String,
}

impl From<&Medicine> for CartItem {
    fn from(medicine: &Medicine) -> Self {
        Self {
            id: medicine.id.clone(),
            name: medicine.name.clone(),
            name_hi: medicine.name_hi.clone(),
            price: medicine.price,
            image: medicine.image.clone(),
        }
    }
}

pub trait Cart {
    fn add_item(&mut self, item: CartItem);
}

pub trait AuthState {
    fn is_authenticated(&self) -> bool;
}

/// Outcome of an add-to-cart attempt, carrying the localized toast text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The user must log in first; nothing was added.
    LoginRequired(String),
    Added(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::LoginRequired(message) | Notice::Added(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::LoginRequired(_))
    }
}

/// Add `medicine` to `cart` if the user is logged in.
pub fn add_to_cart<S, C, A>(
    medicine: &Medicine,
    auth: &A,
    cart: &mut C,
    service: &TranslationService<S>,
) -> Notice
where
    S: LanguageStore,
    C: Cart + ?Sized,
    A: AuthState + ?Sized,
{
    if !auth.is_authenticated() {
        debug!("Rejected add-to-cart for {}: not logged in", medicine.id);
        return Notice::LoginRequired(service.translate(TranslationKey::LoginToAddToCart).to_string());
    }

    cart.add_item(CartItem::from(medicine));

    let name = medicine.display_name(service.current_language());
    Notice::Added(service.format(TranslationKey::AddedToCart, &[("name", name)]))
}

/// Everything a product tile shows, resolved for the current language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub discount_badge: Option<String>,
    pub generic_badge: Option<String>,
    /// Label of the compare button; `None` when there is nothing to compare.
    pub compare_label: Option<String>,
    pub compare_enabled: bool,
    pub rating: f32,
}

impl ProductCard {
    pub fn build<S: LanguageStore>(
        medicine: &Medicine,
        generics: &GenericComparison,
        service: &TranslationService<S>,
    ) -> Self {
        let language = service.current_language();
        let has_generic = generics.has_cheaper_generic(&medicine.name);

        Self {
            id: medicine.id.clone(),
            title: medicine.display_name(language).to_string(),
            description: medicine.display_description(language).to_string(),
            price_label: format_price(medicine.price),
            discount_badge: medicine.discount_percent().map(|percent| {
                service.format(
                    TranslationKey::PercentOff,
                    &[("percent", percent.to_string().as_str())],
                )
            }),
            generic_badge: has_generic
                .then(|| service.translate(TranslationKey::CheaperGenericAvailable).to_string()),
            compare_label: has_generic
                .then(|| service.translate(TranslationKey::Compare).to_string()),
            compare_enabled: has_generic,
            rating: medicine.rating,
        }
    }
}

/// Rupee label; whole amounts drop the decimals ("₹45", "₹45.50").
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹{}", amount as i64)
    } else {
        format!("₹{:.2}", amount)
    }
}
