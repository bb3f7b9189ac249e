//! Storefront view-model: catalog filtering, the store header, product cards
//! and the add-to-cart flow, localized through `TranslationService`.

mod cart;
mod catalog;
mod header;

pub use cart::{add_to_cart, format_price, AuthState, Cart, CartItem, Notice, ProductCard};
pub use catalog::{
    CatalogFilter, Category, GenericAlternative, GenericComparison, Medicine, ALL_CATEGORIES,
};
pub use header::{CategoryChip, StoreHeader};
