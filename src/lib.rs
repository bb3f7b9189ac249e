//! Translation service and storefront view-model for a multi-language
//! medicine store.

pub mod config;
pub mod error;
pub mod i18n;
pub mod storefront;

pub use error::{I18nError, StoreError};
