pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::{
    cart::Cart, catalog::Catalog, promo::PromoState, promo::PromotionEvaluator,
    session::OrderSession,
};
pub use domain::model::{
    CheckoutDetails, EntryKey, Item, LineEntry, Locale, PromoSettings, Receipt, ReceiptLine,
};
pub use domain::ports::ConfigProvider;
pub use utils::error::{CartError, Result};
