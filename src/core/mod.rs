pub mod cart;
pub mod catalog;
pub mod promo;
pub mod session;

pub use crate::domain::model::{
    CheckoutDetails, EntryKey, Item, LineEntry, Locale, PromoSettings, Receipt, ReceiptLine,
};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::{CartError, Result};

pub use cart::Cart;
pub use catalog::Catalog;
pub use promo::{PromoState, PromotionEvaluator};
pub use session::OrderSession;
