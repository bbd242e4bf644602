use crate::domain::model::{Item, Locale, PromoSettings};
use crate::utils::error::Result;

pub trait ConfigProvider: Send + Sync {
    fn menu_items(&self) -> Result<Vec<Item>>;
    fn promo_settings(&self) -> Result<PromoSettings>;
    fn locale(&self) -> Locale;
}
