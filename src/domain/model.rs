use crate::utils::error::{CartError, Result};
use crate::utils::validation::{is_valid_email, Validate};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    English,
    Chinese,
}

impl Locale {
    pub fn toggled(self) -> Locale {
        match self {
            Locale::English => Locale::Chinese,
            Locale::Chinese => Locale::English,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Locale::English),
            "chinese" | "zh" => Ok(Locale::Chinese),
            _ => Err(CartError::InvalidConfigValueError {
                field: "locale".to_string(),
                value: s.to_string(),
                reason: "Supported locales: english, chinese".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name_en: String,
    pub name_zh: String,
    pub unit_price: Decimal,
}

impl Item {
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.name_en,
            Locale::Chinese => &self.name_zh,
        }
    }
}

/// One cart entry per distinct (item, discounted) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryKey {
    pub item_id: String,
    pub discounted: bool,
}

impl EntryKey {
    pub fn basic(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            discounted: false,
        }
    }

    pub fn discounted(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            discounted: true,
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.discounted {
            write!(f, "{} (discounted)", self.item_id)
        } else {
            write!(f, "{}", self.item_id)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineEntry {
    pub item: Item,
    pub quantity: u32,
    pub discounted: bool,
}

impl LineEntry {
    pub fn key(&self) -> EntryKey {
        EntryKey {
            item_id: self.item.id.clone(),
            discounted: self.discounted,
        }
    }

    pub fn display_name(&self, locale: Locale) -> &str {
        self.item.display_name(locale)
    }

    pub fn line_total(&self) -> Decimal {
        self.item.unit_price * Decimal::from(self.quantity)
    }
}

/// Promotion tuning: every `threshold` basic items, offer `bonus` once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoSettings {
    pub threshold: u32,
    pub bonus: Item,
}

impl Default for PromoSettings {
    fn default() -> Self {
        Self {
            threshold: 3,
            bonus: Item {
                id: "discounted-mocha".to_string(),
                name_en: "(Discounted) Mocha".to_string(),
                name_zh: "(Discounted) 摩卡".to_string(),
                unit_price: Decimal::new(400, 2),
            },
        }
    }
}

/// The payment form: name and email are required, the rest is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutDetails {
    pub name: String,
    pub email: String,
    pub promotion_opt_in: bool,
}

impl Validate for CheckoutDetails {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CartError::CheckoutError {
                field: "name".to_string(),
                reason: "Name cannot be empty".to_string(),
            });
        }
        if self.email.trim().is_empty() {
            return Err(CartError::CheckoutError {
                field: "email".to_string(),
                reason: "Email cannot be empty".to_string(),
            });
        }
        if !is_valid_email(&self.email) {
            return Err(CartError::CheckoutError {
                field: "email".to_string(),
                reason: format!("'{}' is not a valid email address", self.email.trim()),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total: Decimal,
    pub customer_name: String,
    pub customer_email: String,
    pub promotion_opt_in: bool,
    pub placed_at: DateTime<Utc>,
}
