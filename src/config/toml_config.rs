use crate::core::{ConfigProvider, Item, Locale, PromoSettings};
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{
    validate_locale_name, validate_non_empty_string, validate_positive_number, validate_price,
    validate_unique_ids, Validate,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub shop: Option<ShopConfig>,
    pub display: Option<DisplayConfig>,
    pub promo: Option<PromoTable>,
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoTable {
    pub threshold: Option<u32>,
    pub bonus_id: Option<String>,
    pub bonus_name_en: Option<String>,
    pub bonus_name_zh: Option<String>,
    pub bonus_price: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub items: Vec<MenuItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub id: String,
    pub name_en: String,
    pub name_zh: String,
    pub price: Decimal,
}

impl TomlConfig {
    /// Loads a menu/promo configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CartError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a TOML string, substituting `${VAR}` environment references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CartError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(shop) = &self.shop {
            validate_non_empty_string("shop.name", &shop.name)?;
        }

        if let Some(locale) = self.display.as_ref().and_then(|d| d.locale.as_deref()) {
            validate_locale_name("display.locale", locale)?;
        }

        if let Some(promo) = &self.promo {
            if let Some(threshold) = promo.threshold {
                validate_positive_number("promo.threshold", threshold as usize, 1)?;
            }
            if let Some(bonus_price) = promo.bonus_price {
                validate_price("promo.bonus_price", bonus_price)?;
            }
            if let Some(bonus_id) = &promo.bonus_id {
                validate_non_empty_string("promo.bonus_id", bonus_id)?;
            }
        }

        if self.menu.items.is_empty() {
            return Err(CartError::MissingConfigError {
                field: "menu.items".to_string(),
            });
        }

        let ids: Vec<String> = self.menu.items.iter().map(|item| item.id.clone()).collect();
        validate_unique_ids("menu.items", &ids)?;

        for item in &self.menu.items {
            validate_non_empty_string(&format!("menu.items.{}.name_en", item.id), &item.name_en)?;
            validate_non_empty_string(&format!("menu.items.{}.name_zh", item.id), &item.name_zh)?;
            validate_price(&format!("menu.items.{}.price", item.id), item.price)?;
        }

        Ok(())
    }

    pub fn to_menu_items(&self) -> Vec<Item> {
        self.menu
            .items
            .iter()
            .map(|item| Item {
                id: item.id.clone(),
                name_en: item.name_en.clone(),
                name_zh: item.name_zh.clone(),
                unit_price: item.price,
            })
            .collect()
    }

    /// Promotion settings, with defaults for anything the file leaves out.
    pub fn to_promo_settings(&self) -> PromoSettings {
        let mut settings = PromoSettings::default();
        if let Some(promo) = &self.promo {
            if let Some(threshold) = promo.threshold {
                settings.threshold = threshold;
            }
            if let Some(bonus_id) = &promo.bonus_id {
                settings.bonus.id = bonus_id.clone();
            }
            if let Some(name_en) = &promo.bonus_name_en {
                settings.bonus.name_en = name_en.clone();
            }
            if let Some(name_zh) = &promo.bonus_name_zh {
                settings.bonus.name_zh = name_zh.clone();
            }
            if let Some(bonus_price) = promo.bonus_price {
                settings.bonus.unit_price = bonus_price;
            }
        }
        settings
    }

    pub fn display_locale(&self) -> Locale {
        self.display
            .as_ref()
            .and_then(|d| d.locale.as_deref())
            .and_then(|value| value.parse().ok())
            .unwrap_or(Locale::English)
    }
}

impl ConfigProvider for TomlConfig {
    fn menu_items(&self) -> Result<Vec<Item>> {
        Ok(self.to_menu_items())
    }

    fn promo_settings(&self) -> Result<PromoSettings> {
        Ok(self.to_promo_settings())
    }

    fn locale(&self) -> Locale {
        self.display_locale()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
