use crate::config::TomlConfig;
use crate::core::{Catalog, ConfigProvider, Item, Locale, PromoSettings};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_locale_name, validate_non_empty_string, validate_positive_number, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "coffee-cart")]
#[command(about = "An interactive coffee cart with a buy-3-get-1-discounted promotion")]
pub struct CliConfig {
    #[arg(
        long,
        help = "TOML menu file; the built-in menu (and its promo) is used when omitted"
    )]
    pub menu: Option<String>,

    #[arg(long, default_value = "english", help = "Display locale: english or chinese")]
    pub locale: String,

    #[arg(
        long,
        default_value = "3",
        help = "Basic items per promotion offer (built-in menu only; a menu file carries its own)"
    )]
    pub promo_threshold: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    fn menu_file(&self) -> Result<Option<TomlConfig>> {
        match &self.menu {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(Some(config))
            }
            None => Ok(None),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_locale_name("locale", &self.locale)?;
        validate_positive_number("promo-threshold", self.promo_threshold as usize, 1)?;
        if let Some(menu) = &self.menu {
            validate_non_empty_string("menu", menu)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn menu_items(&self) -> Result<Vec<Item>> {
        match self.menu_file()? {
            Some(config) => Ok(config.to_menu_items()),
            None => Ok(Catalog::default_menu().items().to_vec()),
        }
    }

    fn promo_settings(&self) -> Result<PromoSettings> {
        match self.menu_file()? {
            Some(config) => Ok(config.to_promo_settings()),
            None => Ok(PromoSettings {
                threshold: self.promo_threshold,
                ..PromoSettings::default()
            }),
        }
    }

    // The locale flag always wins; it is a display preference, not menu data.
    fn locale(&self) -> Locale {
        self.locale.parse().unwrap_or(Locale::English)
    }
}
