use crate::utils::error::{CartError, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_price(field_name: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Price cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_locale_name(field_name: &str, value: &str) -> Result<()> {
    match value.to_ascii_lowercase().as_str() {
        "english" | "en" | "chinese" | "zh" => Ok(()),
        _ => Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Supported locales: english, chinese".to_string(),
        }),
    }
}

pub fn validate_unique_ids(field_name: &str, ids: &[String]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(CartError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.clone(),
                reason: "Duplicate item id".to_string(),
            });
        }
    }
    Ok(())
}

/// Same shape the storefront accepts: local part, '@', domain with a dot.
pub fn is_valid_email(value: &str) -> bool {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    re.is_match(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("shop.name", "Coffee cart").is_ok());
        assert!(validate_non_empty_string("shop.name", "").is_err());
        assert!(validate_non_empty_string("shop.name", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("promo.threshold", 3, 1).is_ok());
        assert!(validate_positive_number("promo.threshold", 0, 1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("menu.items.price", Decimal::new(1000, 2)).is_ok());
        assert!(validate_price("menu.items.price", Decimal::ZERO).is_ok());
        assert!(validate_price("menu.items.price", Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_validate_locale_name() {
        assert!(validate_locale_name("display.locale", "english").is_ok());
        assert!(validate_locale_name("display.locale", "ZH").is_ok());
        assert!(validate_locale_name("display.locale", "klingon").is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        let ids = vec!["espresso".to_string(), "mocha".to_string()];
        assert!(validate_unique_ids("menu.items", &ids).is_ok());

        let dupes = vec!["espresso".to_string(), "espresso".to_string()];
        assert!(validate_unique_ids("menu.items", &dupes).is_err());
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("test@test.com"));
        assert!(is_valid_email("  padded@example.org  "));
        assert!(!is_valid_email("test"));
        assert!(!is_valid_email("test@test"));
        assert!(!is_valid_email("te st@test.com"));
        assert!(!is_valid_email(""));
    }
}
