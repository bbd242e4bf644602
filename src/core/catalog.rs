use crate::core::{CartError, Item, Result};
use crate::utils::validation::{validate_price, validate_unique_ids};

/// Read-only menu. Items keep their menu order; lookup is by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let ids: Vec<String> = items.iter().map(|item| item.id.clone()).collect();
        validate_unique_ids("menu.items", &ids)?;
        for item in &items {
            validate_price(&format!("menu.items.{}.price", item.id), item.unit_price)?;
        }
        Ok(Self { items })
    }

    /// The nine drinks of the storefront, with English and Chinese names.
    pub fn default_menu() -> Self {
        let items = vec![
            menu_item("espresso", "Espresso", "特浓咖啡", 1000),
            menu_item("espresso-macchiato", "Espresso Macchiato", "浓缩玛奇朵", 1200),
            menu_item("cappuccino", "Cappuccino", "卡布奇诺", 1900),
            menu_item("mocha", "Mocha", "摩卡", 800),
            menu_item("flat-white", "Flat White", "平白咖啡", 1800),
            menu_item("americano", "Americano", "美式咖啡", 700),
            menu_item("cafe-latte", "Cafe Latte", "拿铁", 1600),
            menu_item("espresso-con-panna", "Espresso Con Panna", "浓缩康宝蓝", 1400),
            menu_item("cafe-breve", "Cafe Breve", "半拿铁", 1500),
        ];

        Self { items }
    }

    pub fn lookup(&self, id: &str) -> Result<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| CartError::ItemNotFound { id: id.to_string() })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_menu()
    }
}

fn menu_item(id: &str, name_en: &str, name_zh: &str, price_cents: i64) -> Item {
    Item {
        id: id.to_string(),
        name_en: name_en.to_string(),
        name_zh: name_zh.to_string(),
        unit_price: rust_decimal::Decimal::new(price_cents, 2),
    }
}
