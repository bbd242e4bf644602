use crate::core::{CartError, EntryKey, Item, LineEntry, Locale, Result};
use rust_decimal::Decimal;

/// Mutable cart state. Entries are stored in insertion order; every external
/// read goes through `sorted_entries`.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<LineEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one basic (full-price) unit of `item`, creating the entry at
    /// quantity 1 if absent.
    pub fn add_item(&mut self, item: &Item) {
        self.add(item, false);
    }

    /// Adds one unit of `item` as a promotion reward at its reduced price.
    pub fn add_discounted(&mut self, item: &Item) {
        self.add(item, true);
    }

    fn add(&mut self, item: &Item, discounted: bool) {
        let key = EntryKey {
            item_id: item.id.clone(),
            discounted,
        };
        match self.position(&key) {
            Some(index) => self.entries[index].quantity += 1,
            None => self.entries.push(LineEntry {
                item: item.clone(),
                quantity: 1,
                discounted,
            }),
        }
        tracing::debug!("Cart now holds {} items", self.item_count());
    }

    pub fn increment(&mut self, key: &EntryKey) -> Result<()> {
        let index = self.require(key)?;
        self.entries[index].quantity += 1;
        Ok(())
    }

    /// Decrements by one; a quantity-1 entry is deleted entirely so that a
    /// zero-quantity entry is never visible.
    pub fn decrement(&mut self, key: &EntryKey) -> Result<()> {
        let index = self.require(key)?;
        if self.entries[index].quantity <= 1 {
            self.entries.remove(index);
        } else {
            self.entries[index].quantity -= 1;
        }
        Ok(())
    }

    /// Deletes the entry regardless of its quantity.
    pub fn remove(&mut self, key: &EntryKey) -> Result<()> {
        let index = self.require(key)?;
        self.entries.remove(index);
        Ok(())
    }

    /// Negative quantities are rejected; zero removes the entry.
    pub fn set_quantity(&mut self, key: &EntryKey, quantity: i64) -> Result<()> {
        if quantity < 0 {
            return Err(CartError::InvalidQuantity {
                key: key.to_string(),
                value: quantity,
            });
        }
        if quantity == 0 {
            return self.remove(key);
        }
        let index = self.require(key)?;
        self.entries[index].quantity = quantity as u32;
        Ok(())
    }

    pub fn get(&self, key: &EntryKey) -> Option<&LineEntry> {
        self.position(key).map(|index| &self.entries[index])
    }

    /// Sum of unit price times quantity over all entries. Discounted entries
    /// carry their own reduced unit price.
    pub fn total(&self) -> Decimal {
        self.entries
            .iter()
            .map(LineEntry::line_total)
            .sum::<Decimal>()
    }

    /// The cart preview: discounted rewards lead, the rest is sorted by
    /// display name in the active locale.
    pub fn sorted_entries(&self, locale: Locale) -> Vec<&LineEntry> {
        let mut entries: Vec<&LineEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| {
            b.discounted
                .cmp(&a.discounted)
                .then_with(|| a.display_name(locale).cmp(b.display_name(locale)))
        });
        entries
    }

    /// Total quantity across entries, the `cart (N)` badge value.
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    pub fn basic_item_count(&self) -> u32 {
        self.entries
            .iter()
            .filter(|entry| !entry.discounted)
            .map(|entry| entry.quantity)
            .sum()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, key: &EntryKey) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.item.id == key.item_id && entry.discounted == key.discounted)
    }

    fn require(&self, key: &EntryKey) -> Result<usize> {
        self.position(key).ok_or_else(|| CartError::EntryNotFound {
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;

    fn cart_with(ids: &[&str]) -> Cart {
        let catalog = Catalog::default_menu();
        let mut cart = Cart::new();
        for id in ids {
            cart.add_item(catalog.lookup(id).unwrap());
        }
        cart
    }

    #[test]
    fn test_add_creates_entry_at_quantity_one() {
        let cart = cart_with(&["espresso"]);

        let entry = cart.get(&EntryKey::basic("espresso")).unwrap();
        assert_eq!(entry.quantity, 1);
        assert!(!entry.discounted);
    }

    #[test]
    fn test_repeated_add_increments_quantity() {
        let cart = cart_with(&["espresso", "espresso", "espresso"]);

        let entry = cart.get(&EntryKey::basic("espresso")).unwrap();
        assert_eq!(entry.quantity, 3);
        assert_eq!(cart.entry_count(), 1);
    }

    #[test]
    fn test_total_is_price_times_quantity() {
        let cart = cart_with(&["espresso", "espresso", "mocha"]);

        // 2 x $10.00 + 1 x $8.00
        assert_eq!(cart.total(), Decimal::new(2800, 2));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = cart_with(&["espresso"]);
        let key = EntryKey::basic("espresso");

        cart.increment(&key).unwrap();
        assert_eq!(cart.get(&key).unwrap().quantity, 2);

        cart.decrement(&key).unwrap();
        assert_eq!(cart.get(&key).unwrap().quantity, 1);
    }

    #[test]
    fn test_decrement_at_quantity_one_removes_entry() {
        let mut cart = cart_with(&["espresso"]);
        let key = EntryKey::basic("espresso");

        cart.decrement(&key).unwrap();

        assert!(cart.get(&key).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_deletes_entry_regardless_of_quantity() {
        let mut cart = cart_with(&["espresso", "espresso", "espresso"]);
        let key = EntryKey::basic("espresso");

        cart.remove(&key).unwrap();

        assert!(cart.get(&key).is_none());
    }

    #[test]
    fn test_operations_on_missing_key_fail() {
        let mut cart = Cart::new();
        let key = EntryKey::basic("espresso");

        assert!(matches!(
            cart.increment(&key),
            Err(CartError::EntryNotFound { .. })
        ));
        assert!(matches!(
            cart.decrement(&key),
            Err(CartError::EntryNotFound { .. })
        ));
        assert!(matches!(
            cart.remove(&key),
            Err(CartError::EntryNotFound { .. })
        ));
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = cart_with(&["espresso"]);
        let key = EntryKey::basic("espresso");

        cart.set_quantity(&key, 5).unwrap();
        assert_eq!(cart.get(&key).unwrap().quantity, 5);

        cart.set_quantity(&key, 0).unwrap();
        assert!(cart.get(&key).is_none());
    }

    #[test]
    fn test_set_negative_quantity_fails() {
        let mut cart = cart_with(&["espresso"]);
        let key = EntryKey::basic("espresso");

        let err = cart.set_quantity(&key, -1).unwrap_err();
        assert!(matches!(err, CartError::InvalidQuantity { value: -1, .. }));

        // Entry is untouched after the rejected update
        assert_eq!(cart.get(&key).unwrap().quantity, 1);
    }

    #[test]
    fn test_sorted_entries_ascending_by_english_name() {
        let cart = cart_with(&["espresso", "mocha", "americano", "cafe-latte"]);

        let names: Vec<&str> = cart
            .sorted_entries(Locale::English)
            .iter()
            .map(|entry| entry.display_name(Locale::English))
            .collect();

        assert_eq!(names, vec!["Americano", "Cafe Latte", "Espresso", "Mocha"]);
    }

    #[test]
    fn test_sorted_entries_follow_active_locale() {
        let cart = cart_with(&["espresso", "mocha"]);

        let names: Vec<&str> = cart
            .sorted_entries(Locale::Chinese)
            .iter()
            .map(|entry| entry.display_name(Locale::Chinese))
            .collect();

        // "摩卡" sorts before "特浓咖啡" by code point
        assert_eq!(names, vec!["摩卡", "特浓咖啡"]);
    }

    #[test]
    fn test_discounted_entries_lead_the_preview() {
        let mut cart = cart_with(&["americano", "espresso"]);

        let bonus = crate::core::PromoSettings::default().bonus;
        cart.add_discounted(&bonus);

        let names: Vec<&str> = cart
            .sorted_entries(Locale::English)
            .iter()
            .map(|entry| entry.display_name(Locale::English))
            .collect();

        assert_eq!(
            names,
            vec!["(Discounted) Mocha", "Americano", "Espresso"]
        );
    }

    #[test]
    fn test_discounted_total_uses_reduced_price() {
        let mut cart = cart_with(&["mocha"]);
        let bonus = crate::core::PromoSettings::default().bonus;

        cart.add_discounted(&bonus);

        // $8.00 basic Mocha + $4.00 reward, not 2 x $8.00
        assert_eq!(cart.total(), Decimal::new(1200, 2));
        assert_eq!(cart.entry_count(), 2);
    }

    #[test]
    fn test_item_counts() {
        let mut cart = cart_with(&["espresso", "espresso", "mocha"]);
        let bonus = crate::core::PromoSettings::default().bonus;
        cart.add_discounted(&bonus);

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.basic_item_count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut cart = cart_with(&["espresso", "mocha"]);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
