use crate::core::{
    Cart, Catalog, CartError, CheckoutDetails, ConfigProvider, EntryKey, Item, LineEntry, Locale,
    PromoSettings, PromoState, PromotionEvaluator, Receipt, ReceiptLine, Result,
};
use crate::utils::validation::Validate;
use rust_decimal::Decimal;

/// One ordering session: the catalog, the cart, the promotion rule, and the
/// active display locale, owned together as plain values.
pub struct OrderSession {
    catalog: Catalog,
    cart: Cart,
    promo: PromotionEvaluator,
    locale: Locale,
}

impl OrderSession {
    pub fn new(catalog: Catalog, settings: PromoSettings, locale: Locale) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            promo: PromotionEvaluator::new(settings),
            locale,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let catalog = Catalog::new(config.menu_items()?)?;
        Ok(Self::new(catalog, config.promo_settings()?, config.locale()))
    }

    pub fn with_defaults() -> Self {
        Self::new(
            Catalog::default_menu(),
            PromoSettings::default(),
            Locale::English,
        )
    }

    /// Adds one basic unit of the given menu item and re-checks the promotion
    /// rule. Reports the resulting promotion state.
    pub fn add_item(&mut self, id: &str) -> Result<PromoState> {
        let item = self.catalog.lookup(id)?.clone();
        self.cart.add_item(&item);
        let state = self.promo.record_basic_add(1);
        tracing::debug!(
            "Added {}; cart holds {} items, total {}",
            item.name_en,
            self.cart.item_count(),
            self.cart.total()
        );
        Ok(state)
    }

    /// Incrementing a basic entry counts toward the next promotion; bumping a
    /// discounted reward does not.
    pub fn increment(&mut self, key: &EntryKey) -> Result<PromoState> {
        self.cart.increment(key)?;
        if key.discounted {
            Ok(self.promo.state())
        } else {
            Ok(self.promo.record_basic_add(1))
        }
    }

    pub fn decrement(&mut self, key: &EntryKey) -> Result<()> {
        self.cart.decrement(key)
    }

    pub fn remove(&mut self, key: &EntryKey) -> Result<()> {
        self.cart.remove(key)
    }

    pub fn accept_promo(&mut self) -> Result<()> {
        self.promo.accept(&mut self.cart)
    }

    pub fn discard_promo(&mut self) -> Result<()> {
        self.promo.discard()
    }

    pub fn promo_state(&self) -> PromoState {
        self.promo.state()
    }

    pub fn pending_offer(&self) -> Option<&Item> {
        self.promo.pending_offer()
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        tracing::debug!("Display locale switched to {:?}", self.locale);
        self.locale
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The sorted cart preview in the active locale.
    pub fn preview(&self) -> Vec<&LineEntry> {
        self.cart.sorted_entries(self.locale)
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// The pay-button label, always two decimal places.
    pub fn total_label(&self) -> String {
        format!("Total: ${:.2}", self.cart.total())
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Validates the payment form, issues a receipt, and starts the session
    /// over with an empty cart and a fresh promotion state.
    pub fn pay(&mut self, details: &CheckoutDetails) -> Result<Receipt> {
        details.validate()?;
        if self.cart.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let lines: Vec<ReceiptLine> = self
            .preview()
            .into_iter()
            .map(|entry| ReceiptLine {
                item_id: entry.item.id.clone(),
                name: entry.display_name(self.locale).to_string(),
                quantity: entry.quantity,
                unit_price: entry.item.unit_price,
                line_total: entry.line_total(),
            })
            .collect();

        let receipt = Receipt {
            lines,
            total: self.cart.total(),
            customer_name: details.name.trim().to_string(),
            customer_email: details.email.trim().to_string(),
            promotion_opt_in: details.promotion_opt_in,
            placed_at: chrono::Utc::now(),
        };

        self.cart.clear();
        self.promo.reset();
        tracing::info!(
            "Order placed by {} for {}",
            receipt.customer_name,
            receipt.total
        );

        Ok(receipt)
    }
}
