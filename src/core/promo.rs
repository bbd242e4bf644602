use crate::core::{Cart, CartError, Item, PromoSettings, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoState {
    Idle,
    Offered,
}

/// Buy-N-get-one-discounted rule. Counts basic items only; discounted rewards
/// never advance the counter, and removing them never rewinds it.
#[derive(Debug, Clone)]
pub struct PromotionEvaluator {
    settings: PromoSettings,
    counter: u32,
    state: PromoState,
}

impl PromotionEvaluator {
    pub fn new(settings: PromoSettings) -> Self {
        Self {
            settings,
            counter: 0,
            state: PromoState::Idle,
        }
    }

    pub fn state(&self) -> PromoState {
        self.state
    }

    /// The bonus item while an offer is pending.
    pub fn pending_offer(&self) -> Option<&Item> {
        match self.state {
            PromoState::Offered => Some(&self.settings.bonus),
            PromoState::Idle => None,
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Advances the counter by `count` basic items and reports the resulting
    /// state. An unanswered offer is withdrawn by the next addition, so at
    /// most one offer is ever pending.
    pub fn record_basic_add(&mut self, count: u32) -> PromoState {
        if self.state == PromoState::Offered {
            tracing::debug!("Withdrawing unanswered promotion offer");
            self.state = PromoState::Idle;
        }

        self.counter += count;
        if self.counter >= self.settings.threshold {
            self.counter %= self.settings.threshold;
            self.state = PromoState::Offered;
            tracing::info!(
                "Promotion offered: {} for ${}",
                self.settings.bonus.name_en,
                self.settings.bonus.unit_price
            );
        }

        self.state
    }

    /// Accepts the pending offer, adding one discounted bonus item to `cart`.
    pub fn accept(&mut self, cart: &mut Cart) -> Result<()> {
        if self.state != PromoState::Offered {
            return Err(CartError::NoPendingOffer);
        }
        cart.add_discounted(&self.settings.bonus);
        self.state = PromoState::Idle;
        self.counter = 0;
        tracing::info!("Promotion accepted: {}", self.settings.bonus.name_en);
        Ok(())
    }

    /// Discards the pending offer; the cart is untouched.
    pub fn discard(&mut self) -> Result<()> {
        if self.state != PromoState::Offered {
            return Err(CartError::NoPendingOffer);
        }
        self.state = PromoState::Idle;
        self.counter = 0;
        tracing::info!("Promotion discarded");
        Ok(())
    }

    /// Back to a fresh state, used after a completed purchase.
    pub fn reset(&mut self) {
        self.state = PromoState::Idle;
        self.counter = 0;
    }
}

impl Default for PromotionEvaluator {
    fn default() -> Self {
        Self::new(PromoSettings::default())
    }
}
