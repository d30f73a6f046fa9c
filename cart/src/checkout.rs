//! Checkout totals and the weight-tiered shipping rule.
//!
//! Everything here is a pure function of a cart snapshot.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::consts::{OVER_LIMIT_SHIPPING_FEE, SHIPPING_TIERS};
use crate::item::Cart;

/// Orders weighing at most `max_weight` pay `fee`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShippingTier {
    pub max_weight: f64,
    pub fee: f64,
}

/// Step function from total order weight to shipping fee.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingRule {
    tiers: Vec<ShippingTier>,
    over_limit_fee: f64,
}

impl ShippingRule {
    /// Build a rule from tiers in any order and the fee charged above the
    /// heaviest tier.
    #[must_use]
    pub fn new(mut tiers: Vec<ShippingTier>, over_limit_fee: f64) -> Self {
        tiers.sort_by(|a, b| a.max_weight.total_cmp(&b.max_weight));
        Self { tiers, over_limit_fee }
    }

    /// Tiers in ascending weight order.
    #[must_use]
    pub fn tiers(&self) -> &[ShippingTier] {
        &self.tiers
    }

    #[must_use]
    pub fn over_limit_fee(&self) -> f64 {
        self.over_limit_fee
    }

    /// Fee of the lightest tier that holds `weight`, or the over-limit fee.
    #[must_use]
    pub fn fee_for(&self, weight: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| weight <= tier.max_weight)
            .map_or(self.over_limit_fee, |tier| tier.fee)
    }
}

impl Default for ShippingRule {
    fn default() -> Self {
        let tiers = SHIPPING_TIERS
            .iter()
            .map(|&(max_weight, fee)| ShippingTier { max_weight, fee })
            .collect();
        Self::new(tiers, OVER_LIMIT_SHIPPING_FEE)
    }
}

/// Totals shown on the checkout page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutSummary {
    /// Σ price × qty.
    pub subtotal: f64,
    /// Σ weight × qty.
    pub total_weight: f64,
    pub shipping: f64,
    /// `subtotal + shipping`.
    pub grand_total: f64,
}

impl CheckoutSummary {
    /// Compute totals for `cart` under `rule`.
    #[must_use]
    pub fn compute(cart: &Cart, rule: &ShippingRule) -> Self {
        let subtotal = subtotal(cart);
        let total_weight = cart.iter().fold(0.0, |sum, item| sum + item.line_weight());
        let shipping = rule.fee_for(total_weight);
        Self { subtotal, total_weight, shipping, grand_total: subtotal + shipping }
    }

    /// Compute totals for `cart` under the storefront's shipping table.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        Self::compute(cart, &ShippingRule::default())
    }
}

/// Σ price × qty. Also the cart page total.
#[must_use]
pub fn subtotal(cart: &Cart) -> f64 {
    cart.iter().fold(0.0, |sum, item| sum + item.line_total())
}
