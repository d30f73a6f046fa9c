//! Display projections of a cart snapshot.
//!
//! The UI re-renders from these on every [`crate::store::CartEvent`]; there is
//! no incremental update. Amounts are formatted the way the storefront has
//! always shown them: whole numbers without a fractional part, prefixed
//! with the currency symbol on price and summary fields.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::checkout::{CheckoutSummary, ShippingRule, subtotal};
use crate::consts::{CURRENCY_SYMBOL, EMPTY_CART_MESSAGE};
use crate::item::{Cart, CartItem};

/// Render a bare amount: `250`, `59.5`, never `-0`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_owned();
    }
    format!("{amount}")
}

/// Render an amount with the currency symbol: `₹250`.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_amount(amount))
}

/// Number shown on the cart badge: total units in the cart.
#[must_use]
pub fn badge_count(cart: &Cart) -> u32 {
    cart.item_count()
}

/// One row on the cart page.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    /// Unit price, e.g. `₹100`.
    pub price_label: String,
    pub qty: u32,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price_label: format_price(item.price),
            qty: item.qty,
        }
    }
}

/// Cart page contents.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    /// Cart total as a bare amount (no currency symbol).
    pub total_label: String,
}

impl CartView {
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            lines: cart.iter().map(CartLine::from).collect(),
            total_label: format_amount(subtotal(cart)),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Message shown in place of the lines when the cart is empty.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_CART_MESSAGE)
    }
}

/// One row on the checkout page.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLine {
    pub id: String,
    /// `"{name} × {qty} — ₹{line total}"`.
    pub label: String,
}

impl From<&CartItem> for CheckoutLine {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            label: format!("{} × {} — {}", item.name, item.qty, format_price(item.line_total())),
        }
    }
}

/// Checkout page contents.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutView {
    pub lines: Vec<CheckoutLine>,
    pub summary: CheckoutSummary,
    pub subtotal_label: String,
    pub shipping_label: String,
    pub grand_label: String,
}

impl CheckoutView {
    #[must_use]
    pub fn from_cart(cart: &Cart, rule: &ShippingRule) -> Self {
        let summary = CheckoutSummary::compute(cart, rule);
        Self {
            lines: cart.iter().map(CheckoutLine::from).collect(),
            subtotal_label: format_price(summary.subtotal),
            shipping_label: format_price(summary.shipping),
            grand_label: format_price(summary.grand_total),
            summary,
        }
    }
}
