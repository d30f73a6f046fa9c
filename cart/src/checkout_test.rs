#![allow(clippy::float_cmp)]

use super::*;
use crate::item::CartItem;

fn item(id: &str, price: f64, qty: u32, weight: f64) -> CartItem {
    let mut item = CartItem::new(id, id.to_uppercase(), price).with_weight(weight);
    item.qty = qty;
    item
}

/// A single-line cart whose total weight is exactly `weight`.
fn cart_weighing(weight: f64) -> Cart {
    Cart::from(vec![item("w", 10.0, 1, weight)])
}

// =============================================================
// Subtotal / weight
// =============================================================

#[test]
fn subtotal_sums_price_times_quantity() {
    let cart = Cart::from(vec![item("a", 100.0, 2, 0.0), item("b", 50.0, 1, 0.0)]);
    assert_eq!(subtotal(&cart), 250.0);
    assert_eq!(CheckoutSummary::for_cart(&cart).subtotal, 250.0);
}

#[test]
fn total_weight_sums_weight_times_quantity() {
    let cart = Cart::from(vec![item("a", 1.0, 3, 0.5), item("b", 1.0, 2, 1.25)]);
    assert_eq!(CheckoutSummary::for_cart(&cart).total_weight, 4.0);
}

#[test]
fn items_without_weight_contribute_nothing() {
    let cart = Cart::from(vec![item("a", 1.0, 5, 0.0)]);
    let summary = CheckoutSummary::for_cart(&cart);
    assert_eq!(summary.total_weight, 0.0);
    assert_eq!(summary.shipping, 40.0);
}

#[test]
fn empty_cart_still_pays_lightest_tier() {
    let summary = CheckoutSummary::for_cart(&Cart::new());
    assert_eq!(summary.subtotal, 0.0);
    assert_eq!(summary.shipping, 40.0);
    assert_eq!(summary.grand_total, 40.0);
}

// =============================================================
// Shipping tiers
// =============================================================

#[test]
fn shipping_tier_boundaries() {
    let cases = [(0.0, 40.0), (2.0, 40.0), (2.01, 70.0), (5.0, 70.0), (5.5, 120.0), (10.0, 120.0)];
    for (weight, fee) in cases {
        assert_eq!(CheckoutSummary::for_cart(&cart_weighing(weight)).shipping, fee, "weight {weight}");
    }
}

/// Known defect: orders above the heaviest tier ship free. Kept until the
/// business rule is confirmed; update this test when it is fixed.
#[test]
fn known_defect_over_ten_units_ships_free() {
    assert_eq!(CheckoutSummary::for_cart(&cart_weighing(10.01)).shipping, 0.0);
    assert_eq!(CheckoutSummary::for_cart(&cart_weighing(250.0)).shipping, 0.0);
}

#[test]
fn default_rule_matches_storefront_table() {
    let rule = ShippingRule::default();
    let tiers: Vec<(f64, f64)> = rule.tiers().iter().map(|t| (t.max_weight, t.fee)).collect();
    assert_eq!(tiers, [(2.0, 40.0), (5.0, 70.0), (10.0, 120.0)]);
    assert_eq!(rule.over_limit_fee(), 0.0);
}

#[test]
fn custom_rule_sorts_tiers_and_uses_over_limit_fee() {
    let rule = ShippingRule::new(
        vec![ShippingTier { max_weight: 10.0, fee: 120.0 }, ShippingTier { max_weight: 2.0, fee: 40.0 }],
        200.0,
    );
    assert_eq!(rule.fee_for(1.0), 40.0);
    assert_eq!(rule.fee_for(3.0), 120.0);
    assert_eq!(rule.fee_for(11.0), 200.0);
}

// =============================================================
// Grand total
// =============================================================

#[test]
fn grand_total_is_subtotal_plus_shipping() {
    let carts = [
        Cart::new(),
        Cart::from(vec![item("a", 100.0, 2, 0.5), item("b", 50.0, 1, 0.0)]),
        Cart::from(vec![item("a", 19.99, 3, 1.2)]),
        Cart::from(vec![item("a", 999.0, 4, 3.0)]),
    ];
    for cart in &carts {
        let summary = CheckoutSummary::for_cart(cart);
        assert_eq!(summary.grand_total, summary.subtotal + summary.shipping);
    }
}

#[test]
fn grand_total_for_sample_cart() {
    let cart = Cart::from(vec![item("a", 100.0, 2, 1.0), item("b", 50.0, 1, 1.0)]);
    let summary = CheckoutSummary::for_cart(&cart);
    assert_eq!(summary.total_weight, 3.0);
    assert_eq!(summary.shipping, 70.0);
    assert_eq!(summary.grand_total, 320.0);
}
