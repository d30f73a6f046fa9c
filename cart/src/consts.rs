//! Shared constants for the cart crate.

// ── Storage ─────────────────────────────────────────────────────

/// Key holding the JSON array of cart items.
pub const CART_STORAGE_KEY: &str = "cart";

/// Key where an unreadable cart blob is preserved before it is replaced.
pub const CORRUPT_BACKUP_KEY: &str = "cart.corrupt";

// ── Shipping ────────────────────────────────────────────────────

/// `(max_weight, fee)` pairs, checked in ascending weight order.
pub const SHIPPING_TIERS: [(f64, f64); 3] = [(2.0, 40.0), (5.0, 70.0), (10.0, 120.0)];

/// Fee charged above the heaviest tier.
///
/// Zero reproduces the current storefront behavior; a heavier order paying
/// less than a light one is a known defect awaiting a product decision.
pub const OVER_LIMIT_SHIPPING_FEE: f64 = 0.0;

// ── Display ─────────────────────────────────────────────────────

/// Prefix for every rendered money amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Cart page body when there is nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";
