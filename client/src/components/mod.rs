//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and cart surfaces while reading shared
//! cart state from Leptos context and writing through `util::cart_store`.

pub mod add_to_cart_button;
pub mod cart_badge;
pub mod cart_line;
pub mod checkout_summary;
pub mod product_card;
pub mod site_header;
