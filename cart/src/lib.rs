//! Shopping cart core for the storefront.
//!
//! This crate owns the cart state of the site: the line-item model, the
//! key-value persistence seam, the store that mutates and persists the cart
//! and notifies observers, and the checkout calculator with its tiered
//! shipping rule. It has no UI dependencies; the `client` crate renders the
//! projections from [`view`] and subscribes to [`store::CartStore`] events.
//!
//! The crate compiles to WebAssembly. With the `web` feature enabled,
//! [`storage::BrowserStorage`] binds the store to `window.localStorage`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`item`] | `CartItem`, `Cart`, and the pure in-memory mutations |
//! | [`storage`] | `KeyValueStore` trait, in-memory and browser backends |
//! | [`store`] | `CartStore`: load/save, add/change/remove, subscriptions |
//! | [`checkout`] | Subtotal, weight, and the tiered shipping rule |
//! | [`view`] | Display projections for the badge, cart, and checkout |
//! | [`consts`] | Storage keys, shipping tiers, and display strings |

pub mod checkout;
pub mod consts;
pub mod item;
pub mod storage;
pub mod store;
pub mod view;

pub use checkout::{CheckoutSummary, ShippingRule, ShippingTier};
pub use item::{Cart, CartError, CartItem};
pub use storage::{KeyValueStore, MemoryStorage, StorageError};
pub use store::{CartChange, CartEvent, CartStore, StoreError, SubscriptionId};

#[cfg(feature = "web")]
pub use storage::BrowserStorage;
