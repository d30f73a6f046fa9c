//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Components read state from Leptos context as `RwSignal`s. The cart signal
//! is written only by cart store subscriptions, never by components directly.

pub mod cart;
