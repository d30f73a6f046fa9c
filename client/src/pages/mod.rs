//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the shared cart state and delegates rendering details
//! to `components`.

pub mod cart;
pub mod checkout;
pub mod home;
