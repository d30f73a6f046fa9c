#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use cart::view::{CartView, CheckoutView, badge_count};
use cart::{Cart, CartChange, CartEvent, ShippingRule};

/// Shown when the saved cart could not be read and was reset.
pub const RECOVERED_NOTICE: &str = "We couldn't read your saved cart, so it has been reset.";

/// Placeholder rendered until the browser store has been read.
pub const LOADING_MESSAGE: &str = "Loading your cart…";

/// Shown when the browser refuses access to local storage.
pub const UNAVAILABLE_NOTICE: &str = "Your browser is blocking storage, so the cart can't be saved.";

/// Cart snapshot mirrored from the cart store, provided via context.
///
/// Starts empty on both server and client; the client fills it in once the
/// browser store is connected after hydration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub cart: Cart,
    /// True once the browser store has been read.
    pub loaded: bool,
    /// User-facing warning about the cart's persistence, if any.
    pub notice: Option<String>,
}

impl CartState {
    /// State right after connecting to the store.
    #[must_use]
    pub fn connected(cart: Cart, recovered: bool) -> Self {
        Self { cart, loaded: true, notice: recovered.then(|| RECOVERED_NOTICE.to_owned()) }
    }

    /// State when no store could be opened.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { cart: Cart::new(), loaded: true, notice: Some(UNAVAILABLE_NOTICE.to_owned()) }
    }

    /// Replace the snapshot with the cart carried by a store event.
    pub fn apply(&mut self, event: &CartEvent) {
        self.cart.clone_from(&event.cart);
        if event.change == CartChange::Recovered {
            self.notice = Some(RECOVERED_NOTICE.to_owned());
        }
    }

    #[must_use]
    pub fn badge_count(&self) -> u32 {
        badge_count(&self.cart)
    }

    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from_cart(&self.cart)
    }

    /// Cart view, or `None` while the saved cart has not been read yet, so
    /// the page doesn't flash "empty" before storage answers.
    #[must_use]
    pub fn cart_view_if_loaded(&self) -> Option<CartView> {
        self.loaded.then(|| self.cart_view())
    }

    #[must_use]
    pub fn checkout_view(&self) -> CheckoutView {
        CheckoutView::from_cart(&self.cart, &ShippingRule::default())
    }
}
