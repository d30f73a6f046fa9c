//! "Add to cart" button with brief confirmation feedback.

#[cfg(test)]
#[path = "add_to_cart_button_test.rs"]
mod add_to_cart_button_test;

use cart::view::format_amount;
use leptos::prelude::*;

use crate::catalog::Product;
use crate::util::cart_store;

pub const IDLE_LABEL: &str = "ADD TO CART";
pub const ADDED_LABEL: &str = "Added ✓";

/// How long the button stays in the "added" state.
pub const ADDED_FEEDBACK_MS: u32 = 600;

/// Button label for the current feedback state.
#[must_use]
pub fn button_label(added: bool) -> &'static str {
    if added { ADDED_LABEL } else { IDLE_LABEL }
}

/// Adds one unit of `product` to the cart, then shows "Added ✓" and stays
/// disabled for [`ADDED_FEEDBACK_MS`].
///
/// The product fields are also rendered as `data-*` attributes so the markup
/// matches the storefront's static pages.
#[component]
pub fn AddToCartButton(product: &'static Product) -> impl IntoView {
    let added = RwSignal::new(false);

    let on_click = move |_| {
        if added.get_untracked() {
            return;
        }
        if cart_store::add_item(product.to_cart_item()).is_none() {
            return;
        }
        added.set(true);
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(ADDED_FEEDBACK_MS, move || added.set(false)).forget();
    };

    view! {
        <button
            class="btn-cart"
            data-id=product.id
            data-name=product.name
            data-price=format_amount(product.price)
            data-weight=format_amount(product.weight)
            prop:disabled=move || added.get()
            on:click=on_click
        >
            {move || button_label(added.get())}
        </button>
    }
}
