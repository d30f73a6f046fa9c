//! Header cart link with the live unit count.

use leptos::prelude::*;

use crate::state::cart::CartState;

/// Cart link showing the total number of units in the cart.
#[component]
pub fn CartBadge() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let count = move || cart.with(CartState::badge_count);

    view! {
        <a href="/cart" class="cart-link" title="View cart">
            "Cart"
            <span id="cart-count" class="cart-count">{count}</span>
        </a>
    }
}
