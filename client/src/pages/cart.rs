//! Cart page: editable line items and the running total.

use leptos::prelude::*;

use crate::components::cart_line::CartLineRow;
use crate::state::cart::{CartState, LOADING_MESSAGE};

/// Cart page. Re-renders from the shared cart state on every store write.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let view_model = Memo::new(move |_| cart.with(CartState::cart_view_if_loaded));

    let items = move || {
        let Some(current) = view_model.get() else {
            return view! { <p class="cart-loading">{LOADING_MESSAGE}</p> }.into_any();
        };
        match current.empty_message() {
            Some(message) => view! { <p class="cart-empty">{message}</p> }.into_any(),
            None => current
                .lines
                .into_iter()
                .map(|line| view! { <CartLineRow line=line/> })
                .collect_view()
                .into_any(),
        }
    };
    let total = move || view_model.with(|v| v.as_ref().map(|v| v.total_label.clone()).unwrap_or_default());

    view! {
        <section class="cart-page">
            <h1>"Your Cart"</h1>
            <div id="cart-items" class="cart-items">{items}</div>
            <p class="cart-total">
                "Total: ₹"
                <span id="cart-total">{total}</span>
            </p>
            <a href="/checkout" class="btn-checkout">"Proceed to checkout"</a>
        </section>
    }
}
