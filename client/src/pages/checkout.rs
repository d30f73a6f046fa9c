//! Checkout page: order lines and the shipping-inclusive summary.

use leptos::prelude::*;

use crate::components::checkout_summary::CheckoutSummary;
use crate::state::cart::{CartState, LOADING_MESSAGE};

/// Checkout page. Payment and order submission are handled off-site.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let loaded = move || cart.with(|s| s.loaded);
    let lines = Memo::new(move |_| cart.with(|s| s.checkout_view().lines));

    view! {
        <section class="checkout-page">
            <h1>"Checkout"</h1>
            <Show when=loaded fallback=|| view! { <p class="cart-loading">{LOADING_MESSAGE}</p> }>
                <ul id="checkout-items" class="checkout-items">
                    <For each=move || lines.get() key=|line| (line.id.clone(), line.label.clone()) let:line>
                        <li>{line.label}</li>
                    </For>
                </ul>
                <CheckoutSummary/>
            </Show>
        </section>
    }
}
