//! Order summary block on the checkout page.

use leptos::prelude::*;

use crate::state::cart::CartState;

/// Subtotal, shipping, and grand total for the current cart.
#[component]
pub fn CheckoutSummary() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let view_model = Memo::new(move |_| cart.with(CartState::checkout_view));

    view! {
        <dl class="checkout-summary">
            <dt>"Subtotal"</dt>
            <dd id="summary-subtotal">{move || view_model.with(|v| v.subtotal_label.clone())}</dd>
            <dt>"Shipping"</dt>
            <dd id="summary-shipping">{move || view_model.with(|v| v.shipping_label.clone())}</dd>
            <dt class="checkout-summary__grand">"Total"</dt>
            <dd id="summary-grand" class="checkout-summary__grand">
                {move || view_model.with(|v| v.grand_label.clone())}
            </dd>
        </dl>
    }
}
