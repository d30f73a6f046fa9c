//! One row of the cart page with quantity and remove controls.

use cart::view::CartLine;
use leptos::prelude::*;

use crate::util::cart_store;

/// Cart row: name, unit price, `−` / quantity / `+`, and remove.
#[component]
pub fn CartLineRow(line: CartLine) -> impl IntoView {
    let CartLine { id, name, price_label, qty } = line;
    let dec_id = id.clone();
    let inc_id = id.clone();
    let remove_id = id;

    view! {
        <div class="cart-item">
            <div class="cart-item-info">
                <h4>{name}</h4>
                <p>{price_label}</p>
            </div>
            <div class="cart-item-actions">
                <button class="qty-btn" title="One fewer" on:click=move |_| {
                    cart_store::change_qty(&dec_id, -1);
                }>
                    "−"
                </button>
                <span class="cart-item-qty">{qty}</span>
                <button class="qty-btn" title="One more" on:click=move |_| {
                    cart_store::change_qty(&inc_id, 1);
                }>
                    "+"
                </button>
                <button class="remove-btn" on:click=move |_| {
                    cart_store::remove_item(&remove_id);
                }>
                    "Remove"
                </button>
            </div>
        </div>
    }
}
