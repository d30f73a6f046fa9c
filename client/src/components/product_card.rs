//! Catalog card for a single product.

use cart::view::format_price;
use leptos::prelude::*;

use crate::catalog::Product;
use crate::components::add_to_cart_button::AddToCartButton;

/// Product name, blurb, price, and its add-to-cart button.
#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    view! {
        <article class="product-card">
            <h3 class="product-card__name">{product.name}</h3>
            <p class="product-card__blurb">{product.blurb}</p>
            <p class="product-card__price">{format_price(product.price)}</p>
            <AddToCartButton product=product/>
        </article>
    }
}
