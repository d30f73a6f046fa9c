//! Home page: hero banner and the product catalog.

use leptos::prelude::*;

use crate::catalog::PRODUCTS;
use crate::components::product_card::ProductCard;

/// Landing page listing every product with an add-to-cart button.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero" id="benefits">
            <h1>"Honest staples, straight from the farm"</h1>
            <p>"Cold-pressed oils, unrefined sweeteners, and stone-ground flours."</p>
        </section>
        <section class="products" id="products">
            <h2>"Products"</h2>
            <div class="product-grid">
                {PRODUCTS.iter().map(|product| view! { <ProductCard product=product/> }).collect_view()}
            </div>
        </section>
    }
}
