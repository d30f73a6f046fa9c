//! Site header: brand, primary navigation, cart badge, and cart notices.

use leptos::prelude::*;

use crate::components::cart_badge::CartBadge;
use crate::state::cart::CartState;

/// Header shown on every page.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let notice = move || cart.with(|s| s.notice.clone());

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"Desi Pantry"</a>
            <nav class="nav-center" id="nav-center">
                <a href="/" data-nav="products">"Products"</a>
                <a href="/checkout" data-nav="checkout">"Checkout"</a>
            </nav>
            <CartBadge/>
        </header>
        <Show when=move || notice().is_some()>
            <p class="cart-notice" role="status">{move || notice().unwrap_or_default()}</p>
        </Show>
    }
}
