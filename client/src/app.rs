//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::pages::{cart::CartPage, checkout::CheckoutPage, home::HomePage};
use crate::state::cart::CartState;
use crate::util::cart_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared cart state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = RwSignal::new(CartState::default());
    provide_context(cart);

    // Effects only run in the browser, after hydration, so the server always
    // renders an empty cart and the saved one is filled in here.
    Effect::new(move || cart_store::connect(cart));

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Desi Pantry"/>

        <Router>
            <SiteHeader/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("checkout") view=CheckoutPage/>
                </Routes>
            </main>
        </Router>
    }
}
