//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server-renders the Leptos storefront (`/`, `/cart`, `/checkout`),
//! serves the hydration bundle under `/pkg`, and falls back to the static
//! marketing pages. There are no API routes: the cart lives entirely in the
//! browser and never reaches this process.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

/// Routes that do not depend on the Leptos build: health check and the
/// static site fallback.
fn site_routes(static_dir: &Path) -> Router {
    let website_service = ServeDir::new(static_dir).append_index_html_on_directories(true);
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(website_service)
}

/// Full host router: Leptos SSR routes, the `/pkg` bundle, and the static site.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &SiteConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Hydration bundle (WASM, JS, CSS) from the Leptos site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(site_routes(&config.static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
