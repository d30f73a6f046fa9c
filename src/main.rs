mod config;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = config::SiteConfig::from_env().expect("invalid configuration");
    let app = routes::app(&config).expect("router init failed");

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
