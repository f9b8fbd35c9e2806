mod catalog;
mod config;
mod detail;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::SiteConfig::from_env().expect("invalid site configuration");

    let catalog = catalog::Catalog::load(&config.catalog_path).expect("catalog load failed");
    tracing::info!(
        path = %config.catalog_path.display(),
        total = catalog.len(),
        coding = catalog.coding.len(),
        "catalog loaded"
    );
    if catalog.is_empty() {
        tracing::warn!("catalog has no projects; sliders will show their fallback message");
    }

    let state = state::AppState::new(catalog, &config);
    let app = routes::app(state, &config.site_dir);

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, site_dir = %config.site_dir.display(), "folio listening");
    axum::serve(listener, app).await.expect("server failed");
}
