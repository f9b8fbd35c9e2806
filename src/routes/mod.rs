//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio is a static site served from `SITE_DIR`. The server adds two
//! dynamic surfaces on top: slider data under `/api/projects/{kind}` and the
//! project detail page, which is rendered from the catalog in place of the
//! static `project-template.html`. Everything else falls through to the
//! static files.

pub mod projects;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Dynamic routes backed by the catalog.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/projects/{kind}", get(projects::list_slides))
        .route("/project-template.html", get(projects::detail_page))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full site: dynamic routes, then static files from `site_dir`.
pub fn app(state: AppState, site_dir: &Path) -> Router {
    let website_service = ServeDir::new(site_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(website_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
