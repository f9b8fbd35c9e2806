//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is immutable after startup, so it is shared by `Arc` with no lock.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::SiteConfig;

/// Clone is required by Axum; every field is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Suffix of detail page titles.
    pub owner: Arc<str>,
    /// Where unresolvable detail requests are sent.
    pub fallback_path: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, config: &SiteConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            owner: Arc::from(config.owner.as_str()),
            fallback_path: Arc::from(config.fallback_path.as_str()),
        }
    }
}
