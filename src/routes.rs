//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`   - Health check: tenant API reachability (public)
//! - `/static/*`     - Static assets shared by all templates
//! - everything else - Storefront catch-all, resolved by hostname + path
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/blog/` and
//!   `/blog` classify identically

use crate::api::handlers::{health_handler, storefront_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(get(storefront_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
