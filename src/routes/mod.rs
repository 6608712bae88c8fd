//! Route definitions and router assembly.

pub mod dashboard;
pub mod health;
pub mod items;
pub mod pages;

use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Maximum accepted request body size.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Assemble the full application router. Shared by `main` and the
/// integration tests.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::dashboard))
        .route(
            "/api/dashboard",
            get(dashboard::stats).post(dashboard::create_activity),
        )
        .route(
            "/api/items",
            get(items::list)
                .post(items::create)
                .put(items::update)
                .delete(items::remove),
        )
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(cors)
        .with_state(state)
}
