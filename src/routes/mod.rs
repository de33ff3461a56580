mod api;
mod common;

pub use api::{api_routes, openapi_routes, ApiDoc};
pub use common::{common_routes, ready_routes};

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

/// Application router without the readiness route: resource routes under
/// `/api`, OpenAPI document, health and version.
///
/// Bodies over `max_body_bytes` are rejected by the `Json` extractor and
/// answered with a 413 `payload_too_large` error body.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .nest("/api", api_routes(state))
        .merge(openapi_routes())
        .merge(common_routes())
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

/// Router the server runs: [`app`] plus `/ready` over `pool`, with HTTP tracing.
pub fn server_router(state: AppState, pool: PgPool, max_body_bytes: usize) -> Router {
    app(state, max_body_bytes)
        .merge(ready_routes(pool))
        .layer(TraceLayer::new_for_http())
}
