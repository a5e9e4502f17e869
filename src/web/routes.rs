//! # Route Definitions
//!
//! Route tables for the versioned API surface, grouped the same way the
//! endpoints are grouped for consumers.

use axum::routing::{get, post};
use axum::Router;

use crate::web::handlers;
use crate::web::state::AppState;

/// Health endpoints, mounted under `/v1/health`:
/// - `/api` - process liveness
/// - `/infrastructure` - dependency readiness aggregation
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(handlers::health::api_health))
        .route(
            "/infrastructure",
            get(handlers::health::infrastructure_health),
        )
}

/// Movie resource endpoints, mounted under `/v1/movies`.
pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::movies::list_movies))
        .route("/", post(handlers::movies::create_movie))
        .route("/:id", get(handlers::movies::get_movie))
}
