//! # Web API Module
//!
//! Axum-based HTTP layer: route assembly, shared state, response envelope,
//! and request handlers.
//!
//! - [`routes`] - HTTP route definitions and organization
//! - [`handlers`] - request handlers for health and movie endpoints
//! - [`state`] - shared application state (config, pools, health checker)
//! - [`response_types`] - envelope and error types

pub mod handlers;
pub mod response_types;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

use crate::web::response_types::ApiError;

/// Create the Axum application with all routes and middleware.
pub fn create_app(app_state: AppState) -> Router {
    let v1 = Router::new()
        .nest("/health", routes::health_routes())
        .nest("/movies", routes::movie_routes());

    Router::new()
        .nest("/v1", v1)
        .fallback(|| async { ApiError::EndpointNotFound })
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(app_state)
}
