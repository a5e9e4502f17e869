//! # Movie Handlers
//!
//! CRUD-style endpoints for the movie resource. Reads go to the slave
//! pool, writes to the master pool.

use axum::extract::{Path, State};
use axum::Json;
use tracing::error;

use crate::models::{Movie, NewMovie};
use crate::web::response_types::{ApiError, ApiResult};
use crate::web::state::AppState;

/// List all movies: GET /v1/movies
pub async fn list_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<Movie>>> {
    let movies = Movie::all(&state.pools.slave).await.map_err(|e| {
        error!(error = %e, "failed to list movies");
        ApiError::from(e)
    })?;

    Ok(Json(movies))
}

/// Fetch one movie: GET /v1/movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Movie>> {
    let movie = Movie::find_by_id(&state.pools.slave, id)
        .await
        .map_err(|e| {
            error!(movie_id = id, error = %e, "failed to fetch movie");
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::data_not_found(format!("movie {id} not found")))?;

    Ok(Json(movie))
}

/// Create a movie: POST /v1/movies
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<NewMovie>,
) -> ApiResult<Json<Movie>> {
    payload.validate().map_err(ApiError::bad_request)?;

    let movie = Movie::create(&state.pools.master, payload)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to create movie");
            ApiError::from(e)
        })?;

    Ok(Json(movie))
}
