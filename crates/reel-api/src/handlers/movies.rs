//! Movie HTTP handlers.
//!
//! REST surface for movie records: list with optional title-substring
//! search, lookup by id, create, full-replace update, and deletion.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::{ApiError, AppState};
use reel_core::Movie;

/// Query parameters for listing movies.
#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    /// Case-sensitive title substring filter.
    pub title: Option<String>,
}

/// List all movies, optionally filtered by title substring.
///
/// # Query Parameters
/// - `title`: return only movies whose title contains this fragment
///
/// # Returns
/// - 200 OK with an array of movies
/// - 204 No Content when nothing matches
/// - 500 Internal Server Error if the store query fails
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> Result<Response, ApiError> {
    let movies = match query.title.as_deref() {
        Some(fragment) => state.movies.find_by_title_containing(fragment).await?,
        None => state.movies.find_all().await?,
    };

    if movies.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(movies).into_response())
}

/// Get a movie by id.
///
/// # Returns
/// - 200 OK with the movie
/// - 404 Not Found if no record resolves to `id`
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    // A failed lookup reads the same as an absent record on this route.
    let found = match state.movies.find_by_id(&id).await {
        Ok(found) => found,
        Err(err) => {
            warn!(movie_id = %id, error = %err, "Lookup failed, reporting not found");
            None
        }
    };

    found
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Movie {} not found", id)))
}

/// Create a movie.
///
/// Any identifier in the payload is discarded; the store assigns one.
///
/// # Returns
/// - 201 Created with the stored record, id included
/// - 500 Internal Server Error if the insert fails
pub async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<Movie>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.movies.save(Movie { id: None, ..body }).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a movie's fields.
///
/// Full-replace semantics: every mutable field takes the payload's
/// value, including fields the payload leaves out. The identifier is
/// kept as-is.
///
/// # Returns
/// - 200 OK with the persisted record
/// - 404 Not Found if `id` resolves to nothing (no record is created)
/// - 500 Internal Server Error if the persist step fails
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Movie>,
) -> Result<Json<Movie>, ApiError> {
    let existing = state.movies.find_by_id(&id).await?.ok_or_else(|| {
        warn!(movie_id = %id, "Movie not found, rejecting update");
        ApiError::NotFound(format!("Movie {} not found", id))
    })?;

    let updated = state
        .movies
        .save(Movie {
            id: existing.id,
            ..body
        })
        .await?;
    Ok(Json(updated))
}

/// Delete a movie by id.
///
/// Deleting an id with no record behind it still succeeds.
///
/// # Returns
/// - 204 No Content
/// - 500 Internal Server Error if the delete fails
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.movies.delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every movie.
///
/// # Returns
/// - 204 No Content
/// - 500 Internal Server Error if the delete fails
pub async fn delete_all_movies(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.movies.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}
