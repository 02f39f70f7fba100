//! # reel-api
//!
//! HTTP API server for reel. The router and application state live here
//! so integration tests can drive the service with any repository
//! implementation; the binary in `main.rs` wires up the real one.

pub mod handlers;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::error;

use reel_core::MovieRepository;

use handlers::movies::{
    create_movie, delete_all_movies, delete_movie, get_movie, list_movies, update_movie,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Movie repository backing every operation.
    pub movies: Arc<dyn MovieRepository>,
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Movies CRUD
        .route(
            "/api/movies",
            get(list_movies).post(create_movie).delete(delete_all_movies),
        )
        .route(
            "/api/movies/:id",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// Handler error, mapped onto an HTTP status.
///
/// Neither arm carries a response body: store failure details are logged
/// server-side and never exposed to the caller.
#[derive(Debug)]
pub enum ApiError {
    /// Underlying store failure; always surfaces as a 500.
    Store(reel_core::Error),
    /// Requested record does not exist; a 404.
    NotFound(String),
}

impl From<reel_core::Error> for ApiError {
    fn from(err: reel_core::Error) -> Self {
        match err {
            reel_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(err) => {
                error!(error = %err, "Store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::Error;

    #[test]
    fn core_not_found_maps_to_not_found() {
        let err: ApiError = Error::NotFound("movie m-1".to_string()).into();
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "movie m-1"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn store_faults_map_to_store() {
        let err: ApiError = Error::Store("down".to_string()).into();
        assert!(matches!(err, ApiError::Store(_)));

        let err: ApiError = Error::Serialization("bad payload".to_string()).into();
        assert!(matches!(err, ApiError::Store(_)));
    }
}
