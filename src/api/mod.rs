//! REST API endpoints.
//!
//! Axum-based read-only HTTP API over the stored entity data. All
//! derived statistics come from the shared [`crate::calculate`] engine
//! so every endpoint reports the same numbers.

pub mod routes;
pub mod state;

use axum::routing::get;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::{EntityType, JsonlReader};
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Read all entities of one type, mapping storage failures to 500s.
pub(crate) fn load_entities<T: DeserializeOwned>(
    state: &AppState,
    entity: EntityType,
) -> Result<Vec<T>, ApiError> {
    JsonlReader::<T>::for_entity(&state.storage, entity)
        .read_all()
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/teams", get(routes::teams::list_teams))
        .route("/api/teams/:id", get(routes::teams::get_team))
        .route("/api/players/:id", get(routes::players::get_player))
        .route("/api/matches", get(routes::matches::list_matches))
        .route("/api/tournaments", get(routes::tournaments::list_tournaments))
        .route("/api/leaderboards", get(routes::leaderboards::leaderboards))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
