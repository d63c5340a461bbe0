use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::{load_entities, ApiError};
use crate::models::{Game, Tournament};
use crate::storage::EntityType;

#[derive(Debug, Deserialize)]
pub struct TournamentParams {
    /// Filter by game tag ("CS2", "VALORANT", "LOL")
    pub game: Option<String>,
}

pub async fn list_tournaments(
    State(state): State<AppState>,
    Query(params): Query<TournamentParams>,
) -> Result<Json<Vec<Tournament>>, ApiError> {
    let game = params
        .game
        .as_deref()
        .map(|s| {
            s.parse::<Game>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))
        })
        .transpose()?;

    let mut tournaments: Vec<Tournament> = load_entities(&state, EntityType::Tournament)?;
    if let Some(game) = game {
        tournaments.retain(|t| t.game == game);
    }

    Ok(Json(tournaments))
}
