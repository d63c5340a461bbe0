use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{load_entities, ApiError};
use crate::calculate::{rank_players, rank_teams};
use crate::models::{Game, Match, PlayerStanding, Team, TeamStanding, Tournament};
use crate::storage::EntityType;

#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    /// Game tag to rank ("CS2", "VALORANT", "LOL"). Required.
    pub game: String,
}

/// Combined team and player leaderboards for one game.
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub game: Game,
    pub teams: Vec<TeamStanding>,
    pub players: Vec<PlayerStanding>,
}

pub async fn leaderboards(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let game: Game = params
        .game
        .parse()
        .map_err(|e: crate::models::UnknownGame| ApiError::BadRequest(e.to_string()))?;

    let teams: Vec<Team> = load_entities(&state, EntityType::Team)?;
    let tournaments: Vec<Tournament> = load_entities(&state, EntityType::Tournament)?;
    let matches: Vec<Match> = load_entities(&state, EntityType::Match)?;

    Ok(Json(LeaderboardResponse {
        game,
        teams: rank_teams(&teams, &tournaments, &matches, game),
        players: rank_players(&teams, &tournaments, game),
    }))
}
