use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::{load_entities, ApiError};
use crate::calculate::{resolve_player_game, team_record};
use crate::models::{Game, Match, Player, RecentMatch, Team, TeamRef, Tournament};
use crate::storage::EntityType;

/// Full player view with inferred game and recent team results.
#[derive(Debug, Serialize)]
pub struct PlayerDetail {
    pub player: Player,
    pub team: TeamRef,
    /// Game inferred from the team's tournament history; `None` means
    /// callers should fall back to a generic stat schema.
    pub game: Option<Game>,
    pub recent_matches: Vec<RecentMatch>,
}

pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerDetail>, ApiError> {
    let teams: Vec<Team> = load_entities(&state, EntityType::Team)?;

    let (team, player) = teams
        .iter()
        .find_map(|team| {
            team.players
                .iter()
                .find(|p| p.id.as_str() == id)
                .map(|p| (team, p.clone()))
        })
        .ok_or_else(|| ApiError::NotFound(format!("player {}", id)))?;

    let matches: Vec<Match> = load_entities(&state, EntityType::Match)?;
    let tournaments: Vec<Tournament> = load_entities(&state, EntityType::Tournament)?;

    let game = resolve_player_game(team, &tournaments);
    // A player's recent results are their current team's recent results.
    let record = team_record(
        &team.id,
        matches.iter().filter(|m| m.involves(&team.id)),
        &tournaments,
    );

    Ok(Json(PlayerDetail {
        player,
        team: TeamRef::from(team),
        game,
        recent_matches: record.recent_matches,
    }))
}
