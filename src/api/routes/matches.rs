use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::{load_entities, ApiError};
use crate::models::{Match, MatchStatus};
use crate::storage::EntityType;

#[derive(Debug, Deserialize)]
pub struct MatchParams {
    /// Filter by lifecycle status ("scheduled", "live", "completed")
    pub status: Option<String>,

    /// Filter to matches involving this team (either slot)
    pub team_id: Option<String>,
}

fn parse_status(s: &str) -> Result<MatchStatus, ApiError> {
    match s {
        "scheduled" => Ok(MatchStatus::Scheduled),
        "live" => Ok(MatchStatus::Live),
        "completed" => Ok(MatchStatus::Completed),
        other => Err(ApiError::BadRequest(format!("unknown status: {}", other))),
    }
}

pub async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchParams>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let status = params.status.as_deref().map(parse_status).transpose()?;

    let mut matches: Vec<Match> = load_entities(&state, EntityType::Match)?;

    if let Some(status) = status {
        matches.retain(|m| m.status == status);
    }
    if let Some(team_id) = &params.team_id {
        let team_id = team_id.as_str().into();
        matches.retain(|m| m.involves(&team_id));
    }

    Ok(Json(matches))
}
