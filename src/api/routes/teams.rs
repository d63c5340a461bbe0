use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::{load_entities, ApiError};
use crate::calculate::{resolve_player_game, team_record};
use crate::models::{Game, Match, Team, TeamRecord, Tournament};
use crate::storage::EntityType;

/// One row of the team listing.
#[derive(Debug, Serialize)]
pub struct TeamSummary {
    pub id: String,
    pub name: String,
    pub country: String,
    pub logo_url: Option<String>,
    pub ranking: Option<u32>,
    pub game: Option<Game>,
    pub player_count: usize,
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: u32,
}

/// Full team view with roster, record, and match list.
#[derive(Debug, Serialize)]
pub struct TeamDetail {
    pub team: Team,
    pub game: Option<Game>,
    pub record: TeamRecord,
    pub matches: Vec<Match>,
}

pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamSummary>>, ApiError> {
    let teams: Vec<Team> = load_entities(&state, EntityType::Team)?;
    let matches: Vec<Match> = load_entities(&state, EntityType::Match)?;
    let tournaments: Vec<Tournament> = load_entities(&state, EntityType::Tournament)?;

    let summaries = teams
        .iter()
        .map(|team| {
            let record = team_record(
                &team.id,
                matches.iter().filter(|m| m.involves(&team.id)),
                &[],
            );
            TeamSummary {
                id: team.id.to_string(),
                name: team.name.clone(),
                country: team.country.clone(),
                logo_url: team.logo_url.clone(),
                ranking: team.ranking,
                game: resolve_player_game(team, &tournaments),
                player_count: team.players.len(),
                total: record.total,
                wins: record.wins,
                losses: record.losses,
                win_rate: record.win_rate,
            }
        })
        .collect();

    Ok(Json(summaries))
}

pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamDetail>, ApiError> {
    let teams: Vec<Team> = load_entities(&state, EntityType::Team)?;
    let team = teams
        .into_iter()
        .find(|t| t.id.as_str() == id)
        .ok_or_else(|| ApiError::NotFound(format!("team {}", id)))?;

    let matches: Vec<Match> = load_entities(&state, EntityType::Match)?;
    let tournaments: Vec<Tournament> = load_entities(&state, EntityType::Tournament)?;

    let team_matches: Vec<Match> = matches
        .into_iter()
        .filter(|m| m.involves(&team.id))
        .collect();
    let record = team_record(&team.id, team_matches.iter(), &tournaments);
    let game = resolve_player_game(&team, &tournaments);

    Ok(Json(TeamDetail {
        team,
        game,
        record,
        matches: team_matches,
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::models::{Game, Match, MatchType, Player, Team, TeamRef, Tournament};
    use crate::storage::StorageConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn write_jsonl<T: serde::Serialize>(path: &std::path::Path, items: &[T]) {
        let mut content = String::new();
        for item in items {
            content.push_str(&serde_json::to_string(item).unwrap());
            content.push('\n');
        }
        std::fs::write(path, content).unwrap();
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn setup_test_state(dir: &std::path::Path) -> AppState {
        let storage = StorageConfig::new(dir.to_path_buf());
        std::fs::create_dir_all(storage.normalized_dir()).unwrap();
        AppState {
            storage: Arc::new(storage),
        }
    }

    fn make_team(name: &str, country: &str) -> Team {
        let mut team = Team::new(name.to_string(), country.to_string());
        team.players = vec![Player::new(
            format!("{}-p1", name),
            country.to_string(),
            team.id.clone(),
        )];
        team
    }

    fn make_match(team1: &Team, team2: &Team, hour: u32) -> Match {
        Match::new(
            "tour-1".into(),
            TeamRef::from(team1),
            TeamRef::from(team2),
            Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap(),
            MatchType::Bo3,
        )
    }

    #[tokio::test]
    async fn test_list_teams_with_records() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());
        let dir = tmp.path().join("normalized");

        let navi = make_team("NAVI", "Ukraine");
        let faze = make_team("FaZe", "Europe");
        let matches = vec![
            make_match(&navi, &faze, 10).completed(16, 12),
            make_match(&faze, &navi, 11).completed(16, 9),
            make_match(&navi, &faze, 12),
        ];
        let tournament = Tournament::new(
            "Major".to_string(),
            Game::Cs2,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        )
        .with_teams(vec![navi.id.clone(), faze.id.clone()]);

        write_jsonl(&dir.join("teams.jsonl"), &[&navi, &faze]);
        write_jsonl(&dir.join("matches.jsonl"), &matches);
        write_jsonl(&dir.join("tournaments.jsonl"), &[&tournament]);

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/teams").await;

        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        let navi_row = rows.iter().find(|r| r["name"] == "NAVI").unwrap();
        assert_eq!(navi_row["total"], 2);
        assert_eq!(navi_row["wins"], 1);
        assert_eq!(navi_row["losses"], 1);
        assert_eq!(navi_row["win_rate"], 50);
        assert_eq!(navi_row["game"], "CS2");
        assert_eq!(navi_row["player_count"], 1);
    }

    #[tokio::test]
    async fn test_list_teams_empty_store() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/teams").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_team_detail() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());
        let dir = tmp.path().join("normalized");

        let navi = make_team("NAVI", "Ukraine");
        let faze = make_team("FaZe", "Europe");
        let matches = vec![
            make_match(&navi, &faze, 10).completed(16, 12),
            make_match(&faze, &navi, 11).completed(16, 9),
        ];

        write_jsonl(&dir.join("teams.jsonl"), &[&navi, &faze]);
        write_jsonl(&dir.join("matches.jsonl"), &matches);

        let app = build_router(state);
        let uri = format!("/api/teams/{}", navi.id);
        let (status, json) = get_json(app, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["team"]["name"], "NAVI");
        assert_eq!(json["record"]["total"], 2);
        assert_eq!(json["record"]["recent_form"], serde_json::json!(["W", "L"]));
        assert_eq!(json["matches"].as_array().unwrap().len(), 2);
        // Most recent first in the detail rows.
        assert_eq!(json["record"]["recent_matches"][0]["result"], "L");
        assert_eq!(json["record"]["recent_matches"][0]["score"], "9 - 16");
    }

    #[tokio::test]
    async fn test_get_team_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/teams/nonexistent").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
