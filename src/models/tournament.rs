//! Tournament and stream link models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntityId, Game, TeamId, TournamentId};

/// Lifecycle status of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Upcoming,
    Live,
    Completed,
}

/// Streaming platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamPlatform {
    Twitch,
    Youtube,
    Other,
}

/// A link to a live stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamLink {
    pub platform: StreamPlatform,
    pub url: String,
    pub language: String,
    pub viewer_count: Option<u32>,
    pub is_official: bool,
}

/// A tournament with its participating teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    /// Unique identifier (derived from name + game + start date)
    pub id: TournamentId,

    /// Tournament name
    pub name: String,

    /// Game category
    pub game: Game,

    /// First day of play
    pub start_date: NaiveDate,

    /// Last day of play
    pub end_date: NaiveDate,

    /// Prize pool in USD
    pub prize_pool: Option<u64>,

    /// Host city/country
    pub location: Option<String>,

    /// Lifecycle status
    pub status: TournamentStatus,

    /// Participating teams
    pub team_ids: Vec<TeamId>,

    /// Official and community streams
    #[serde(default)]
    pub stream_links: Vec<StreamLink>,
}

impl Tournament {
    /// Create a new tournament with an auto-generated ID.
    pub fn new(name: String, game: Game, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let id = EntityId::generate(&[&name, game.as_str(), &start_date.to_string()]);
        Self {
            id,
            name,
            game,
            start_date,
            end_date,
            prize_pool: None,
            location: None,
            status: TournamentStatus::Upcoming,
            team_ids: Vec::new(),
            stream_links: Vec::new(),
        }
    }

    /// Builder method to set the prize pool.
    pub fn with_prize_pool(mut self, prize_pool: u64) -> Self {
        self.prize_pool = Some(prize_pool);
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: TournamentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set the participating teams.
    pub fn with_teams(mut self, team_ids: Vec<TeamId>) -> Self {
        self.team_ids = team_ids;
        self
    }

    /// Whether the given team participates in this tournament.
    pub fn includes_team(&self, team_id: &TeamId) -> bool {
        self.team_ids.contains(team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tournament_creation() {
        let t = Tournament::new(
            "CS2 Major Berlin".to_string(),
            Game::Cs2,
            date(2026, 3, 1),
            date(2026, 3, 14),
        );
        assert_eq!(t.game, Game::Cs2);
        assert_eq!(t.status, TournamentStatus::Upcoming);
        assert!(t.team_ids.is_empty());
    }

    #[test]
    fn test_tournament_includes_team() {
        let t = Tournament::new(
            "VCT Champions".to_string(),
            Game::Valorant,
            date(2026, 8, 1),
            date(2026, 8, 20),
        )
        .with_teams(vec!["t1".into(), "t2".into()]);

        assert!(t.includes_team(&"t1".into()));
        assert!(!t.includes_team(&"t9".into()));
    }

    #[test]
    fn test_tournament_serialization() {
        let t = Tournament::new(
            "Worlds 2026".to_string(),
            Game::Lol,
            date(2026, 10, 1),
            date(2026, 11, 2),
        )
        .with_prize_pool(2_500_000)
        .with_status(TournamentStatus::Live);

        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"LOL\""));
        assert!(json.contains("\"live\""));
        let back: Tournament = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, t.id);
        assert_eq!(back.prize_pool, Some(2_500_000));
    }
}
