//! Match model.
//!
//! A match has two asymmetric participant slots. Which slot a team occupies
//! determines which score field belongs to it, so the slots are never
//! treated as an unordered pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, MatchId, StreamLink, Team, TeamId, TournamentId};

/// Lifecycle status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Completed,
}

/// Best-of format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Bo1,
    Bo3,
    Bo5,
}

/// Lightweight team reference embedded in a match record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

impl From<&Team> for TeamRef {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.clone(),
            name: team.name.clone(),
        }
    }
}

/// A match between two teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier (derived from tournament + slots + time)
    pub id: MatchId,

    /// Tournament this match belongs to
    pub tournament_id: TournamentId,

    /// First participant slot
    pub team1: TeamRef,

    /// Second participant slot
    pub team2: TeamRef,

    /// Scheduled start time
    pub scheduled_time: DateTime<Utc>,

    /// Lifecycle status
    pub status: MatchStatus,

    /// Score for the team1 slot; expected only for completed matches,
    /// but not enforced by the data layer.
    pub team1_score: Option<u32>,

    /// Score for the team2 slot
    pub team2_score: Option<u32>,

    /// Best-of format
    pub match_type: MatchType,

    /// Round label (e.g. "Quarterfinal")
    pub round: Option<String>,

    /// Streams carrying this match
    #[serde(default)]
    pub stream_links: Vec<StreamLink>,
}

impl Match {
    /// Create a scheduled match with an auto-generated ID.
    pub fn new(
        tournament_id: TournamentId,
        team1: TeamRef,
        team2: TeamRef,
        scheduled_time: DateTime<Utc>,
        match_type: MatchType,
    ) -> Self {
        let id = EntityId::generate(&[
            tournament_id.as_str(),
            team1.id.as_str(),
            team2.id.as_str(),
            &scheduled_time.to_rfc3339(),
        ]);
        Self {
            id,
            tournament_id,
            team1,
            team2,
            scheduled_time,
            status: MatchStatus::Scheduled,
            team1_score: None,
            team2_score: None,
            match_type,
            round: None,
            stream_links: Vec::new(),
        }
    }

    /// Builder method to mark the match completed with a final score.
    pub fn completed(mut self, team1_score: u32, team2_score: u32) -> Self {
        self.status = MatchStatus::Completed;
        self.team1_score = Some(team1_score);
        self.team2_score = Some(team2_score);
        self
    }

    /// Builder method to mark the match live.
    pub fn live(mut self) -> Self {
        self.status = MatchStatus::Live;
        self
    }

    /// Builder method to set the round label.
    pub fn with_round(mut self, round: String) -> Self {
        self.round = Some(round);
        self
    }

    /// Builder method to add a stream link.
    pub fn with_stream_link(mut self, link: StreamLink) -> Self {
        self.stream_links.push(link);
        self
    }

    /// Whether the given team occupies one of this match's slots.
    pub fn involves(&self, team_id: &TeamId) -> bool {
        self.team1.id == *team_id || self.team2.id == *team_id
    }
}
