//! Derived statistics models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MatchId;

/// Outcome of a completed match from one team's perspective.
///
/// There is no draw outcome: equal scores resolve to a loss for both
/// sides, matching the upstream dashboard's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl Outcome {
    pub fn as_letter(&self) -> &'static str {
        match self {
            Outcome::Win => "W",
            Outcome::Loss => "L",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_letter())
    }
}

/// A single value in a player's free-form stats mapping.
///
/// The upstream source mixes numbers ("Kills": 1520) and formatted
/// strings ("Headshot %": "61.5%"), so values are kept as a tagged
/// union and coerced to numbers only at the metric-extraction boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    /// Coerce to a number, accepting a numeric prefix of a string value
    /// (so "61.5%" yields 61.5). Returns `None` when no number can be read.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Text(s) => parse_float_prefix(s),
        }
    }
}

/// Parse the leading float of a string, ignoring any trailing garbage.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    let bytes = s.as_bytes();
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

/// One row in a team's recent-match table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentMatch {
    /// Match ID, for linking
    pub id: MatchId,

    /// Opponent's display name
    pub opponent: String,

    /// Scheduled time of the match
    pub date: DateTime<Utc>,

    /// Formatted score string, own score first (e.g. "16 - 12")
    pub score: String,

    /// W or L from this team's perspective
    pub result: Outcome,

    /// Tournament name, when known
    pub tournament: Option<String>,
}

/// Summary statistics for one team, computed from its match list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Completed matches with valid scores
    pub total: u32,

    /// Wins
    pub wins: u32,

    /// Losses (including score ties)
    pub losses: u32,

    /// Percentage of completed matches won, rounded to nearest integer.
    /// Zero when no matches were completed.
    pub win_rate: u32,

    /// W/L letters for the most recent completed matches, oldest first
    pub recent_form: Vec<Outcome>,

    /// Detail rows for the same window, most recent first
    pub recent_matches: Vec<RecentMatch>,
}

/// One row of the team leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStanding {
    pub id: super::TeamId,
    pub name: String,
    pub country: String,
    pub win_rate: u32,
    pub total: u32,
}

/// One row of the player leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub id: super::PlayerId,
    pub nickname: String,
    pub team_name: String,
    /// Game-dependent performance metric (KDA for LOL, K/D Ratio otherwise)
    pub metric: f64,
}
