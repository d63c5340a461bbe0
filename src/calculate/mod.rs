//! Statistics calculation engine.
//!
//! Computes derived views from raw match records:
//! - Match outcome resolution (win/loss per team slot)
//! - Team records (counts, win rate, recent form)
//! - Team and player leaderboards
//! - Player-to-game inference
//!
//! Everything here is a pure function over already-fetched collections.
//! The data layer materializes entity graphs and the API layer renders
//! the results; this module does no I/O of its own.

mod leaderboard;

pub use leaderboard::{
    player_metric, rank_players, rank_teams, resolve_player_game, team_in_game, LEADERBOARD_SIZE,
};

use crate::models::{Match, MatchStatus, Outcome, RecentMatch, TeamId, TeamRecord, Tournament};

/// How many completed matches make up the recent-form window.
pub const RECENT_FORM_LEN: usize = 5;

/// Resolve a match's outcome from one team's perspective.
///
/// Returns `None` unless the match is completed and both scores are
/// present; a match without usable scores is excluded from win/loss
/// computation rather than counted as a loss.
///
/// Slot selection matches the upstream dashboard: the team occupies the
/// team1 slot iff its ID equals the match's team1 reference, otherwise
/// it is treated as the team2 slot. Equal scores resolve to a loss
/// (no draw outcome is modeled).
pub fn resolve_outcome(m: &Match, team_id: &TeamId) -> Option<Outcome> {
    let (own, opp) = own_and_opponent_scores(m, team_id)?;
    if own > opp {
        Some(Outcome::Win)
    } else {
        Some(Outcome::Loss)
    }
}

/// Score attribution for a completed match, `(own, opponent)`.
fn own_and_opponent_scores(m: &Match, team_id: &TeamId) -> Option<(u32, u32)> {
    if m.status != MatchStatus::Completed {
        return None;
    }
    let team1_score = m.team1_score?;
    let team2_score = m.team2_score?;
    if m.team1.id == *team_id {
        Some((team1_score, team2_score))
    } else {
        Some((team2_score, team1_score))
    }
}

/// Compute summary statistics for one team from its match list.
///
/// `matches` is the union of the team's team1 and team2 memberships, in
/// any order: completed matches are sorted by scheduled time before the
/// recent-form window is taken, so "recent" means chronologically recent
/// regardless of fetch order. `tournaments` is only consulted to label
/// the recent-match detail rows and may be empty.
///
/// Empty input yields a zeroed record; this never fails.
pub fn team_record<'a, I>(team_id: &TeamId, matches: I, tournaments: &[Tournament]) -> TeamRecord
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut completed: Vec<(&Match, Outcome, u32, u32)> = matches
        .into_iter()
        .filter_map(|m| {
            let outcome = resolve_outcome(m, team_id)?;
            let (own, opp) = own_and_opponent_scores(m, team_id)?;
            Some((m, outcome, own, opp))
        })
        .collect();
    completed.sort_by_key(|(m, ..)| m.scheduled_time);

    let wins = completed
        .iter()
        .filter(|(_, o, ..)| *o == Outcome::Win)
        .count() as u32;
    let total = completed.len() as u32;
    let losses = total - wins;
    let win_rate = if total > 0 {
        ((wins as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    let window_start = completed.len().saturating_sub(RECENT_FORM_LEN);
    let window = &completed[window_start..];

    let recent_form: Vec<Outcome> = window.iter().map(|(_, o, ..)| *o).collect();
    let recent_matches: Vec<RecentMatch> = window
        .iter()
        .rev()
        .map(|(m, outcome, own, opp)| {
            let opponent = if m.team1.id == *team_id {
                m.team2.name.clone()
            } else {
                m.team1.name.clone()
            };
            let tournament = tournaments
                .iter()
                .find(|t| t.id == m.tournament_id)
                .map(|t| t.name.clone());
            RecentMatch {
                id: m.id.clone(),
                opponent,
                date: m.scheduled_time,
                score: format!("{} - {}", own, opp),
                result: *outcome,
                tournament,
            }
        })
        .collect();

    TeamRecord {
        total,
        wins,
        losses,
        win_rate,
        recent_form,
        recent_matches,
    }
}
