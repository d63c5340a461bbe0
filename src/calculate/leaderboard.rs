//! Leaderboard ranking and player-to-game inference.

use crate::models::{
    Game, Match, Player, PlayerStanding, Team, TeamId, TeamStanding, Tournament,
};

use super::team_record;

/// Maximum number of rows in a leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// The stat key used to rank players in the given game.
fn metric_key(game: Game) -> &'static str {
    match game {
        Game::Lol => "KDA",
        _ => "K/D Ratio",
    }
}

/// Whether a team is associated with the given game via any tournament.
pub fn team_in_game(team_id: &TeamId, tournaments: &[Tournament], game: Game) -> bool {
    tournaments
        .iter()
        .any(|t| t.game == game && t.includes_team(team_id))
}

/// Extract a player's ranking metric for the given game.
///
/// The stats mapping comes from an opaque upstream source; a missing
/// mapping, missing key, or unparsable value all yield 0.
pub fn player_metric(player: &Player, game: Game) -> f64 {
    player
        .stats
        .as_ref()
        .and_then(|stats| stats.get(metric_key(game)))
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

/// Rank teams for a game by win rate.
///
/// Teams qualify when any tournament for the game lists them. Ordering
/// is descending by win rate, ties broken by total completed matches
/// (more matches ranks higher); remaining ties keep input order. The
/// result is truncated to [`LEADERBOARD_SIZE`].
pub fn rank_teams(
    teams: &[Team],
    tournaments: &[Tournament],
    matches: &[Match],
    game: Game,
) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = teams
        .iter()
        .filter(|team| team_in_game(&team.id, tournaments, game))
        .map(|team| {
            let record = team_record(
                &team.id,
                matches.iter().filter(|m| m.involves(&team.id)),
                &[],
            );
            TeamStanding {
                id: team.id.clone(),
                name: team.name.clone(),
                country: team.country.clone(),
                win_rate: record.win_rate,
                total: record.total,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.win_rate
            .cmp(&a.win_rate)
            .then(b.total.cmp(&a.total))
    });
    standings.truncate(LEADERBOARD_SIZE);
    standings
}

/// Rank players for a game by the game's performance metric.
///
/// Players qualify when their team is associated with the game via any
/// tournament. Ordering is descending by metric, stable on ties, and
/// the result is truncated to [`LEADERBOARD_SIZE`].
pub fn rank_players(teams: &[Team], tournaments: &[Tournament], game: Game) -> Vec<PlayerStanding> {
    let mut standings: Vec<PlayerStanding> = teams
        .iter()
        .filter(|team| team_in_game(&team.id, tournaments, game))
        .flat_map(|team| {
            team.players.iter().map(|player| PlayerStanding {
                id: player.id.clone(),
                nickname: player.nickname.clone(),
                team_name: team.name.clone(),
                metric: player_metric(player, game),
            })
        })
        .collect();

    standings.sort_by(|a, b| b.metric.total_cmp(&a.metric));
    standings.truncate(LEADERBOARD_SIZE);
    standings
}

/// Infer which game a player's team belongs to.
///
/// Uses the game of the team's most recent tournament (by start date);
/// teams with no tournaments fall back to their own optional game tag.
/// Returns `None` when neither source is available, in which case
/// callers should use a generic stat schema.
pub fn resolve_player_game(team: &Team, tournaments: &[Tournament]) -> Option<Game> {
    tournaments
        .iter()
        .filter(|t| t.includes_team(&team.id))
        .max_by_key(|t| t.start_date)
        .map(|t| t.game)
        .or(team.game)
}
