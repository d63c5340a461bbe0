//! Team and player models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{EntityId, Game, PlayerId, StatValue, TeamId};

/// A competing team with its roster embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier (derived from name + country)
    pub id: TeamId,

    /// Display name
    pub name: String,

    /// Country or region
    pub country: String,

    /// Logo image URL
    pub logo_url: Option<String>,

    /// World ranking position from the upstream source
    pub ranking: Option<u32>,

    /// Game tag set directly on the team; normally the game is inferred
    /// from tournament participation instead.
    pub game: Option<Game>,

    /// Roster in display order
    pub players: Vec<Player>,
}

impl Team {
    /// Create a new team with an auto-generated ID and empty roster.
    pub fn new(name: String, country: String) -> Self {
        let id = EntityId::generate(&["team", &name, &country]);
        Self {
            id,
            name,
            country,
            logo_url: None,
            ranking: None,
            game: None,
            players: Vec::new(),
        }
    }

    /// Builder method to set the logo URL.
    pub fn with_logo_url(mut self, url: String) -> Self {
        self.logo_url = Some(url);
        self
    }

    /// Builder method to set the world ranking.
    pub fn with_ranking(mut self, ranking: u32) -> Self {
        self.ranking = Some(ranking);
        self
    }

    /// Builder method to set the team-level game tag.
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = Some(game);
        self
    }

    /// Builder method to set the roster.
    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }
}

/// A player on a team's roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier (derived from nickname + team id)
    pub id: PlayerId,

    /// In-game nickname
    pub nickname: String,

    /// Real name, when known
    pub real_name: Option<String>,

    /// Country
    pub country: String,

    /// Owning team
    pub team_id: TeamId,

    /// Photo URL
    pub photo_url: Option<String>,

    /// Role within the team (e.g. "AWPer", "IGL")
    pub role: Option<String>,

    /// Free-form performance stats from the upstream source.
    /// Keys and value shapes are upstream-defined and treated as opaque.
    pub stats: Option<BTreeMap<String, StatValue>>,
}

impl Player {
    /// Create a new player with an auto-generated ID.
    pub fn new(nickname: String, country: String, team_id: TeamId) -> Self {
        let id = EntityId::generate(&["player", &nickname, team_id.as_str()]);
        Self {
            id,
            nickname,
            real_name: None,
            country,
            team_id,
            photo_url: None,
            role: None,
            stats: None,
        }
    }

    /// Builder method to set the real name.
    pub fn with_real_name(mut self, real_name: String) -> Self {
        self.real_name = Some(real_name);
        self
    }

    /// Builder method to set the photo URL.
    pub fn with_photo_url(mut self, url: String) -> Self {
        self.photo_url = Some(url);
        self
    }

    /// Builder method to set the role.
    pub fn with_role(mut self, role: String) -> Self {
        self.role = Some(role);
        self
    }

    /// Builder method to set the stats mapping.
    pub fn with_stats(mut self, stats: BTreeMap<String, StatValue>) -> Self {
        self.stats = Some(stats);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_creation() {
        let team = Team::new("Natus Vincere".to_string(), "Ukraine".to_string());
        assert_eq!(team.name, "Natus Vincere");
        assert!(!team.id.as_str().is_empty());
        assert!(team.players.is_empty());
        assert!(team.ranking.is_none());
    }

    #[test]
    fn test_team_id_stable_across_runs() {
        let a = Team::new("FaZe Clan".to_string(), "Europe".to_string());
        let b = Team::new("FaZe Clan".to_string(), "Europe".to_string());
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_team_builder() {
        let team = Team::new("G2 Esports".to_string(), "Europe".to_string())
            .with_ranking(2)
            .with_game(Game::Cs2)
            .with_logo_url("https://example.com/g2.png".to_string());

        assert_eq!(team.ranking, Some(2));
        assert_eq!(team.game, Some(Game::Cs2));
        assert!(team.logo_url.is_some());
    }

    #[test]
    fn test_player_creation() {
        let team = Team::new("Natus Vincere".to_string(), "Ukraine".to_string());
        let player = Player::new("s1mple".to_string(), "Ukraine".to_string(), team.id.clone())
            .with_real_name("Oleksandr Kostyliev".to_string());

        assert_eq!(player.nickname, "s1mple");
        assert_eq!(player.team_id, team.id);
        assert!(player.stats.is_none());
    }

    #[test]
    fn test_player_stats_serialization() {
        let mut stats = BTreeMap::new();
        stats.insert("K/D Ratio".to_string(), StatValue::Text("1.34".to_string()));
        stats.insert("Kills".to_string(), StatValue::Number(1520.0));

        let player = Player::new("ZywOo".to_string(), "France".to_string(), "t1".into())
            .with_stats(stats);

        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stats.unwrap().len(), 2);
    }
}
