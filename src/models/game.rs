//! Game category tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The esport title a tournament, team, or player is associated with.
///
/// A closed set; serialized with the upstream's exact tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    #[serde(rename = "CS2")]
    Cs2,
    #[serde(rename = "VALORANT")]
    Valorant,
    #[serde(rename = "LOL")]
    Lol,
}

impl Game {
    /// All game categories in display order.
    pub const ALL: [Game; 3] = [Game::Cs2, Game::Valorant, Game::Lol];

    pub fn as_str(&self) -> &'static str {
        match self {
            Game::Cs2 => "CS2",
            Game::Valorant => "VALORANT",
            Game::Lol => "LOL",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CS2" => Ok(Game::Cs2),
            "VALORANT" => Ok(Game::Valorant),
            "LOL" => Ok(Game::Lol),
            _ => Err(UnknownGame(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized game tag.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown game: {0}")]
pub struct UnknownGame(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_round_trip_tags() {
        for game in Game::ALL {
            let json = serde_json::to_string(&game).unwrap();
            assert_eq!(json, format!("\"{}\"", game.as_str()));
            let parsed: Game = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, game);
        }
    }

    #[test]
    fn test_game_from_str_case_insensitive() {
        assert_eq!("cs2".parse::<Game>().unwrap(), Game::Cs2);
        assert_eq!("Valorant".parse::<Game>().unwrap(), Game::Valorant);
        assert_eq!("LOL".parse::<Game>().unwrap(), Game::Lol);
    }

    #[test]
    fn test_game_from_str_unknown() {
        assert!("DOTA2".parse::<Game>().is_err());
    }
}
