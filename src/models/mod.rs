//! Core data models for the tracker.

mod game;
mod ids;
mod matches;
mod stats;
mod team;
mod tournament;

pub use game::*;
pub use ids::*;
pub use matches::*;
pub use stats::*;
pub use team::*;
pub use tournament::*;
