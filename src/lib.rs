//! # Esports Tracker
//!
//! A local esports tournament tracker with derived team and player
//! statistics.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, players, matches, tournaments)
//! - **storage**: Filesystem data lake operations (JSONL)
//! - **calculate**: Statistics and leaderboard computation
//! - **api**: REST API endpoints
//! - **import**: Upstream stats import pipeline
//! - **seed**: Demo dataset generation
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod import;
pub mod models;
pub mod seed;
pub mod storage;

pub use models::*;
