//! Upstream stats import pipeline.
//!
//! Pulls the current team ranking from a JSON stats API and materializes
//! the teams (with rosters and stat tables) into the data lake. Calls are
//! strictly sequential with a fixed delay between them so the upstream
//! never sees a burst, and a failure on one team is logged and skipped
//! rather than aborting the whole run.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::config::UpstreamConfig;
use crate::models::{Player, StatValue, Team};
use crate::storage::{EntityType, JsonlWriter, StorageConfig, StorageError};

/// Errors that can occur during an import run.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Upstream disabled in configuration")]
    Disabled,
}

/// One row of the upstream world ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct RankedTeam {
    pub name: String,
    pub country: String,
    pub ranking: u32,
}

/// Full team payload from the upstream team endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamTeam {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub players: Vec<UpstreamPlayer>,
}

/// Roster entry within an upstream team payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamPlayer {
    pub nickname: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub stats: Option<BTreeMap<String, StatValue>>,
}

/// A source of upstream team data.
///
/// The HTTP client lives behind this trait so the pipeline can be tested
/// against a canned source.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetch the world ranking, best-ranked first.
    async fn team_ranking(&self) -> Result<Vec<RankedTeam>, ImportError>;

    /// Fetch one team's full details by name.
    async fn team_details(&self, name: &str) -> Result<UpstreamTeam, ImportError>;
}

/// JSON API client for the upstream stats source.
pub struct HttpStatsSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpStatsSource {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ImportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        let mut base_url = Url::parse(&config.base_url)?;
        // A trailing slash keeps Url::join from eating the last segment.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl StatsSource for HttpStatsSource {
    async fn team_ranking(&self) -> Result<Vec<RankedTeam>, ImportError> {
        let url = self.base_url.join("ranking")?;
        let ranking = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(ranking)
    }

    async fn team_details(&self, name: &str) -> Result<UpstreamTeam, ImportError> {
        let url = self.base_url.join(&format!("teams/{}", name))?;
        let team = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(team)
    }
}

/// Outcome counts of one import run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub failed: usize,
}

fn build_team(ranked: &RankedTeam, upstream: UpstreamTeam) -> Team {
    let mut team =
        Team::new(upstream.name, upstream.country).with_ranking(ranked.ranking);
    team.logo_url = upstream.logo_url;
    team.players = upstream
        .players
        .into_iter()
        .map(|p| {
            let country = p.country.unwrap_or_else(|| team.country.clone());
            let mut player = Player::new(p.nickname, country, team.id.clone());
            player.real_name = p.real_name;
            player.role = p.role;
            player.stats = p.stats;
            player
        })
        .collect();
    team
}

/// Run an import: fetch up to `limit` ranked teams and write them to the
/// data lake, replacing the existing team file.
///
/// Teams that fail to fetch are counted and skipped. The ranking call
/// itself failing aborts the run, since there is nothing to iterate.
pub async fn run_import(
    source: &dyn StatsSource,
    storage: &StorageConfig,
    rate_limit_ms: u64,
    limit: usize,
) -> Result<ImportSummary, ImportError> {
    let ranking = source.team_ranking().await?;
    info!(
        "Fetched ranking with {} teams, importing up to {}",
        ranking.len(),
        limit
    );

    let mut teams = Vec::new();
    let mut summary = ImportSummary::default();

    for ranked in ranking.iter().take(limit) {
        // Fixed delay before every detail call, including the first.
        tokio::time::sleep(Duration::from_millis(rate_limit_ms)).await;

        match source.team_details(&ranked.name).await {
            Ok(upstream) => {
                teams.push(build_team(ranked, upstream));
                summary.imported += 1;
            }
            Err(e) => {
                warn!("Failed to import team {}: {}", ranked.name, e);
                summary.failed += 1;
            }
        }
    }

    JsonlWriter::for_entity(storage, EntityType::Team).write_all(&teams)?;
    info!(
        "Import finished: {} imported, {} failed",
        summary.imported, summary.failed
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonlReader;

    struct CannedSource {
        ranking: Vec<RankedTeam>,
        fail_for: Option<String>,
    }

    #[async_trait]
    impl StatsSource for CannedSource {
        async fn team_ranking(&self) -> Result<Vec<RankedTeam>, ImportError> {
            Ok(self.ranking.clone())
        }

        async fn team_details(&self, name: &str) -> Result<UpstreamTeam, ImportError> {
            if self.fail_for.as_deref() == Some(name) {
                return Err(ImportError::Url(url::ParseError::EmptyHost));
            }
            Ok(UpstreamTeam {
                name: name.to_string(),
                country: "Europe".to_string(),
                logo_url: None,
                players: vec![UpstreamPlayer {
                    nickname: format!("{}-star", name),
                    real_name: None,
                    country: None,
                    role: Some("Rifler".to_string()),
                    stats: None,
                }],
            })
        }
    }

    fn ranked(name: &str, ranking: u32) -> RankedTeam {
        RankedTeam {
            name: name.to_string(),
            country: "Europe".to_string(),
            ranking,
        }
    }

    #[tokio::test]
    async fn test_import_writes_teams() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = StorageConfig::new(tmp.path().to_path_buf());
        let source = CannedSource {
            ranking: vec![ranked("NAVI", 1), ranked("FaZe", 2)],
            fail_for: None,
        };

        let summary = run_import(&source, &storage, 0, 10).await.unwrap();
        assert_eq!(summary, ImportSummary { imported: 2, failed: 0 });

        let teams: Vec<Team> = JsonlReader::for_entity(&storage, EntityType::Team)
            .read_all()
            .unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name, "NAVI");
        assert_eq!(teams[0].ranking, Some(1));
        assert_eq!(teams[0].players[0].nickname, "NAVI-star");
        // Roster country falls back to the team's.
        assert_eq!(teams[0].players[0].country, "Europe");
    }

    #[tokio::test]
    async fn test_import_respects_limit() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = StorageConfig::new(tmp.path().to_path_buf());
        let source = CannedSource {
            ranking: (1..=5).map(|i| ranked(&format!("T{i}"), i)).collect(),
            fail_for: None,
        };

        let summary = run_import(&source, &storage, 0, 3).await.unwrap();
        assert_eq!(summary.imported, 3);
    }

    #[tokio::test]
    async fn test_import_skips_failing_team() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = StorageConfig::new(tmp.path().to_path_buf());
        let source = CannedSource {
            ranking: vec![ranked("NAVI", 1), ranked("Broken", 2), ranked("FaZe", 3)],
            fail_for: Some("Broken".to_string()),
        };

        let summary = run_import(&source, &storage, 0, 10).await.unwrap();
        assert_eq!(summary, ImportSummary { imported: 2, failed: 1 });

        let teams: Vec<Team> = JsonlReader::for_entity(&storage, EntityType::Team)
            .read_all()
            .unwrap();
        assert_eq!(teams.len(), 2);
    }

    #[test]
    fn test_http_source_normalizes_base_url() {
        let config = UpstreamConfig {
            base_url: "https://stats.example.com/api".to_string(),
            ..UpstreamConfig::default()
        };
        let source = HttpStatsSource::new(&config).unwrap();
        assert_eq!(
            source.base_url.join("ranking").unwrap().as_str(),
            "https://stats.example.com/api/ranking"
        );
    }

    #[test]
    fn test_upstream_team_deserialization_defaults() {
        let team: UpstreamTeam = serde_json::from_str(
            r#"{"name": "NAVI", "country": "Ukraine"}"#,
        )
        .unwrap();
        assert!(team.players.is_empty());
        assert!(team.logo_url.is_none());
    }
}
