use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use esports_tracker::config::AppConfig;
use esports_tracker::import::{run_import, HttpStatsSource, ImportError};
use esports_tracker::storage::StorageConfig;
use esports_tracker::{api, seed};

#[derive(Parser)]
#[command(name = "esports-tracker")]
#[command(about = "Esports tournament tracker with derived statistics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Write the demo dataset to the data directory
    Seed,

    /// Import teams from the upstream stats API
    Import {
        /// Max ranked teams to import
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn load_config(cli: &Cli) -> AppConfig {
    let path = std::path::PathBuf::from(&cli.config);
    let mut config = if path.exists() {
        match AppConfig::from_file(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}, using defaults", cli.config, e);
                AppConfig::default()
            }
        }
    } else {
        AppConfig::default()
    };

    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = std::path::PathBuf::from(data_dir);
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting esports-tracker v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli);
    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Serve { host, port } => {
            let state = api::state::AppState {
                storage: Arc::new(storage),
            };
            let app = api::build_router(state);
            let addr = format!(
                "{}:{}",
                host.unwrap_or(config.server.host),
                port.unwrap_or(config.server.port)
            );
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("API listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Seed => {
            let summary = seed::run(&storage)?;
            tracing::info!(
                "Seeded {} teams, {} tournaments, {} matches into {:?}",
                summary.teams,
                summary.tournaments,
                summary.matches,
                config.data_dir
            );
        }
        Commands::Import { limit } => {
            if !config.upstream.enabled {
                return Err(ImportError::Disabled.into());
            }
            let source = HttpStatsSource::new(&config.upstream)?;
            let summary = run_import(
                &source,
                &storage,
                config.upstream.rate_limit_ms,
                limit.unwrap_or(config.upstream.import_limit),
            )
            .await?;
            tracing::info!(
                "Import done: {} imported, {} failed",
                summary.imported,
                summary.failed
            );
        }
    }

    Ok(())
}
