use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use play_tracker::api::state::AppState;
use play_tracker::config::AppConfig;
use play_tracker::stats::{self, Aggregation};
use play_tracker::storage::{PlayStore, StorageConfig};

#[derive(Parser)]
#[command(name = "play-tracker")]
#[command(about = "Basketball play tracker with scoring analytics")]
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

    /// Print scoring averages for the recorded plays
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting play-tracker v{}", env!("CARGO_PKG_VERSION"));

    let config_path = PathBuf::from(&cli.config);
    let mut config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        tracing::warn!("No config file at {:?}, using defaults", config_path);
        AppConfig::default()
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = PathBuf::from(data_dir);
    }

    let storage = StorageConfig::new(config.data_dir.clone());
    let store = PlayStore::for_config(&storage);

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(store, config.team);
            let app = play_tracker::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Dashboard API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Summary => {
            let plays = store.read_all()?;
            println!("=== Play Summary ({} plays) ===", plays.len());

            let by_action = stats::averages_by_action(&plays, &config.team.action_vocabulary());
            print_table("Points per Action", &by_action);

            let by_player = stats::averages_by_player(&plays, &config.team.roster);
            print_table("Points per Player", &by_player);

            let by_situation = stats::averages_by_situation(&plays, &config.team.situations);
            print_table("Points per Situation", &by_situation);

            if !by_action.invalid_plays.is_empty() {
                println!("\nPlays with unrecognized results:");
                for invalid in &by_action.invalid_plays {
                    println!("  - play {}: {:?}", invalid.play_number, invalid.result);
                }
            }
        }
    }

    Ok(())
}

fn print_table(title: &str, aggregation: &Aggregation) {
    println!("\n{}:", title);
    if aggregation.averages.is_empty() {
        println!("  (nothing configured)");
        return;
    }
    for (key, mean) in &aggregation.averages {
        println!("  {:<16} {}", key, mean);
    }
}
