#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    AskInput, AskStrategy, CommandStrategy, DemoStrategy, InfoInput, InfoStrategy, InitStrategy,
    ListStrategy, RulesStrategy, ShowInput, ShowStrategy, VersionStrategy,
};
use receipt_config::{Config, LoggingConfig};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "receipt-memory")]
#[command(about = "Ask questions about your purchase receipts", long_about = None)]
struct Cli {
    /// Config file, must exist when given (default: ~/receipt_memory/config.json)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the example questions (default)
    Demo,
    /// Ask a single question
    Ask {
        /// The question, e.g. "When did I buy that jacket?"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one receipt in full
    Show {
        receipt_id: String,

        /// Print the receipt as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all receipts
    List,
    /// Show the rule table in evaluation order
    Rules,
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Resolve the config to use. An explicit `--config` must exist; the
/// implicit `~/receipt_memory/config.json` falls back to defaults.
fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((Config::load_required(&path)?, Some(path)));
    }
    let path = Config::default_path().ok();
    let config = match &path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    Ok((config, path))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Demo);

    // `init` creates the file, so it runs before any config is read.
    if matches!(command, Commands::Init) {
        init_tracing(&LoggingConfig::default().level)?;
        return InitStrategy.execute(cli.config).await;
    }

    let (config, config_path) = load_config(cli.config)?;
    init_tracing(&config.logging.level)?;
    match &config_path {
        Some(path) if path.exists() => info!("Loaded config from {}", path.display()),
        Some(path) => info!("No config at {}, using defaults", path.display()),
        None => warn!("Cannot find home directory, using default config"),
    }
    debug!("Effective config: {config:?}");

    match command {
        Commands::Demo => DemoStrategy.execute(config).await,
        Commands::Ask { question, json } => {
            AskStrategy
                .execute(AskInput {
                    config,
                    question,
                    json,
                })
                .await
        }
        Commands::Show { receipt_id, json } => {
            ShowStrategy
                .execute(ShowInput {
                    config,
                    receipt_id,
                    json,
                })
                .await
        }
        Commands::List => ListStrategy.execute(config).await,
        Commands::Rules => RulesStrategy.execute(config).await,
        Commands::Info => {
            InfoStrategy
                .execute(InfoInput {
                    config,
                    path: config_path,
                })
                .await
        }
        Commands::Version => VersionStrategy.execute(()).await,
        Commands::Init => InitStrategy.execute(config_path).await,
    }
}
