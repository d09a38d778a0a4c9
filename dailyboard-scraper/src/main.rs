use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use dailyboard_scraper::config::{load_targets, AppConfig};
use dailyboard_scraper::observability::logging::init_logging;
use dailyboard_scraper::pipeline;

#[derive(Parser)]
#[command(name = "dailyboard")]
#[command(about = "Scrapes weather, transit and vocabulary pages into static HTML")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape all categories and write the four static pages
    Run,
    /// Register weather/train scrape targets from a TOML file
    Seed {
        /// Target file to read
        #[arg(long, default_value = "targets.toml")]
        targets: PathBuf,
    },
    /// Scrape the vocabulary source pages and store the word pairs
    IngestVocab {
        /// Target file to read
        #[arg(long, default_value = "targets.toml")]
        targets: PathBuf,
    },
    /// Remove a registered target by label
    Remove {
        #[arg(long, value_enum)]
        category: TargetCategory,
        /// Place or route label to remove
        #[arg(long)]
        label: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetCategory {
    Weather,
    Train,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenv::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env();

    match cli.command {
        Commands::Run => {
            pipeline::run_all(&config).await?;
            info!("main: all pages written");
        }
        Commands::Seed { targets } => {
            let file = load_targets(&targets)?;
            pipeline::seed_targets(&config, &file)?;
        }
        Commands::IngestVocab { targets } => {
            let file = load_targets(&targets)?;
            pipeline::ingest_vocabulary(&config, &file.english.urls).await?;
        }
        Commands::Remove { category, label } => match category {
            TargetCategory::Weather => pipeline::remove_weather_target(&config, &label)?,
            TargetCategory::Train => pipeline::remove_train_target(&config, &label)?,
        },
    }

    Ok(())
}
