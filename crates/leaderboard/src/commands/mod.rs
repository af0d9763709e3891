use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use leaderboard_core::config::{Config, get_config};
use leaderboard_core::loader::DataLoader;
use leaderboard_core::table::Leaderboard;

use crate::log::setup_logging;
use crate::ux::{LoadingSpinner, format_load_summary};

pub mod build;
pub mod show;

/// Leaderboard - compare language models on code repair benchmarks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file, defaults to leaderboard.yml in the config directory.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to the data directory.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the results and write the leaderboard page.
    Build {
        /// Output HTML file.
        #[arg(short, long, default_value = "index.html")]
        output: PathBuf,
        /// Results URL or directory, overrides the config.
        #[arg(short, long)]
        results: Option<String>,
    },
    /// Load the results and print the leaderboard.
    Show {
        /// Results URL or directory, overrides the config.
        #[arg(short, long)]
        results: Option<String>,
        /// Column to sort by, e.g. `defects4j_exact_match@1` or `total_cost`.
        #[arg(short, long)]
        sort: Option<String>,
        /// Sort in descending order.
        #[arg(long, requires = "sort")]
        desc: bool,
    },
}

/// Loads every configured result and assembles the leaderboard.
///
/// Individual results that fail to load are logged and summarized on stderr;
/// they never fail the command.
pub async fn load_leaderboard(mut config: Config, results: Option<String>) -> Result<Leaderboard> {
    if let Some(results) = results {
        config.results = results;
    }
    let loader = DataLoader::from_config(&config)
        .with_context(|| format!("Invalid results location '{}'", config.results))?;

    let spinner = LoadingSpinner::start(&config.results);
    let outcome = loader.load().await;
    spinner.finish();

    eprintln!(
        "{}",
        format_load_summary(outcome.rows.len(), &outcome.failures)
    );
    Ok(Leaderboard::new(config, outcome.rows))
}

pub async fn run_app() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to set up logging")?;

    let config = get_config(cli.config.clone()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Build { output, results } => build::execute(config, results, &output).await,
        Commands::Show {
            results,
            sort,
            desc,
        } => show::execute(config, results, sort.as_deref(), desc).await,
    }
}
