//! CLI interface for earnings-signal
//!
//! Provides subcommands for:
//! - `analyze`: Score a transcript segment by segment
//! - `market`: Print the fallback consensus record for a ticker
//! - `config`: Show configuration

mod analyze;
mod market;

pub use analyze::{load_transcript, AnalyzeArgs, OutputFormat};
pub use market::MarketArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "earnings-signal")]
#[command(about = "Deterministic sentiment scoring for earnings-call transcripts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a transcript with the local engine
    Analyze(AnalyzeArgs),
    /// Print fallback market context for a ticker
    Market(MarketArgs),
    /// Show configuration
    Config,
}
