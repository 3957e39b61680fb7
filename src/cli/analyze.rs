//! Analyze command implementation

use crate::analysis::{SegmentAnalyzer, TranscriptSegment};
use crate::config::Config;
use crate::market::MarketContext;
use crate::provider::{OfflineProvider, Sourced};
use crate::session::{parse_transcript, resolve_market, CallSession, SegmentOutcome, SessionSummary};
use anyhow::Context;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Transcript file: a JSON array of {speaker, text} or `Speaker: text` lines
    #[arg(short, long)]
    pub transcript: PathBuf,

    /// Ticker the call belongs to
    #[arg(long)]
    pub ticker: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    market: &'a Sourced<MarketContext>,
    segments: &'a [SegmentOutcome],
    summary: SessionSummary,
}

/// Read segments from a JSON or plain-text transcript file
pub fn load_transcript(path: &Path) -> anyhow::Result<Vec<TranscriptSegment>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid transcript JSON in {}", path.display()))
    } else {
        Ok(parse_transcript(&content))
    }
}

impl AnalyzeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let segments = load_transcript(&self.transcript)?;
        tracing::info!(
            segments = segments.len(),
            ticker = %self.ticker,
            "Analyzing transcript {:?}",
            self.transcript
        );

        let analyzer = SegmentAnalyzer::new(config.engine.lexicon()?);
        let provider = OfflineProvider;
        let market = resolve_market(&provider, &self.ticker).await;

        let mut session = CallSession::new(analyzer, market.value.clone())
            .with_context_chars(config.engine.context_chars);
        for segment in segments {
            session.analyze(&provider, segment).await;
        }

        match self.format {
            OutputFormat::Json => {
                let report = Report {
                    market: &market,
                    segments: session.outcomes(),
                    summary: session.summary(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Table => print_table(&session),
        }

        Ok(())
    }
}

fn print_table(session: &CallSession) {
    println!(
        "{:>3}  {:<12} {:>6} {:<8} {:<11} {:<7} FLAGS",
        "#", "SPEAKER", "SCORE", "TONE", "BIAS", "MOVE"
    );
    for outcome in session.outcomes() {
        let analysis = &outcome.analysis;
        let flags = analysis
            .flags
            .iter()
            .map(|f| format!("{}:{}", f.flag_type.as_str(), f.category))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:>3}  {:<12} {:>6} {:<8} {:<11} {:<7} {}",
            outcome.index,
            outcome.segment.speaker,
            analysis.sentiment_score,
            format!("{:?}", analysis.overall_sentiment).to_uppercase(),
            format!("{:?}", analysis.price_action_bias),
            analysis.estimated_move,
            flags
        );
    }

    let summary = session.summary();
    println!();
    println!(
        "{}: {} segments, final score {}, {} flags ({} beat, {} miss)",
        summary.ticker,
        summary.segments,
        summary.final_score,
        summary.total_flags,
        summary.beats,
        summary.misses
    );
}
