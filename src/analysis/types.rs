//! Analysis record types
//!
//! Field names and enum vocabularies serialize to the camelCase /
//! SCREAMING_SNAKE_CASE shape consumed downstream, so a locally computed
//! record is interchangeable with one produced by a live provider.

use crate::market::MarketContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum characters in a flag quote
pub const MAX_QUOTE_CHARS: usize = 110;
/// Maximum flags one segment can produce
pub const MAX_FLAGS: usize = 6;
/// Maximum key themes in a result
pub const MAX_KEY_THEMES: usize = 4;
/// Maximum red flags in a result
pub const MAX_RED_FLAGS: usize = 3;

/// One speaker-attributed slice of an earnings call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub speaker: String,
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// Everything the orchestration layer supplies for one analysis call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub segment: TranscriptSegment,
    /// Recent transcript text, read-only context
    pub transcript: String,
    pub market: MarketContext,
    /// Combined score of the previous segment, 0 at the start of a call
    pub prior_score: i32,
}

/// Kind of observation a flag records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagType {
    Beat,
    Miss,
    Positive,
    Warning,
    Hedge,
    Bullish,
    Bearish,
}

impl FlagType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beat => "BEAT",
            Self::Miss => "MISS",
            Self::Positive => "POSITIVE",
            Self::Warning => "WARNING",
            Self::Hedge => "HEDGE",
            Self::Bullish => "BULLISH",
            Self::Bearish => "BEARISH",
        }
    }
}

/// Expected market impact of a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// Topical label of a flag or segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI/Tech")]
    AiTech,
    #[serde(rename = "Cash Flow")]
    CashFlow,
    Margins,
    Revenue,
    #[serde(rename = "EPS")]
    Eps,
    Churn,
    Guidance,
    Macro,
    CapEx,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AiTech => "AI/Tech",
            Self::CashFlow => "Cash Flow",
            Self::Margins => "Margins",
            Self::Revenue => "Revenue",
            Self::Eps => "EPS",
            Self::Churn => "Churn",
            Self::Guidance => "Guidance",
            Self::Macro => "Macro",
            Self::CapEx => "CapEx",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed observation extracted from a segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    pub speaker: String,
    pub quote: String,
    pub insight: String,
    pub impact: Impact,
    pub category: Category,
}

/// Auxiliary bounded scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// One of 25, 50, 75
    pub guidance_quality: i32,
    /// 20..=95
    pub management_credibility: i32,
    /// 20..=95
    pub transparency_score: i32,
    /// -100..=100
    pub forward_momentum: i32,
    /// 5..=95
    pub risk_signals: i32,
}

/// Outcome of comparing one topic against consensus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Beat,
    Miss,
    Inline,
    Unknown,
}

/// Per-topic consensus verdicts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusComparison {
    pub eps: Verdict,
    pub revenue: Verdict,
    pub guidance: Verdict,
    pub margins: Verdict,
}

/// Overall direction of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

/// Segment result relative to expectations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Expectation {
    Beat,
    Miss,
    Inline,
}

/// Suggested price-action stance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceActionBias {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

/// Final per-segment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_sentiment: Sentiment,
    /// Combined score, -100..=100
    pub sentiment_score: i32,
    pub vs_expectations: Expectation,
    /// 40..=92, may be a half-integer
    pub confidence: f64,
    pub price_action_bias: PriceActionBias,
    pub estimated_move: String,
    pub flags: Vec<Flag>,
    pub metrics: Metrics,
    pub vs_consensus: ConsensusComparison,
    pub key_themes: Vec<String>,
    pub red_flags: Vec<String>,
    pub analyst_takeaway: String,
}
