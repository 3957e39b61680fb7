//! Segment analysis module
//!
//! Rule engine that turns one transcript segment into an analysis record

mod aggregator;
mod analyzer;
mod classifier;
mod flags;
mod metrics;
mod quote;
mod scorer;
mod signals;
mod types;

pub use aggregator::{
    aggregate, analyst_takeaway, blend, confidence, estimated_move, key_themes, red_flags,
};
pub use analyzer::SegmentAnalyzer;
pub use classifier::classify;
pub use flags::{generate_flags, FlagDraft, FlagRule, RULES};
pub use self::metrics::{compare_consensus, derive_metrics};
pub use quote::{extract_quote, split_sentences};
pub use scorer::{raw_score, SCORE_BOUND};
pub use signals::SegmentSignals;
pub use types::{
    AnalysisRequest, AnalysisResult, Category, ConsensusComparison, Expectation, Flag, FlagType,
    Impact, Metrics, PriceActionBias, Sentiment, TranscriptSegment, Verdict, MAX_FLAGS,
    MAX_KEY_THEMES, MAX_QUOTE_CHARS, MAX_RED_FLAGS,
};
