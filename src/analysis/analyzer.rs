//! Segment analyzer
//!
//! Runs the full local pipeline for one transcript segment: lexical signals,
//! quote, flag cascade, then aggregation against the prior score.

use super::aggregator::aggregate;
use super::flags::generate_flags;
use super::quote::extract_quote;
use super::signals::SegmentSignals;
use super::types::{AnalysisRequest, AnalysisResult, TranscriptSegment};
use crate::lexicon::Lexicon;
use crate::telemetry;
use std::sync::Arc;

/// Deterministic rule-based analyzer
///
/// Holds only a shared read-only lexicon, so one instance can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct SegmentAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl SegmentAnalyzer {
    /// Create an analyzer over the given lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Lexical signals of a text
    pub fn signals(&self, text: &str) -> SegmentSignals {
        SegmentSignals::extract(&self.lexicon, text)
    }

    /// Analyze one segment given the previous segment's combined score
    pub fn analyze(&self, segment: &TranscriptSegment, prior_score: i32) -> AnalysisResult {
        let signals = self.signals(&segment.text);
        let quote = extract_quote(&self.lexicon, &segment.text);
        let flags = generate_flags(&signals, &segment.speaker, &quote);

        for flag in &flags {
            telemetry::record_flag(flag.flag_type);
        }

        let result = aggregate(&signals, flags, &segment.speaker, prior_score);

        tracing::debug!(
            speaker = %segment.speaker,
            raw_score = signals.raw_score,
            prior_score,
            combined = result.sentiment_score,
            category = %signals.category,
            flags = result.flags.len(),
            "Segment analyzed locally"
        );

        result
    }

    /// Analyze a full orchestration request
    ///
    /// Market context and transcript history do not influence the rule engine;
    /// they are accepted so the local path shares the live provider's input.
    pub fn analyze_request(&self, request: &AnalysisRequest) -> AnalysisResult {
        self.analyze(&request.segment, request.prior_score)
    }
}

impl Default for SegmentAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::standard())
    }
}
