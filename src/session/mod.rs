//! Earnings-call session
//!
//! Drives segments through the live analysis source in call order, threading
//! the combined score from one segment into the next. Whenever the live
//! source fails or returns a record outside its contract, the local rule
//! engine answers instead and the record shape does not change.

mod transcript;
mod types;

pub use transcript::parse_transcript;
pub use types::{SegmentOutcome, SessionSummary};

use crate::analysis::{AnalysisRequest, AnalysisResult, FlagType, SegmentAnalyzer, TranscriptSegment};
use crate::market::{build_market_fallback, MarketContext};
use crate::provider::{
    validate_analysis, AnalysisSource, DataSource, MarketDataSource, Sourced,
};
use crate::telemetry::{self, FallbackKind};
use chrono::Utc;
use uuid::Uuid;

/// Default characters of transcript history handed to the live source
pub const DEFAULT_CONTEXT_CHARS: usize = 600;

/// Fetch market context, substituting the static fallback on any failure
pub async fn resolve_market<S>(source: &S, ticker: &str) -> Sourced<MarketContext>
where
    S: MarketDataSource + ?Sized,
{
    match source.fetch_market(ticker).await {
        Ok(market) => Sourced::live(market),
        Err(e) => {
            tracing::warn!(ticker, error = %e, "Market provider failed, using fallback");
            telemetry::record_fallback(FallbackKind::Market);
            Sourced::fallback(build_market_fallback(ticker))
        }
    }
}

/// State of one earnings call being analyzed
pub struct CallSession {
    id: Uuid,
    analyzer: SegmentAnalyzer,
    market: MarketContext,
    transcript: String,
    context_chars: usize,
    prior_score: i32,
    outcomes: Vec<SegmentOutcome>,
}

impl CallSession {
    /// Start a session for a call with the given market context
    pub fn new(analyzer: SegmentAnalyzer, market: MarketContext) -> Self {
        Self {
            id: Uuid::new_v4(),
            analyzer,
            market,
            transcript: String::new(),
            context_chars: DEFAULT_CONTEXT_CHARS,
            prior_score: 0,
            outcomes: Vec::new(),
        }
    }

    /// Limit on transcript history passed to the live source
    pub fn with_context_chars(mut self, context_chars: usize) -> Self {
        self.context_chars = context_chars;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn market(&self) -> &MarketContext {
        &self.market
    }

    /// Score the next segment will be blended with
    pub fn prior_score(&self) -> i32 {
        self.prior_score
    }

    pub fn outcomes(&self) -> &[SegmentOutcome] {
        &self.outcomes
    }

    /// Tail of the transcript so far, at most `context_chars` characters
    pub fn transcript_context(&self) -> &str {
        let total = self.transcript.chars().count();
        if total <= self.context_chars {
            return &self.transcript;
        }
        let skip = total - self.context_chars;
        match self.transcript.char_indices().nth(skip) {
            Some((offset, _)) => &self.transcript[offset..],
            None => "",
        }
    }

    fn request(&self, segment: TranscriptSegment) -> AnalysisRequest {
        AnalysisRequest {
            segment,
            transcript: self.transcript_context().to_string(),
            market: self.market.clone(),
            prior_score: self.prior_score,
        }
    }

    /// Analyze the next segment through `source`, falling back locally
    pub async fn analyze<S>(
        &mut self,
        source: &S,
        segment: TranscriptSegment,
    ) -> Sourced<AnalysisResult>
    where
        S: AnalysisSource + ?Sized,
    {
        let request = self.request(segment);

        let live = match source.analyze(&request).await {
            Ok(result) => validate_analysis(&result).map(|_| result),
            Err(e) => Err(e),
        };

        let sourced = match live {
            Ok(result) => Sourced::live(result),
            Err(e) => {
                tracing::warn!(
                    session_id = %self.id,
                    speaker = %request.segment.speaker,
                    error = %e,
                    "Analysis provider failed, using local engine"
                );
                telemetry::record_fallback(FallbackKind::Analysis);
                Sourced::fallback(self.analyzer.analyze_request(&request))
            }
        };

        self.record(request.segment, &sourced);
        sourced
    }

    /// Analyze the next segment with the local engine only
    pub fn analyze_local(&mut self, segment: TranscriptSegment) -> AnalysisResult {
        let request = self.request(segment);
        let sourced = Sourced::fallback(self.analyzer.analyze_request(&request));
        self.record(request.segment, &sourced);
        sourced.value
    }

    fn record(&mut self, segment: TranscriptSegment, sourced: &Sourced<AnalysisResult>) {
        telemetry::record_segment(sourced.source);

        self.prior_score = sourced.value.sentiment_score;
        self.transcript.push_str(&segment.speaker);
        self.transcript.push_str(": ");
        self.transcript.push_str(&segment.text);
        self.transcript.push('\n');

        tracing::info!(
            session_id = %self.id,
            index = self.outcomes.len(),
            source = sourced.source.as_str(),
            score = sourced.value.sentiment_score,
            sentiment = ?sourced.value.overall_sentiment,
            "Segment recorded"
        );

        self.outcomes.push(SegmentOutcome {
            index: self.outcomes.len(),
            segment,
            analysis: sourced.value.clone(),
            source: sourced.source,
            analyzed_at: Utc::now(),
        });
    }

    /// Totals over every segment recorded so far
    pub fn summary(&self) -> SessionSummary {
        let flags = || self.outcomes.iter().flat_map(|o| o.analysis.flags.iter());
        SessionSummary {
            ticker: self.market.ticker.clone(),
            segments: self.outcomes.len(),
            fallback_segments: self
                .outcomes
                .iter()
                .filter(|o| o.source == DataSource::Fallback)
                .count(),
            final_score: self.prior_score,
            total_flags: flags().count(),
            beats: flags().filter(|f| f.flag_type == FlagType::Beat).count(),
            misses: flags().filter(|f| f.flag_type == FlagType::Miss).count(),
        }
    }
}
