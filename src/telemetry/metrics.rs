//! Counters
//!
//! Recorded through the `metrics` facade; they are no-ops until the host
//! application installs a recorder.

use crate::analysis::FlagType;
use crate::provider::DataSource;

/// Which provider call fell back to local data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    /// Market consensus lookup
    Market,
    /// Segment analysis
    Analysis,
}

impl FallbackKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Analysis => "analysis",
        }
    }
}

/// Count one analyzed segment by origin
pub fn record_segment(source: DataSource) {
    metrics::counter!("earnings_signal_segments_analyzed_total", "source" => source.as_str())
        .increment(1);
}

/// Count one substitution of fallback data
pub fn record_fallback(kind: FallbackKind) {
    metrics::counter!("earnings_signal_fallbacks_total", "kind" => kind.as_str()).increment(1);
}

/// Count one emitted flag by type
pub fn record_flag(flag_type: FlagType) {
    metrics::counter!("earnings_signal_flags_total", "type" => flag_type.as_str()).increment(1);
}
