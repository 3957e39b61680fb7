//! Session record types

use crate::analysis::{AnalysisResult, TranscriptSegment};
use crate::provider::DataSource;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One analyzed segment of a call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentOutcome {
    /// Position in the call, starting at 0
    pub index: usize,
    pub segment: TranscriptSegment,
    pub analysis: AnalysisResult,
    pub source: DataSource,
    pub analyzed_at: DateTime<Utc>,
}

/// Roll-up of a session so far
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub ticker: String,
    pub segments: usize,
    pub fallback_segments: usize,
    /// Combined score after the last segment
    pub final_score: i32,
    pub total_flags: usize,
    pub beats: usize,
    pub misses: usize,
}
