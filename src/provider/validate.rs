//! Contract checks for provider-supplied analysis records
//!
//! Enum vocabularies are enforced by deserialization; this covers the
//! numeric ranges and list caps the local engine guarantees by construction.

use super::ProviderError;
use crate::analysis::{AnalysisResult, MAX_FLAGS, MAX_KEY_THEMES, MAX_QUOTE_CHARS, MAX_RED_FLAGS};
use std::fmt::Display;
use std::ops::RangeInclusive;

fn check<T: PartialOrd + Display>(
    field: &'static str,
    value: T,
    range: RangeInclusive<T>,
) -> Result<(), ProviderError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ProviderError::OutOfRange {
            field,
            value: value.to_string(),
        })
    }
}

/// Reject a record that a downstream consumer could not rely on
pub fn validate_analysis(result: &AnalysisResult) -> Result<(), ProviderError> {
    check("sentimentScore", result.sentiment_score, -100..=100)?;
    check("confidence", result.confidence, 0.0..=100.0)?;
    check("flags", result.flags.len(), 0..=MAX_FLAGS)?;
    check("keyThemes", result.key_themes.len(), 0..=MAX_KEY_THEMES)?;
    check("redFlags", result.red_flags.len(), 0..=MAX_RED_FLAGS)?;

    let metrics = &result.metrics;
    check("metrics.guidanceQuality", metrics.guidance_quality, 0..=100)?;
    check("metrics.managementCredibility", metrics.management_credibility, 0..=100)?;
    check("metrics.transparencyScore", metrics.transparency_score, 0..=100)?;
    check("metrics.forwardMomentum", metrics.forward_momentum, -100..=100)?;
    check("metrics.riskSignals", metrics.risk_signals, 0..=100)?;

    for flag in &result.flags {
        check("flags.quote", flag.quote.chars().count(), 0..=MAX_QUOTE_CHARS)?;
    }

    Ok(())
}
