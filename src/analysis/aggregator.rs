//! Score aggregation
//!
//! Blends the previous segment's combined score with this segment's raw score
//! and assembles the final record. Everything here is a pure function of its
//! inputs.

use super::scorer::SCORE_BOUND;
use super::signals::SegmentSignals;
use super::types::{
    AnalysisResult, Expectation, Flag, FlagType, PriceActionBias, Sentiment, MAX_KEY_THEMES,
    MAX_RED_FLAGS,
};
use super::{compare_consensus, derive_metrics};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const PRIOR_WEIGHT: Decimal = dec!(0.35);
const RAW_WEIGHT: Decimal = dec!(0.65);

const SENTIMENT_THRESHOLD: i32 = 15;
const STRONG_BIAS_THRESHOLD: i32 = 40;
const MOVE_LARGE: i32 = 40;
const MOVE_MEDIUM: i32 = 20;

const CONFIDENCE_BASE: f64 = 55.0;
const CONFIDENCE_MIN: f64 = 40.0;
const CONFIDENCE_MAX: f64 = 92.0;

/// Momentum blend: `round(prior * 0.35 + raw * 0.65)`
///
/// Exact decimal arithmetic, half-way cases rounded away from zero, result
/// clamped to [-100, 100].
pub fn blend(prior_score: i32, raw_score: i32) -> i32 {
    let bound = Decimal::from(SCORE_BOUND);
    let combined = Decimal::from(prior_score) * PRIOR_WEIGHT + Decimal::from(raw_score) * RAW_WEIGHT;

    combined
        .clamp(-bound, bound)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(0)
}

impl Sentiment {
    /// Direction implied by a combined score
    pub fn from_score(score: i32) -> Self {
        if score > SENTIMENT_THRESHOLD {
            Self::Bullish
        } else if score < -SENTIMENT_THRESHOLD {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }
}

impl PriceActionBias {
    /// Stance implied by a combined score
    pub fn from_score(score: i32) -> Self {
        if score > STRONG_BIAS_THRESHOLD {
            Self::StrongBuy
        } else if score > SENTIMENT_THRESHOLD {
            Self::Buy
        } else if score < -STRONG_BIAS_THRESHOLD {
            Self::StrongSell
        } else if score < -SENTIMENT_THRESHOLD {
            Self::Sell
        } else {
            Self::Hold
        }
    }
}

impl Expectation {
    /// BEAT if any flag is a beat, else MISS if any is a miss
    pub fn from_flags(flags: &[Flag]) -> Self {
        let any = |t: FlagType| flags.iter().any(|f| f.flag_type == t);
        if any(FlagType::Beat) {
            Self::Beat
        } else if any(FlagType::Miss) {
            Self::Miss
        } else {
            Self::Inline
        }
    }
}

/// Banded price-move estimate for a combined score
pub fn estimated_move(score: i32) -> &'static str {
    if score > MOVE_LARGE {
        "+5-8%"
    } else if score > MOVE_MEDIUM {
        "+2-5%"
    } else if score < -MOVE_LARGE {
        "-5-8%"
    } else if score < -MOVE_MEDIUM {
        "-2-5%"
    } else {
        "±1-2%"
    }
}

/// `55 + |raw| / 2`, clamped to [40, 92]
pub fn confidence(raw_score: i32) -> f64 {
    (CONFIDENCE_BASE + f64::from(raw_score).abs() / 2.0).clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
}

fn collect_capped(candidates: &[Option<&str>], cap: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(cap);
    for candidate in candidates.iter().flatten() {
        if out.len() == cap {
            break;
        }
        if !out.iter().any(|existing| existing == candidate) {
            out.push(candidate.to_string());
        }
    }
    out
}

/// Ordered, deduplicated themes, at most four
pub fn key_themes(s: &SegmentSignals) -> Vec<String> {
    let guidance = if s.is_beat {
        "Guidance Raise"
    } else if s.is_miss {
        "Guidance Cut"
    } else {
        "Guidance In-Line"
    };

    collect_capped(
        &[
            s.has_ai.then_some("AI/Automation"),
            (s.has_revenue && s.is_beat).then_some("Revenue Beat"),
            s.has_margin.then_some("Margin Focus"),
            s.has_guidance.then_some(guidance),
            s.has_macro.then_some("Macro Uncertainty"),
        ],
        MAX_KEY_THEMES,
    )
}

/// Ordered, deduplicated risks, at most three
pub fn red_flags(s: &SegmentSignals) -> Vec<String> {
    collect_capped(
        &[
            s.has_churn.then_some("Elevated churn"),
            (s.has_fcf && s.is_miss).then_some("FCF miss"),
            (s.has_margin && s.is_miss).then_some("Margin compression"),
            (s.has_guidance && s.is_miss).then_some("Guidance cut"),
            (s.has_macro && s.has_hedge).then_some("Macro headwind"),
        ],
        MAX_RED_FLAGS,
    )
}

/// One-paragraph summary chosen by overall sentiment
pub fn analyst_takeaway(sentiment: Sentiment, speaker: &str, flags: &[Flag]) -> String {
    match sentiment {
        Sentiment::Bullish => {
            let mut text = format!(
                "{speaker} commentary signals outperformance; constructive tone supports the bull thesis."
            );
            if let Some(first) = flags.first() {
                text.push(' ');
                text.push_str(&first.insight);
            }
            text
        }
        Sentiment::Bearish => format!(
            "{speaker} remarks introduce downside risk. Monitor closely for estimate revision risk."
        ),
        Sentiment::Neutral => format!(
            "{speaker} tone is measured with mixed signals. No clear directional bias detected."
        ),
    }
}

/// Assemble the result record for one segment
pub fn aggregate(
    signals: &SegmentSignals,
    flags: Vec<Flag>,
    speaker: &str,
    prior_score: i32,
) -> AnalysisResult {
    let combined = blend(prior_score, signals.raw_score);
    let overall_sentiment = Sentiment::from_score(combined);

    AnalysisResult {
        overall_sentiment,
        sentiment_score: combined,
        vs_expectations: Expectation::from_flags(&flags),
        confidence: confidence(signals.raw_score),
        price_action_bias: PriceActionBias::from_score(combined),
        estimated_move: estimated_move(combined).to_string(),
        metrics: derive_metrics(signals),
        vs_consensus: compare_consensus(signals),
        key_themes: key_themes(signals),
        red_flags: red_flags(signals),
        analyst_takeaway: analyst_takeaway(overall_sentiment, speaker, &flags),
        flags,
    }
}
