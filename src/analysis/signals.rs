//! Per-segment lexical signals
//!
//! Every rule downstream of the matcher reads from this one snapshot, so the
//! text is folded and scanned once per segment.

use super::classifier::classify;
use super::scorer::raw_score;
use super::types::Category;
use crate::lexicon::{Lexicon, LexiconCategory, TextMatcher, HEDGING_TERMS};

/// Boolean and count features of one segment's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSignals {
    /// Clamped own-text score
    pub raw_score: i32,
    pub is_beat: bool,
    pub is_miss: bool,
    pub has_guidance: bool,
    pub has_margin: bool,
    pub has_revenue: bool,
    pub has_eps: bool,
    pub has_ai: bool,
    pub has_churn: bool,
    pub has_macro: bool,
    pub has_fcf: bool,
    pub has_hedge: bool,
    /// Distinct strong-bullish and bullish phrases
    pub bullish_count: usize,
    /// Distinct strong-bearish and bearish phrases
    pub bearish_count: usize,
    /// Classifier label for the whole text
    pub category: Category,
}

impl SegmentSignals {
    /// Scan `text` against `lexicon`
    pub fn extract(lexicon: &Lexicon, text: &str) -> Self {
        let matcher = TextMatcher::new(text);
        let hit = |category| lexicon.hits(&matcher, category);

        Self {
            raw_score: raw_score(lexicon, &matcher),
            is_beat: hit(LexiconCategory::Beat),
            is_miss: hit(LexiconCategory::Miss),
            has_guidance: hit(LexiconCategory::Guidance),
            has_margin: hit(LexiconCategory::Margin),
            has_revenue: hit(LexiconCategory::Revenue),
            has_eps: hit(LexiconCategory::Eps),
            has_ai: hit(LexiconCategory::Ai),
            has_churn: hit(LexiconCategory::Churn),
            has_macro: hit(LexiconCategory::Macro),
            has_fcf: hit(LexiconCategory::Fcf),
            has_hedge: matcher.has_any(HEDGING_TERMS),
            bullish_count: lexicon.count_across(
                &matcher,
                &[LexiconCategory::StrongBullish, LexiconCategory::Bullish],
            ),
            bearish_count: lexicon.count_across(
                &matcher,
                &[LexiconCategory::StrongBearish, LexiconCategory::Bearish],
            ),
            category: classify(lexicon, &matcher),
        }
    }
}
