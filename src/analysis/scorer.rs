//! Segment sentiment scoring

use crate::lexicon::{Lexicon, LexiconCategory, TextMatcher};

const STRONG_WEIGHT: i64 = 18;
const WEIGHT: i64 = 7;

/// Bound applied to raw and combined scores
pub const SCORE_BOUND: i32 = 100;

/// Raw own-text sentiment of a segment, before blending with the prior score
///
/// `18*strong_bullish + 7*bullish - 7*bearish - 18*strong_bearish`, each term a
/// distinct-phrase count, clamped to [-100, 100].
pub fn raw_score(lexicon: &Lexicon, matcher: &TextMatcher) -> i32 {
    let count = |category| lexicon.count(matcher, category) as i64;

    let score = STRONG_WEIGHT * count(LexiconCategory::StrongBullish)
        + WEIGHT * count(LexiconCategory::Bullish)
        - WEIGHT * count(LexiconCategory::Bearish)
        - STRONG_WEIGHT * count(LexiconCategory::StrongBearish);

    score.clamp(-(SCORE_BOUND as i64), SCORE_BOUND as i64) as i32
}
