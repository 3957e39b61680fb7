//! Topical classification
//!
//! Precedence is fixed: a segment mentioning both AI and revenue is AI/Tech.

use super::types::Category;
use crate::lexicon::{Lexicon, LexiconCategory, TextMatcher};

const PRECEDENCE: [(LexiconCategory, Category); 9] = [
    (LexiconCategory::Ai, Category::AiTech),
    (LexiconCategory::Fcf, Category::CashFlow),
    (LexiconCategory::Margin, Category::Margins),
    (LexiconCategory::Revenue, Category::Revenue),
    (LexiconCategory::Eps, Category::Eps),
    (LexiconCategory::Churn, Category::Churn),
    (LexiconCategory::Guidance, Category::Guidance),
    (LexiconCategory::Macro, Category::Macro),
    (LexiconCategory::Capex, Category::CapEx),
];

/// First category in precedence order whose lexicon matches, else `Other`
pub fn classify(lexicon: &Lexicon, matcher: &TextMatcher) -> Category {
    PRECEDENCE
        .iter()
        .find(|(bucket, _)| lexicon.hits(matcher, *bucket))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
