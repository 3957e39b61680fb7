//! Flag generation
//!
//! An ordered cascade of rules over one accumulator. Rules run strictly in
//! sequence; the last three only fire while the accumulator is still empty,
//! so their relative order decides which of them wins.

use super::signals::SegmentSignals;
use super::types::{Category, Flag, FlagType, Impact};

/// Flag contents decided by a rule; speaker and quote are shared
#[derive(Debug, Clone, PartialEq)]
pub struct FlagDraft {
    pub flag_type: FlagType,
    pub insight: String,
    pub impact: Impact,
    pub category: Category,
}

/// One step of the cascade
pub struct FlagRule {
    pub name: &'static str,
    /// Returns a draft when the rule fires, given the flags emitted so far
    pub fire: fn(&SegmentSignals, &[Flag]) -> Option<FlagDraft>,
}

/// The cascade, in evaluation order
pub const RULES: [FlagRule; 8] = [
    FlagRule {
        name: "beat",
        fire: beat_rule,
    },
    FlagRule {
        name: "miss",
        fire: miss_rule,
    },
    FlagRule {
        name: "ai_strength",
        fire: ai_strength_rule,
    },
    FlagRule {
        name: "macro_headwind",
        fire: macro_headwind_rule,
    },
    FlagRule {
        name: "churn",
        fire: churn_rule,
    },
    FlagRule {
        name: "hedge",
        fire: hedge_rule,
    },
    FlagRule {
        name: "bullish_tone",
        fire: bullish_tone_rule,
    },
    FlagRule {
        name: "bearish_tone",
        fire: bearish_tone_rule,
    },
];

const TONE_THRESHOLD: i32 = 15;
const AI_STRENGTH_THRESHOLD: i32 = 5;

fn beat_applies(s: &SegmentSignals) -> bool {
    s.is_beat && (s.has_revenue || s.has_eps || s.has_guidance || s.has_ai)
}

fn beat_rule(s: &SegmentSignals, _flags: &[Flag]) -> Option<FlagDraft> {
    if !beat_applies(s) {
        return None;
    }
    let category = if s.has_revenue {
        Category::Revenue
    } else if s.has_eps {
        Category::Eps
    } else if s.has_guidance {
        Category::Guidance
    } else {
        Category::AiTech
    };
    Some(FlagDraft {
        flag_type: FlagType::Beat,
        insight: format!("{category} outperformance vs consensus: primary bull catalyst."),
        impact: Impact::High,
        category,
    })
}

// Only considered when the beat rule did not fire
fn miss_rule(s: &SegmentSignals, _flags: &[Flag]) -> Option<FlagDraft> {
    let topical = s.has_revenue || s.has_eps || s.has_guidance || s.has_margin || s.has_fcf || s.has_churn;
    if beat_applies(s) || !s.is_miss || !topical {
        return None;
    }
    let category = if s.has_guidance {
        Category::Guidance
    } else if s.has_margin {
        Category::Margins
    } else if s.has_fcf {
        Category::CashFlow
    } else if s.has_churn {
        Category::Churn
    } else {
        Category::Revenue
    };
    Some(FlagDraft {
        flag_type: FlagType::Miss,
        insight: format!("{category} shortfall increases earnings risk for coming quarters."),
        impact: Impact::High,
        category,
    })
}

fn ai_strength_rule(s: &SegmentSignals, _flags: &[Flag]) -> Option<FlagDraft> {
    (s.has_ai && !s.is_miss && s.raw_score > AI_STRENGTH_THRESHOLD).then(|| FlagDraft {
        flag_type: FlagType::Positive,
        insight: "AI segment strength: key long-term re-rating driver.".to_string(),
        impact: Impact::Medium,
        category: Category::AiTech,
    })
}

fn macro_headwind_rule(s: &SegmentSignals, _flags: &[Flag]) -> Option<FlagDraft> {
    (s.has_macro && s.has_hedge).then(|| FlagDraft {
        flag_type: FlagType::Warning,
        insight: "Macro headwind flagged; watch for estimate revisions.".to_string(),
        impact: Impact::Medium,
        category: Category::Macro,
    })
}

fn churn_rule(s: &SegmentSignals, _flags: &[Flag]) -> Option<FlagDraft> {
    s.has_churn.then(|| FlagDraft {
        flag_type: if s.is_miss {
            FlagType::Miss
        } else {
            FlagType::Warning
        },
        insight: "Elevated churn is a leading indicator of revenue deceleration.".to_string(),
        impact: Impact::High,
        category: Category::Churn,
    })
}

fn hedge_rule(s: &SegmentSignals, flags: &[Flag]) -> Option<FlagDraft> {
    (s.has_hedge && !s.is_beat && flags.is_empty()).then(|| FlagDraft {
        flag_type: FlagType::Hedge,
        insight: "Hedged language signals management uncertainty.".to_string(),
        impact: Impact::Low,
        category: s.category,
    })
}

fn bullish_tone_rule(s: &SegmentSignals, flags: &[Flag]) -> Option<FlagDraft> {
    (s.raw_score > TONE_THRESHOLD && flags.is_empty()).then(|| FlagDraft {
        flag_type: FlagType::Bullish,
        insight: format!("Strong positive language on {}.", s.category),
        impact: Impact::Medium,
        category: s.category,
    })
}

fn bearish_tone_rule(s: &SegmentSignals, flags: &[Flag]) -> Option<FlagDraft> {
    (s.raw_score < -TONE_THRESHOLD && flags.is_empty()).then(|| FlagDraft {
        flag_type: FlagType::Bearish,
        insight: format!("Negative sentiment on {} adds downside risk.", s.category),
        impact: Impact::Medium,
        category: s.category,
    })
}

/// Run the cascade for one segment
///
/// Every emitted flag carries the same speaker and quote.
pub fn generate_flags(signals: &SegmentSignals, speaker: &str, quote: &str) -> Vec<Flag> {
    let mut flags = Vec::new();

    for rule in &RULES {
        if let Some(draft) = (rule.fire)(signals, &flags) {
            tracing::trace!(rule = rule.name, flag_type = draft.flag_type.as_str(), "Flag rule fired");
            flags.push(Flag {
                flag_type: draft.flag_type,
                speaker: speaker.to_string(),
                quote: quote.to_string(),
                insight: draft.insight,
                impact: draft.impact,
                category: draft.category,
            });
        }
    }

    flags
}
