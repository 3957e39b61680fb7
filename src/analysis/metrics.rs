//! Auxiliary metrics and consensus comparison

use super::signals::SegmentSignals;
use super::types::{ConsensusComparison, Metrics, Verdict};

fn clamp(value: i64, low: i32, high: i32) -> i32 {
    value.clamp(low as i64, high as i64) as i32
}

/// Derive the bounded auxiliary scores of a segment
pub fn derive_metrics(s: &SegmentSignals) -> Metrics {
    let bull = s.bullish_count as i64;
    let bear = s.bearish_count as i64;
    let flag = |b: bool, weight: i64| if b { weight } else { 0 };

    let guidance_quality = match (s.has_guidance, s.is_beat, s.is_miss) {
        (true, true, _) => 75,
        (true, false, true) => 25,
        _ => 50,
    };

    Metrics {
        guidance_quality,
        management_credibility: clamp(65 + 4 * bull - 5 * bear, 20, 95),
        transparency_score: clamp(60 + flag(s.has_guidance, 10) + 2 * bull, 20, 95),
        forward_momentum: clamp(
            s.raw_score as i64 + flag(s.is_beat, 20) - flag(s.is_miss, 20),
            -100,
            100,
        ),
        risk_signals: clamp(
            20 + 8 * bear + flag(s.has_churn, 15) + flag(s.is_miss, 20),
            5,
            95,
        ),
    }
}

fn topic_verdict(present: bool, s: &SegmentSignals) -> Verdict {
    match (present, s.is_beat, s.is_miss) {
        (false, _, _) => Verdict::Unknown,
        (true, true, _) => Verdict::Beat,
        (true, false, true) => Verdict::Miss,
        (true, false, false) => Verdict::Inline,
    }
}

/// Compare the segment against consensus, topic by topic
pub fn compare_consensus(s: &SegmentSignals) -> ConsensusComparison {
    let margins = if !s.has_margin {
        Verdict::Unknown
    } else if s.is_miss {
        Verdict::Miss
    } else if s.raw_score > 0 {
        Verdict::Beat
    } else {
        Verdict::Inline
    };

    ConsensusComparison {
        eps: topic_verdict(s.has_eps, s),
        revenue: topic_verdict(s.has_revenue, s),
        guidance: topic_verdict(s.has_guidance, s),
        margins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::Category;

    fn signals() -> SegmentSignals {
        SegmentSignals {
            raw_score: 0,
            is_beat: false,
            is_miss: false,
            has_guidance: false,
            has_margin: false,
            has_revenue: false,
            has_eps: false,
            has_ai: false,
            has_churn: false,
            has_macro: false,
            has_fcf: false,
            has_hedge: false,
            bullish_count: 0,
            bearish_count: 0,
            category: Category::Other,
        }
    }

    #[test]
    fn test_baseline_metrics() {
        let m = derive_metrics(&signals());
        assert_eq!(
            m,
            Metrics {
                guidance_quality: 50,
                management_credibility: 65,
                transparency_score: 60,
                forward_momentum: 0,
                risk_signals: 20,
            }
        );
    }

    #[test]
    fn test_guidance_quality() {
        let mut s = signals();
        s.is_beat = true;
        // beat without guidance talk stays at the default
        assert_eq!(derive_metrics(&s).guidance_quality, 50);

        s.has_guidance = true;
        assert_eq!(derive_metrics(&s).guidance_quality, 75);

        s.is_miss = true;
        assert_eq!(derive_metrics(&s).guidance_quality, 75);

        s.is_beat = false;
        assert_eq!(derive_metrics(&s).guidance_quality, 25);
    }

    #[test]
    fn test_bounds_hold_at_extremes() {
        let mut s = signals();
        s.bullish_count = 40;
        s.raw_score = 100;
        s.is_beat = true;
        s.has_guidance = true;
        let m = derive_metrics(&s);
        assert_eq!(m.management_credibility, 95);
        assert_eq!(m.transparency_score, 95);
        assert_eq!(m.forward_momentum, 100);

        let mut s = signals();
        s.bearish_count = 40;
        s.raw_score = -100;
        s.is_miss = true;
        s.has_churn = true;
        let m = derive_metrics(&s);
        assert_eq!(m.management_credibility, 20);
        assert_eq!(m.forward_momentum, -100);
        assert_eq!(m.risk_signals, 95);
    }

    #[test]
    fn test_risk_signals_components() {
        let mut s = signals();
        s.bearish_count = 2;
        s.has_churn = true;
        assert_eq!(derive_metrics(&s).risk_signals, 20 + 16 + 15);
    }

    #[test]
    fn test_consensus_unknown_without_topics() {
        let c = compare_consensus(&signals());
        assert_eq!(c.eps, Verdict::Unknown);
        assert_eq!(c.revenue, Verdict::Unknown);
        assert_eq!(c.guidance, Verdict::Unknown);
        assert_eq!(c.margins, Verdict::Unknown);
    }

    #[test]
    fn test_consensus_topic_verdicts() {
        let mut s = signals();
        s.has_eps = true;
        s.has_revenue = true;
        assert_eq!(compare_consensus(&s).eps, Verdict::Inline);

        s.is_miss = true;
        assert_eq!(compare_consensus(&s).revenue, Verdict::Miss);

        s.is_beat = true;
        assert_eq!(compare_consensus(&s).revenue, Verdict::Beat);
        assert_eq!(compare_consensus(&s).guidance, Verdict::Unknown);
    }

    #[test]
    fn test_consensus_margins() {
        let mut s = signals();
        s.has_margin = true;
        assert_eq!(compare_consensus(&s).margins, Verdict::Inline);

        s.raw_score = 7;
        assert_eq!(compare_consensus(&s).margins, Verdict::Beat);

        // a miss outweighs a positive score, and beat phrases are ignored here
        s.is_miss = true;
        s.is_beat = true;
        assert_eq!(compare_consensus(&s).margins, Verdict::Miss);
    }
}
