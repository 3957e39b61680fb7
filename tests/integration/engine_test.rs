//! End-to-end tests of the local rule engine

use earnings_signal::analysis::{
    blend, AnalysisResult, Category, FlagType, PriceActionBias, SegmentAnalyzer, Sentiment,
    TranscriptSegment, MAX_FLAGS, MAX_KEY_THEMES, MAX_QUOTE_CHARS, MAX_RED_FLAGS,
};

fn analyze(text: &str, prior: i32) -> AnalysisResult {
    SegmentAnalyzer::default().analyze(&TranscriptSegment::new("CEO", text), prior)
}

const CORPUS: &[&str] = &[
    "",
    "Thank you, operator.",
    "We delivered record revenue, beating consensus estimates",
    "Guidance cut due to significant decline in demand, however we remain cautious",
    "Revenue came in below expectations and gross margin fell short; churn rose despite retention programs.",
    "Our generative AI copilot drove exceptional growth, robust demand and an all-time high in bookings!",
    "Macro uncertainty, inflation and tariff risk remain a major headwind for the fiscal year outlook.",
    "Free cash flow was weaker than expected?! Capex for the data center buildout increased.",
    "record exceeded beat surpassed accelerating outperformed robust exceptional breakthrough all-time high",
    "significant miss significant decline major concern severe well below significantly below major headwind cut guidance",
    "...!!!???",
    "é€ unicode ✓ text without punctuation but with risk",
];

fn assert_in_ranges(result: &AnalysisResult) {
    assert!((-100..=100).contains(&result.sentiment_score));
    assert!((40.0..=92.0).contains(&result.confidence));
    assert!([25, 50, 75].contains(&result.metrics.guidance_quality));
    assert!((20..=95).contains(&result.metrics.management_credibility));
    assert!((20..=95).contains(&result.metrics.transparency_score));
    assert!((-100..=100).contains(&result.metrics.forward_momentum));
    assert!((5..=95).contains(&result.metrics.risk_signals));
    assert!(result.flags.len() <= MAX_FLAGS);
    assert!(result.key_themes.len() <= MAX_KEY_THEMES);
    assert!(result.red_flags.len() <= MAX_RED_FLAGS);
    for flag in &result.flags {
        assert!(flag.quote.chars().count() <= MAX_QUOTE_CHARS);
    }
}

#[test]
fn test_ranges_hold_for_all_inputs_and_priors() {
    for text in CORPUS {
        for prior in [-100, -50, -1, 0, 1, 50, 100, 10_000, -10_000] {
            assert_in_ranges(&analyze(text, prior));
        }
    }
}

#[test]
fn test_identical_inputs_identical_records() {
    for text in CORPUS {
        let a = serde_json::to_string(&analyze(text, 17)).unwrap();
        let b = serde_json::to_string(&analyze(text, 17)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_ai_beats_revenue_in_classification() {
    let result = analyze(
        "Machine learning workloads drove revenue and the top line higher.",
        0,
    );
    // no beat phrase, so the bullish tone rule labels the segment
    for flag in &result.flags {
        assert_ne!(flag.category, Category::Revenue);
    }
    let analyzer = SegmentAnalyzer::default();
    assert_eq!(
        analyzer
            .signals("Machine learning workloads drove revenue and the top line higher.")
            .category,
        Category::AiTech
    );
}

#[test]
fn test_revenue_beat_scenario() {
    let result = analyze("We delivered record revenue, beating consensus estimates", 0);
    let first = &result.flags[0];
    assert_eq!(first.flag_type, FlagType::Beat);
    assert_eq!(first.category, Category::Revenue);
    assert_eq!(first.speaker, "CEO");
    assert_eq!(
        first.quote,
        "We delivered record revenue, beating consensus estimates"
    );
    assert_eq!(result.confidence, 76.5);
}

#[test]
fn test_guidance_cut_scenario() {
    let text = "Guidance cut due to significant decline in demand, however we remain cautious";
    let analyzer = SegmentAnalyzer::default();
    let signals = analyzer.signals(text);
    // significant decline (-18) and cautious (-7)
    assert_eq!(signals.raw_score, -25);
    assert!(signals.has_hedge);
    assert!(!signals.is_beat);

    let result = analyze(text, 0);
    assert_eq!(result.flags.len(), 1);
    assert_eq!(result.flags[0].flag_type, FlagType::Hedge);
    // "remain" contains the AI phrase "ai", which tops the classifier precedence
    assert_eq!(result.flags[0].category, Category::AiTech);
    assert_eq!(result.sentiment_score, -16);
    assert_eq!(result.overall_sentiment, Sentiment::Bearish);
    assert_eq!(result.price_action_bias, PriceActionBias::Sell);
}

#[test]
fn test_momentum_half_way_scenario() {
    let combined = blend(50, -60);
    assert_eq!(combined, -22);
    assert_eq!(Sentiment::from_score(combined), Sentiment::Bearish);
    assert_eq!(PriceActionBias::from_score(combined), PriceActionBias::Sell);
}

#[test]
fn test_neutral_text_degrades_gracefully() {
    let result = analyze("Thank you, operator", 0);
    assert!(result.flags.is_empty());
    assert_eq!(result.sentiment_score, 0);
    assert_eq!(result.overall_sentiment, Sentiment::Neutral);
    assert_eq!(result.price_action_bias, PriceActionBias::Hold);
    assert_eq!(result.estimated_move, "±1-2%");
    assert_eq!(result.confidence, 55.0);
    assert!(result.key_themes.is_empty());
    assert!(result.red_flags.is_empty());
}

#[test]
fn test_wire_shape_field_names() {
    let json = serde_json::to_value(analyze(
        "We delivered record revenue, beating consensus estimates",
        0,
    ))
    .unwrap();

    for field in [
        "overallSentiment",
        "sentimentScore",
        "vsExpectations",
        "confidence",
        "priceActionBias",
        "estimatedMove",
        "flags",
        "metrics",
        "vsConsensus",
        "keyThemes",
        "redFlags",
        "analystTakeaway",
    ] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["overallSentiment"], "BULLISH");
    assert_eq!(json["vsExpectations"], "BEAT");
    assert_eq!(json["priceActionBias"], "BUY");
    assert_eq!(json["flags"][0]["type"], "BEAT");
    assert_eq!(json["vsConsensus"]["margins"], "UNKNOWN");
}

#[test]
fn test_round_trip_through_json() {
    let result = analyze(
        "Macro uncertainty, inflation and tariff risk remain a major headwind for the fiscal year outlook.",
        -30,
    );
    let json = serde_json::to_string(&result).unwrap();
    let back: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
