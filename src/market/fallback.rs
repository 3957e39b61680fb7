//! Static market-data fallback
//!
//! Literal consensus presets for a handful of tickers plus one generic
//! default. Used whenever the live provider cannot supply market context.

use super::MarketContext;

struct Preset {
    ticker: &'static str,
    eps_consensus: f64,
    revenue_consensus: f64,
    revenue_unit: &'static str,
    price_target_low: f64,
    price_target_avg: f64,
    price_target_high: f64,
    analyst_buy: u32,
    analyst_hold: u32,
    analyst_sell: u32,
    short_interest: &'static str,
    street_sentiment: &'static str,
    key_watch_points: [&'static str; 4],
    recent_headlines: [&'static str; 3],
}

static PRESETS: [Preset; 4] = [
    Preset {
        ticker: "NVDA",
        eps_consensus: 5.59,
        revenue_consensus: 32.5,
        revenue_unit: "B",
        price_target_low: 100.0,
        price_target_avg: 164.0,
        price_target_high: 220.0,
        analyst_buy: 38,
        analyst_hold: 5,
        analyst_sell: 1,
        short_interest: "1.8%",
        street_sentiment: "strongly bullish",
        key_watch_points: [
            "Data center revenue",
            "Blackwell GPU ramp",
            "China export controls",
            "Gross margin trajectory",
        ],
        recent_headlines: [
            "Analysts raise PT on AI demand surge",
            "Blackwell supply bottlenecks flagged",
            "AMD competition intensifying",
        ],
    },
    Preset {
        ticker: "MSFT",
        eps_consensus: 3.10,
        revenue_consensus: 69.0,
        revenue_unit: "B",
        price_target_low: 380.0,
        price_target_avg: 472.0,
        price_target_high: 550.0,
        analyst_buy: 42,
        analyst_hold: 4,
        analyst_sell: 1,
        short_interest: "0.6%",
        street_sentiment: "bullish",
        key_watch_points: [
            "Azure growth rate",
            "Copilot monetization",
            "Operating margins",
            "OpenAI returns",
        ],
        recent_headlines: [
            "Azure growth key swing factor",
            "Copilot adoption closely tracked",
            "Operating leverage expected",
        ],
    },
    Preset {
        ticker: "AAPL",
        eps_consensus: 2.35,
        revenue_consensus: 124.0,
        revenue_unit: "B",
        price_target_low: 175.0,
        price_target_avg: 232.0,
        price_target_high: 300.0,
        analyst_buy: 28,
        analyst_hold: 14,
        analyst_sell: 4,
        short_interest: "0.8%",
        street_sentiment: "cautiously optimistic",
        key_watch_points: [
            "iPhone demand",
            "Services growth",
            "India expansion",
            "AI adoption",
        ],
        recent_headlines: [
            "iPhone upgrade cycle tied to AI",
            "Services accelerating",
            "India as China hedge",
        ],
    },
    Preset {
        ticker: "AMZN",
        eps_consensus: 1.36,
        revenue_consensus: 187.0,
        revenue_unit: "B",
        price_target_low: 185.0,
        price_target_avg: 240.0,
        price_target_high: 290.0,
        analyst_buy: 46,
        analyst_hold: 3,
        analyst_sell: 0,
        short_interest: "0.7%",
        street_sentiment: "bullish",
        key_watch_points: [
            "AWS re-acceleration",
            "Advertising revenue",
            "Retail margins",
            "AI services",
        ],
        recent_headlines: [
            "AWS re-acceleration is bull catalyst",
            "Ad revenue outpacing consensus",
            "Retail margin expansion on track",
        ],
    },
];

// Ticker field is replaced by the caller's normalized ticker
static GENERIC: Preset = Preset {
    ticker: "",
    eps_consensus: 2.45,
    revenue_consensus: 4.2,
    revenue_unit: "B",
    price_target_low: 185.0,
    price_target_avg: 224.0,
    price_target_high: 290.0,
    analyst_buy: 28,
    analyst_hold: 8,
    analyst_sell: 3,
    short_interest: "4.2%",
    street_sentiment: "cautiously optimistic",
    key_watch_points: [
        "Revenue growth",
        "Margin trajectory",
        "Guidance quality",
        "FCF",
    ],
    recent_headlines: [
        "Street expects in-line results",
        "Margin trajectory key debate",
        "Guidance credibility will be tested",
    ],
};

/// Canonical ticker form: trimmed and uppercase
pub fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}

/// True if `ticker` has a dedicated preset
pub fn has_preset(ticker: &str) -> bool {
    let normalized = normalize_ticker(ticker);
    PRESETS.iter().any(|p| p.ticker == normalized)
}

/// Fallback market context for a ticker
///
/// Unknown tickers get the generic default record; the returned ticker is
/// always the normalized input.
pub fn build_market_fallback(ticker: &str) -> MarketContext {
    let normalized = normalize_ticker(ticker);
    let preset = PRESETS
        .iter()
        .find(|p| p.ticker == normalized)
        .unwrap_or(&GENERIC);

    MarketContext {
        ticker: normalized,
        eps_consensus: preset.eps_consensus,
        revenue_consensus: preset.revenue_consensus,
        revenue_unit: preset.revenue_unit.to_string(),
        price_target_low: preset.price_target_low,
        price_target_avg: preset.price_target_avg,
        price_target_high: preset.price_target_high,
        analyst_buy: preset.analyst_buy,
        analyst_hold: preset.analyst_hold,
        analyst_sell: preset.analyst_sell,
        short_interest: preset.short_interest.to_string(),
        street_sentiment: preset.street_sentiment.to_string(),
        key_watch_points: preset.key_watch_points.iter().map(|s| s.to_string()).collect(),
        recent_headlines: preset.recent_headlines.iter().map(|s| s.to_string()).collect(),
    }
}
