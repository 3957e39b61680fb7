//! Standard phrase tables
//!
//! All literals are lowercase. Matching is substring-based, so short entries
//! such as "ai" or "arr" also hit inside longer words.

pub(super) const STRONG_BULLISH: &[&str] = &[
    "record",
    "exceeded",
    "beat",
    "surpassed",
    "accelerating",
    "outperformed",
    "raised guidance",
    "strong demand",
    "robust",
    "exceptional",
    "significant growth",
    "ahead of",
    "well above",
    "above expectations",
    "breakthrough",
    "all-time high",
];

pub(super) const BULLISH: &[&str] = &[
    "growth",
    "increased",
    "improved",
    "positive",
    "confident",
    "optimistic",
    "gaining",
    "opportunity",
    "strength",
    "solid",
    "healthy",
    "progress",
    "on track",
    "performing well",
    "pleased",
    "excited",
    "favorable",
    "encouraging",
    "delivered",
];

pub(super) const BEARISH: &[&str] = &[
    "declined",
    "decreased",
    "miss",
    "below",
    "challenging",
    "headwind",
    "uncertain",
    "pressure",
    "weakness",
    "softness",
    "difficult",
    "cautious",
    "concern",
    "risk",
    "impacted",
    "lower than",
    "reduced",
    "disappointing",
    "slowed",
];

pub(super) const STRONG_BEARISH: &[&str] = &[
    "significant miss",
    "significant decline",
    "major concern",
    "severe",
    "well below",
    "significantly below",
    "major headwind",
    "cut guidance",
    "lowered guidance",
    "withdrew guidance",
];

pub(super) const GUIDANCE: &[&str] = &[
    "guidance",
    "outlook",
    "forecast",
    "expecting",
    "anticipate",
    "project",
    "full year",
    "next quarter",
    "fiscal year",
];

pub(super) const BEAT: &[&str] = &[
    "beat",
    "exceeded",
    "above",
    "ahead of",
    "surpassed",
    "record",
    "better than expected",
    "above consensus",
    "outperformed",
];

pub(super) const MISS: &[&str] = &[
    "miss",
    "below",
    "fell short",
    "disappointed",
    "came in below",
    "under",
    "weaker than",
    "less than expected",
];

pub(super) const EPS: &[&str] = &[
    "eps",
    "earnings per share",
    "net income",
    "profit",
    "bottom line",
    "earnings",
];

pub(super) const REVENUE: &[&str] = &["revenue", "sales", "top line", "bookings", "billings", "arr"];

pub(super) const MARGIN: &[&str] = &[
    "margin",
    "gross margin",
    "operating margin",
    "ebitda",
    "profitability",
];

pub(super) const CHURN: &[&str] = &["churn", "retention", "attrition", "customer loss"];

pub(super) const AI: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "generative",
    "agentic",
    "copilot",
];

pub(super) const MACRO: &[&str] = &[
    "macro",
    "economy",
    "recession",
    "interest rate",
    "inflation",
    "tariff",
    "currency",
];

pub(super) const CAPEX: &[&str] = &["capex", "capital expenditure", "data center", "buildout"];

pub(super) const FCF: &[&str] = &["free cash flow", "fcf", "cash generation"];

/// Words that mark hedged or qualified management language
pub const HEDGING_TERMS: &[&str] = &[
    "however",
    "but",
    "although",
    "despite",
    "uncertain",
    "cautious",
    "headwind",
    "risk",
];
