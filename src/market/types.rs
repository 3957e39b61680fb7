//! Market context types

use serde::{Deserialize, Serialize};

/// Analyst consensus snapshot for one ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketContext {
    pub ticker: String,
    pub eps_consensus: f64,
    pub revenue_consensus: f64,
    /// Unit of `revenue_consensus`, e.g. "B"
    pub revenue_unit: String,
    pub price_target_low: f64,
    pub price_target_avg: f64,
    pub price_target_high: f64,
    pub analyst_buy: u32,
    pub analyst_hold: u32,
    pub analyst_sell: u32,
    /// Percentage string, e.g. "1.8%"
    pub short_interest: String,
    pub street_sentiment: String,
    pub key_watch_points: Vec<String>,
    pub recent_headlines: Vec<String>,
}

impl MarketContext {
    /// Total analyst ratings
    pub fn analyst_count(&self) -> u32 {
        self.analyst_buy + self.analyst_hold + self.analyst_sell
    }
}
