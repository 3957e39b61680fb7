//! Market command implementation

use crate::market::{build_market_fallback, has_preset};
use clap::Args;

#[derive(Args, Debug)]
pub struct MarketArgs {
    /// Ticker symbol, case-insensitive
    pub ticker: String,
}

impl MarketArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        if !has_preset(&self.ticker) {
            tracing::info!(ticker = %self.ticker, "No preset for ticker, using generic default");
        }
        let market = build_market_fallback(&self.ticker);
        println!("{}", serde_json::to_string_pretty(&market)?);
        Ok(())
    }
}
