//! Market context module
//!
//! Consensus data shape and the static fallback table

mod fallback;
mod types;

pub use fallback::{build_market_fallback, has_preset, normalize_ticker};
pub use types::MarketContext;
