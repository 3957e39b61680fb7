//! Live provider seam
//!
//! Traits for the external market-data and analysis providers, plus the
//! parsing and validation applied to whatever they return. Concrete network
//! clients live outside this crate; anything that fails here is replaced by
//! the local fallback.

mod parse;
mod types;
mod validate;

pub use parse::parse_json_payload;
pub use types::{DataSource, ProviderError, Sourced};
pub use validate::validate_analysis;

use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::market::MarketContext;
use async_trait::async_trait;

/// Source of live analyst consensus data
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch consensus data for a ticker
    async fn fetch_market(&self, ticker: &str) -> Result<MarketContext, ProviderError>;
}

/// Source of live segment analysis
#[async_trait]
pub trait AnalysisSource: Send + Sync {
    /// Analyze one segment in context
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ProviderError>;
}

/// Provider that is never reachable
///
/// Used when no live provider is configured, so every call takes the local
/// fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

const OFFLINE_REASON: &str = "no live provider configured";

#[async_trait]
impl MarketDataSource for OfflineProvider {
    async fn fetch_market(&self, _ticker: &str) -> Result<MarketContext, ProviderError> {
        Err(ProviderError::Unavailable(OFFLINE_REASON.to_string()))
    }
}

#[async_trait]
impl AnalysisSource for OfflineProvider {
    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, ProviderError> {
        Err(ProviderError::Unavailable(OFFLINE_REASON.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_provider_is_unavailable() {
        let provider = OfflineProvider;
        let err = provider.fetch_market("NVDA").await.unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable(_)));
    }

    #[test]
    fn test_offline_provider_analysis_is_unavailable() {
        let request = AnalysisRequest {
            segment: crate::analysis::TranscriptSegment::new("CEO", "Record quarter."),
            transcript: String::new(),
            market: crate::market::build_market_fallback("MSFT"),
            prior_score: 0,
        };
        let err = tokio_test::block_on(OfflineProvider.analyze(&request)).unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable(_)));
    }

    #[test]
    fn test_sourced_tags() {
        let live = Sourced::live(1);
        let fallback = Sourced::fallback(2);
        assert!(!live.is_fallback());
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_inner(), 2);
        assert_eq!(DataSource::Live.as_str(), "live");
    }
}
