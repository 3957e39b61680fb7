//! Integration tests for call sessions and provider fallback

use async_trait::async_trait;
use earnings_signal::analysis::{AnalysisRequest, AnalysisResult, SegmentAnalyzer, TranscriptSegment};
use earnings_signal::market::{build_market_fallback, MarketContext};
use earnings_signal::provider::{
    parse_json_payload, AnalysisSource, DataSource, MarketDataSource, OfflineProvider,
    ProviderError,
};
use earnings_signal::session::{resolve_market, CallSession};
use std::sync::Mutex;

/// Provider that replays canned raw payloads and records requests
struct ScriptedProvider {
    payloads: Mutex<Vec<String>>,
    requests: Mutex<Vec<AnalysisRequest>>,
}

impl ScriptedProvider {
    fn new(payloads: &[&str]) -> Self {
        Self {
            payloads: Mutex::new(payloads.iter().rev().map(|p| p.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AnalysisSource for ScriptedProvider {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        let raw = self
            .payloads
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| ProviderError::Unavailable("script exhausted".to_string()))?;
        parse_json_payload(&raw)
    }
}

struct StaticMarket;

#[async_trait]
impl MarketDataSource for StaticMarket {
    async fn fetch_market(&self, ticker: &str) -> Result<MarketContext, ProviderError> {
        let mut market = build_market_fallback("MSFT");
        market.ticker = ticker.to_string();
        market.street_sentiment = "live".to_string();
        Ok(market)
    }
}

fn segments() -> Vec<TranscriptSegment> {
    vec![
        TranscriptSegment::new("CEO", "We delivered record revenue, beating consensus estimates"),
        TranscriptSegment::new("CFO", "Gross margin came in below plan due to pricing pressure."),
        TranscriptSegment::new("Analyst", "Can you talk about churn?"),
    ]
}

#[tokio::test]
async fn test_offline_session_matches_manual_threading() {
    let analyzer = SegmentAnalyzer::default();
    let mut session = CallSession::new(analyzer.clone(), build_market_fallback("ZZZ"));

    let mut prior = 0;
    for segment in segments() {
        let expected = analyzer.analyze(&segment, prior);
        let sourced = session.analyze(&OfflineProvider, segment).await;
        assert_eq!(sourced.source, DataSource::Fallback);
        assert_eq!(sourced.value, expected);
        prior = expected.sentiment_score;
    }
    assert_eq!(session.prior_score(), prior);
    assert_eq!(session.summary().fallback_segments, 3);
}

#[tokio::test]
async fn test_mixed_live_and_fallback() {
    let live = SegmentAnalyzer::default().analyze(
        &TranscriptSegment::new("CEO", "Solid, healthy progress on track."),
        0,
    );
    let live_json = serde_json::to_string(&live).unwrap();
    let fenced = format!("Sure! ```json\n{live_json}\n```");

    let provider = ScriptedProvider::new(&[&fenced, "not json at all"]);
    let mut session = CallSession::new(SegmentAnalyzer::default(), build_market_fallback("NVDA"));

    let segs = segments();
    let first = session.analyze(&provider, segs[0].clone()).await;
    assert_eq!(first.source, DataSource::Live);
    assert_eq!(first.value, live);

    let second = session.analyze(&provider, segs[1].clone()).await;
    assert_eq!(second.source, DataSource::Fallback);
    // the fallback is blended with the live provider's score
    let expected = SegmentAnalyzer::default().analyze(&segs[1], live.sentiment_score);
    assert_eq!(second.value, expected);

    let third = session.analyze(&provider, segs[2].clone()).await;
    assert_eq!(third.source, DataSource::Fallback);

    let requests = provider.requests.lock().unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].prior_score, 0);
    assert!(requests[0].transcript.is_empty());
    assert_eq!(requests[1].prior_score, live.sentiment_score);
    assert!(requests[1].transcript.starts_with("CEO: We delivered record revenue"));
    assert_eq!(requests[2].market.ticker, "NVDA");
}

#[tokio::test]
async fn test_resolve_market_prefers_live() {
    let live = resolve_market(&StaticMarket, "NVDA").await;
    assert_eq!(live.source, DataSource::Live);
    assert_eq!(live.value.street_sentiment, "live");

    let fallback = resolve_market(&OfflineProvider, "nvda").await;
    assert_eq!(fallback.source, DataSource::Fallback);
    assert_eq!(fallback.value, build_market_fallback("NVDA"));
}

#[tokio::test]
async fn test_trait_objects() {
    let provider: Box<dyn AnalysisSource> = Box::new(OfflineProvider);
    let market_source: &dyn MarketDataSource = &OfflineProvider;

    let market = resolve_market(market_source, "aapl").await;
    let mut session = CallSession::new(SegmentAnalyzer::default(), market.value);
    let result = session
        .analyze(provider.as_ref(), TranscriptSegment::new("CEO", "Thank you."))
        .await;
    assert!(result.is_fallback());
}
