/*!
 * Tests for the mock provider
 */

use std::time::{Duration, Instant};

use ru2kz::errors::ProviderError;
use ru2kz::providers::Provider;
use ru2kz::providers::mock::MockProvider;

#[tokio::test]
async fn test_mock_working_shouldTagInput() {
    let provider = MockProvider::working();
    assert_eq!(provider.translate("Привет").await.unwrap(), "[kk] Привет");
    assert_eq!(provider.name(), "mock");
}

#[tokio::test]
async fn test_mock_failing_shouldAlwaysFail() {
    let provider = MockProvider::failing();
    for _ in 0..3 {
        assert!(matches!(
            provider.translate("Привет").await,
            Err(ProviderError::RequestFailed(_))
        ));
    }
    assert_eq!(provider.request_count(), 3);
}

#[tokio::test]
async fn test_mock_intermittent_withZero_shouldBeClamped() {
    // Failing every request instead of dividing by zero
    let provider = MockProvider::intermittent(0);
    assert!(provider.translate("Привет").await.is_err());
    assert!(provider.translate("Привет").await.is_err());
}

#[tokio::test]
async fn test_mock_slow_shouldDelayResponse() {
    let provider = MockProvider::slow(30);
    let start = Instant::now();
    provider.translate("Привет").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(30));
}

#[tokio::test]
async fn test_mock_clone_shouldShareCounters() {
    let provider = MockProvider::slow(20);
    let clone = provider.clone();

    let (a, b) = tokio::join!(provider.translate("Один"), clone.translate("Два"));
    assert!(a.is_ok() && b.is_ok());
    assert_eq!(provider.request_count(), 2);
    assert_eq!(provider.peak_in_flight(), 2);
}

#[tokio::test]
async fn test_mock_responder_shouldOverrideDefault() {
    let provider = MockProvider::working().with_responder(|text| Ok(text.to_uppercase()));
    assert_eq!(provider.translate("привет").await.unwrap(), "ПРИВЕТ");
}
