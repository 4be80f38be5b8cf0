/*!
 * Tests for the best-effort translation service
 */

use std::sync::Arc;

use ru2kz::errors::ProviderError;
use ru2kz::providers::mock::MockProvider;
use ru2kz::translation::cache::TranslationCache;
use ru2kz::translation::{TranslationOutcome, TranslationService};

#[tokio::test]
async fn test_translate_withWorkingProvider_shouldReturnTranslation() {
    let provider = MockProvider::working().with_table([("Спасибо", "Рақмет")]);
    let service = TranslationService::new(provider);

    let outcome = service.translate("Спасибо").await;
    assert_eq!(outcome, TranslationOutcome::Translated("Рақмет".to_string()));
}

#[tokio::test]
async fn test_translate_withEveryErrorKind_shouldFallBack() {
    let errors: [fn() -> ProviderError; 4] = [
        || ProviderError::RequestFailed("connection refused".to_string()),
        || ProviderError::Timeout("20s".to_string()),
        || ProviderError::ParseError("unexpected token".to_string()),
        || ProviderError::ApiError {
            status_code: 429,
            message: "Too Many Requests".to_string(),
        },
    ];

    for make_error in errors {
        let provider = MockProvider::working().with_responder(move |_| Err(make_error()));
        let service = TranslationService::new(provider);

        let outcome = service.translate("Привет").await;
        assert_eq!(outcome, TranslationOutcome::Fallback("Привет".to_string()));
    }
}

#[tokio::test]
async fn test_translate_withIntermittentProvider_shouldMixOutcomes() {
    let service = TranslationService::new(MockProvider::intermittent(2));

    let first = service.translate("Один").await;
    let second = service.translate("Два").await;

    assert_eq!(first.text(), "[kk] Один");
    assert!(!first.is_fallback());
    assert_eq!(second, TranslationOutcome::Fallback("Два".to_string()));
}

#[test]
fn test_translate_withEmptyText_shouldSkipProvider() {
    let provider = MockProvider::failing();
    let service = TranslationService::new(provider.clone());

    let outcome = tokio_test::block_on(service.translate(""));
    assert_eq!(outcome, TranslationOutcome::Translated(String::new()));
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_translate_withCache_shouldCallProviderOncePerText() {
    let provider = MockProvider::working();
    let service = TranslationService::with_cache(Arc::new(provider.clone()), TranslationCache::new(true));

    for _ in 0..3 {
        assert_eq!(service.translate("Меню").await.text(), "[kk] Меню");
    }

    assert_eq!(provider.request_count(), 1);
    let (hits, misses, _) = service.cache().stats();
    assert_eq!((hits, misses), (2, 1));
}

#[tokio::test]
async fn test_translate_withCache_shouldNotCacheFallbacks() {
    let provider = MockProvider::intermittent(1);
    let service = TranslationService::with_cache(Arc::new(provider.clone()), TranslationCache::new(true));

    assert!(service.translate("Меню").await.is_fallback());
    assert!(service.translate("Меню").await.is_fallback());

    assert_eq!(provider.request_count(), 2);
    assert!(service.cache().is_empty());
}

#[test]
fn test_outcome_accessors() {
    let translated = TranslationOutcome::Translated("Сәлем".to_string());
    let fallback = TranslationOutcome::Fallback("Привет".to_string());

    assert_eq!(translated.text(), "Сәлем");
    assert!(!translated.is_fallback());
    assert!(fallback.is_fallback());
    assert_eq!(fallback.clone().into_text(), "Привет");
    assert_eq!(
        fallback.map(|text| format!(" {} ", text)),
        TranslationOutcome::Fallback(" Привет ".to_string())
    );
}

#[test]
fn test_service_debug_shouldIncludeProviderAndCache() {
    let service = TranslationService::with_cache(Arc::new(MockProvider::working()), TranslationCache::new(true));
    let debug = format!("{:?}", service);

    assert!(debug.contains("MockProvider"));
    assert!(debug.contains("TranslationCache"));
}
