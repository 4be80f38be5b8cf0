/*!
 * Tests for whitespace envelope preservation
 */

use ru2kz::providers::mock::MockProvider;
use ru2kz::translation::TranslationService;
use ru2kz::translation::formatting::{WhitespaceEnvelope, translate_preserving_whitespace};

#[test]
fn test_envelope_split_withSurroundingWhitespace_shouldSeparateParts() {
    let envelope = WhitespaceEnvelope::split("  \tПривет, мир!\r");
    assert_eq!(envelope.leading, "  \t");
    assert_eq!(envelope.core, "Привет, мир!");
    assert_eq!(envelope.trailing, "\r");
}

#[test]
fn test_envelope_split_withBlankText_shouldPutAllInLeading() {
    let envelope = WhitespaceEnvelope::split("   ");
    assert_eq!(envelope.leading, "   ");
    assert_eq!(envelope.core, "");
    assert_eq!(envelope.trailing, "");
}

#[test]
fn test_envelope_split_withUnicodeWhitespace_shouldKeepIt() {
    let envelope = WhitespaceEnvelope::split("\u{00A0}Текст\u{2003}");
    assert_eq!(envelope.leading, "\u{00A0}");
    assert_eq!(envelope.core, "Текст");
    assert_eq!(envelope.trailing, "\u{2003}");
}

#[test]
fn test_envelope_wrap_shouldRestoreOriginalWhitespace() {
    let original = "    Главная  ";
    let envelope = WhitespaceEnvelope::split(original);
    assert_eq!(envelope.wrap(envelope.core), original);
    assert_eq!(envelope.wrap("Басты бет"), "    Басты бет  ");
}

#[tokio::test]
async fn test_translate_preserving_whitespace_shouldWrapTranslation() {
    let provider = MockProvider::working().with_table([("Привет, мир!", "Сәлем, дүние!")]);
    let service = TranslationService::new(provider);

    let outcome = translate_preserving_whitespace(&service, "  Привет, мир!  ").await;
    assert_eq!(outcome.text(), "  Сәлем, дүние!  ");
    assert!(!outcome.is_fallback());
}

#[tokio::test]
async fn test_translate_preserving_whitespace_shouldSendOnlyCore() {
    let provider = MockProvider::working().with_responder(|text| {
        assert_eq!(text, "Текст");
        Ok("Мәтін".to_string())
    });
    let service = TranslationService::new(provider);

    let outcome = translate_preserving_whitespace(&service, "\t\tТекст \r").await;
    assert_eq!(outcome.text(), "\t\tМәтін \r");
}

#[tokio::test]
async fn test_translate_preserving_whitespace_withFailure_shouldReturnOriginal() {
    let service = TranslationService::new(MockProvider::failing());
    let original = "   Привет, мир!\t";

    let outcome = translate_preserving_whitespace(&service, original).await;
    assert!(outcome.is_fallback());
    assert_eq!(outcome.text(), original);
}

#[tokio::test]
async fn test_translate_preserving_whitespace_withBlankText_shouldNotCallProvider() {
    let provider = MockProvider::working();
    let service = TranslationService::new(provider.clone());

    let outcome = translate_preserving_whitespace(&service, "    ").await;
    assert_eq!(outcome.text(), "    ");
    assert_eq!(provider.request_count(), 0);
}
