/*!
 * Tests for the document model
 */

use ru2kz::translation::document::{join_units, split_units};
use ru2kz::translation::{DocumentReport, DocumentStats, TranslatedUnit, TranslationOutcome, UnitStatus};

#[test]
fn test_split_units_shouldKeepEmptyLinesAndTrailingNewline() {
    let units = split_units("Привет\n\nмир\n");
    assert_eq!(units, vec!["Привет", "", "мир", ""]);
}

#[test]
fn test_split_units_withEmptyDocument_shouldYieldOneEmptyUnit() {
    assert_eq!(split_units(""), vec![String::new()]);
}

#[test]
fn test_split_units_withCrLf_shouldKeepCarriageReturn() {
    let units = split_units("Один\r\nДва\r\n");
    assert_eq!(units, vec!["Один\r", "Два\r", ""]);
}

#[test]
fn test_join_units_shouldReverseSplit() {
    for document in ["", "\n", "a\nb", "Привет\r\n  мир  \n\n", "\n\nконец"] {
        assert_eq!(join_units(&split_units(document)), document);
    }
}

#[test]
fn test_translated_unit_from_outcome_shouldMapStatus() {
    let translated = TranslatedUnit::from_outcome(3, TranslationOutcome::Translated("Сәлем".to_string()));
    assert_eq!(translated.index, 3);
    assert_eq!(translated.status, UnitStatus::Translated);
    assert_eq!(translated.text, "Сәлем");

    let fallback = TranslatedUnit::from_outcome(4, TranslationOutcome::Fallback("Привет".to_string()));
    assert_eq!(fallback.status, UnitStatus::Fallback);
    assert_eq!(fallback.text, "Привет");
}

#[test]
fn test_document_report_shouldJoinTextAndCountStatuses() {
    let report = DocumentReport::new(vec![
        TranslatedUnit::skipped(0, "<p>"),
        TranslatedUnit::from_outcome(1, TranslationOutcome::Translated("  Сәлем".to_string())),
        TranslatedUnit::fallback(2, "  Пока"),
        TranslatedUnit::skipped(3, "</p>"),
    ]);

    assert_eq!(report.text(), "<p>\n  Сәлем\n  Пока\n</p>");
    assert_eq!(
        report.stats(),
        DocumentStats {
            total: 4,
            skipped: 2,
            translated: 1,
            fallback: 1,
        }
    );
}

#[test]
fn test_document_stats_display() {
    let stats = DocumentStats {
        total: 10,
        skipped: 6,
        translated: 3,
        fallback: 1,
    };
    assert_eq!(
        stats.to_string(),
        "10 lines: 3 translated, 1 kept after provider failure, 6 skipped"
    );
}

#[test]
fn test_unit_status_serialization_shouldBeLowercase() {
    let json = serde_json::to_string(&TranslatedUnit::fallback(0, "Привет")).unwrap();
    assert!(json.contains("\"status\":\"fallback\""));
    assert_eq!(UnitStatus::Skipped.to_string(), "skipped");
}
