/*!
 * Translatability heuristics.
 *
 * Decides, per text unit, whether the unit is worth sending to the provider.
 * The checks are ordered: URL, numeric/punctuation, email, then pure Latin.
 * All functions are total over `&str`.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::formatting::is_envelope_char;

/// Russian Cyrillic letters, including Ё/ё
static CYRILLIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[А-Яа-яЁё]").expect("valid cyrillic pattern"));

static URL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").expect("valid url pattern"));

static NUMERIC_OR_PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[\d\s.,:;!?()\[\]{}\-–—/\\%+*#=<>"'«»|_~&$№]+$"#).expect("valid numeric pattern")
});

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static LATIN_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[A-Za-z0-9\s.,:;!?()\[\]{}\-–—/\\%+*#=<>"'|_~&$@]+$"#).expect("valid latin pattern")
});

/// Returns true if the text contains at least one Russian Cyrillic letter.
pub fn is_candidate_script(text: &str) -> bool {
    CYRILLIC.is_match(text)
}

/// Returns false for text that must not be sent to the provider: blank text,
/// bare URLs, numbers and punctuation, email addresses, and pure Latin text
/// without any Cyrillic letter.
pub fn should_translate(text: &str) -> bool {
    let trimmed = text.trim_matches(is_envelope_char);
    if trimmed.is_empty() {
        return false;
    }

    if URL_PREFIX.is_match(trimmed) {
        return false;
    }

    if NUMERIC_OR_PUNCTUATION.is_match(trimmed) {
        return false;
    }

    if EMAIL.is_match(trimmed) {
        return false;
    }

    if LATIN_ONLY.is_match(trimmed) && !is_candidate_script(trimmed) {
        return false;
    }

    true
}

/// Combined gate used by the document pipeline.
pub fn needs_translation(text: &str) -> bool {
    is_candidate_script(text) && should_translate(text)
}
