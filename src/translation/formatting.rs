/*!
 * Whitespace preservation around translated text.
 *
 * Providers trim and reflow whatever they are given, so only the core of a
 * unit is sent and the original leading and trailing whitespace is put back
 * around the result.
 */

use crate::providers::Provider;

use super::core::{TranslationOutcome, TranslationService};

/// A text split into leading whitespace, core and trailing whitespace
///
/// `leading + core + trailing` always equals the original text. For blank
/// text all of it lands in `leading` and the core is empty. A byte order
/// mark counts as whitespace here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceEnvelope<'a> {
    pub leading: &'a str,
    pub core: &'a str,
    pub trailing: &'a str,
}

/// Characters kept out of the core: Unicode whitespace and the byte order mark
pub fn is_envelope_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

impl<'a> WhitespaceEnvelope<'a> {
    pub fn split(text: &'a str) -> Self {
        let without_leading = text.trim_start_matches(is_envelope_char);
        let leading = &text[..text.len() - without_leading.len()];
        let core = without_leading.trim_end_matches(is_envelope_char);
        let trailing = &without_leading[core.len()..];

        Self { leading, core, trailing }
    }

    /// Put `core` back inside the original whitespace
    pub fn wrap(&self, core: &str) -> String {
        let mut result = String::with_capacity(self.leading.len() + core.len() + self.trailing.len());
        result.push_str(self.leading);
        result.push_str(core);
        result.push_str(self.trailing);
        result
    }
}

/// Translate the core of `original`, keeping its whitespace envelope intact.
pub async fn translate_preserving_whitespace<P: Provider>(
    service: &TranslationService<P>,
    original: &str,
) -> TranslationOutcome {
    let envelope = WhitespaceEnvelope::split(original);
    service
        .translate(envelope.core)
        .await
        .map(|core| envelope.wrap(&core))
}
