/*!
 * Core document model types.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::translation::core::TranslationOutcome;

/// Unit separator. A preceding `\r` stays in the unit as trailing whitespace.
const UNIT_SEPARATOR: char = '\n';

/// Split a document into its ordered text units.
///
/// The empty document is a single empty unit, so splitting and joining is
/// lossless for every input.
pub fn split_units(document: &str) -> Vec<String> {
    document.split(UNIT_SEPARATOR).map(str::to_string).collect()
}

/// Reassemble units produced by `split_units`.
pub fn join_units<S: AsRef<str>>(units: &[S]) -> String {
    let capacity = units.iter().map(|u| u.as_ref().len() + 1).sum();
    let mut document = String::with_capacity(capacity);
    for (index, unit) in units.iter().enumerate() {
        if index > 0 {
            document.push(UNIT_SEPARATOR);
        }
        document.push_str(unit.as_ref());
    }
    document
}

/// What happened to a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    /// Not a translation candidate, copied verbatim
    Skipped,
    /// Translated by the provider
    Translated,
    /// Sent for translation, but the original text was kept
    Fallback,
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Skipped => "skipped",
            Self::Translated => "translated",
            Self::Fallback => "fallback",
        };
        write!(f, "{}", label)
    }
}

/// The result for one position of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedUnit {
    /// Position in the original sequence
    pub index: usize,
    /// Text to emit at this position
    pub text: String,
    pub status: UnitStatus,
}

impl TranslatedUnit {
    pub fn skipped(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            status: UnitStatus::Skipped,
        }
    }

    pub fn fallback(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            status: UnitStatus::Fallback,
        }
    }

    pub fn from_outcome(index: usize, outcome: TranslationOutcome) -> Self {
        match outcome {
            TranslationOutcome::Translated(text) => Self {
                index,
                text,
                status: UnitStatus::Translated,
            },
            TranslationOutcome::Fallback(text) => Self::fallback(index, text),
        }
    }
}

/// Counts per unit status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub total: usize,
    pub skipped: usize,
    pub translated: usize,
    pub fallback: usize,
}

impl fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines: {} translated, {} kept after provider failure, {} skipped",
            self.total, self.translated, self.fallback, self.skipped
        )
    }
}

/// Ordered translation results for a whole document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub units: Vec<TranslatedUnit>,
}

impl DocumentReport {
    pub fn new(units: Vec<TranslatedUnit>) -> Self {
        Self { units }
    }

    /// The translated document text
    pub fn text(&self) -> String {
        let texts: Vec<&str> = self.units.iter().map(|u| u.text.as_str()).collect();
        join_units(&texts)
    }

    pub fn stats(&self) -> DocumentStats {
        self.units.iter().fold(
            DocumentStats {
                total: self.units.len(),
                ..DocumentStats::default()
            },
            |mut stats, unit| {
                match unit.status {
                    UnitStatus::Skipped => stats.skipped += 1,
                    UnitStatus::Translated => stats.translated += 1,
                    UnitStatus::Fallback => stats.fallback += 1,
                }
                stats
            },
        )
    }
}
