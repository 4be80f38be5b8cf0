/*!
 * Document model for line-oriented translation.
 *
 * A document is an ordered sequence of text units (lines). Translation
 * produces exactly one `TranslatedUnit` per input position.
 */

pub mod model;

pub use model::{DocumentReport, DocumentStats, TranslatedUnit, UnitStatus, join_units, split_units};
