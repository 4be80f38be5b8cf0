/*!
 * Translation of Russian text units into Kazakh.
 *
 * - `classifier`: decides which units are sent to the provider
 * - `core`: best-effort translation service with fallback outcomes
 * - `formatting`: whitespace envelope preservation
 * - `scheduler`: bounded FIFO task scheduler
 * - `document`: units, per-unit results and run statistics
 * - `pipeline`: orchestration over a whole document
 * - `cache`: per-run translation cache
 */

pub use self::core::{TranslationOutcome, TranslationService};
pub use self::document::{DocumentReport, DocumentStats, TranslatedUnit, UnitStatus};
pub use self::pipeline::{DocumentPipeline, PipelineProgress};
pub use self::scheduler::{Scheduler, TaskHandle};

pub mod cache;
pub mod classifier;
pub mod core;
pub mod document;
pub mod formatting;
pub mod pipeline;
pub mod scheduler;
