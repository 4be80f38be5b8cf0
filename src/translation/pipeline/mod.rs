/*!
 * Document translation pipeline.
 *
 * Ties the classifier, the whitespace-preserving segmenter and the bounded
 * scheduler together over an ordered sequence of lines.
 */

pub mod orchestrator;

pub use orchestrator::{DEFAULT_CONCURRENCY, DocumentPipeline, PipelineProgress};
