/*!
 * # ru2kz - Russian to Kazakh document translator
 *
 * Translates the Russian text embedded in a line-oriented document (HTML,
 * Markdown, plain text) into Kazakh while leaving its layout untouched.
 *
 * ## Features
 *
 * - Line-level translatability heuristics: URLs, emails, numbers and pure
 *   Latin text are never sent out
 * - Exact whitespace preservation around every translated line
 * - Bounded, FIFO-ordered concurrency against the remote service
 * - Best-effort translation: a failing request keeps the original line
 *
 * ## Architecture
 *
 * - `app_config`: Configuration management
 * - `translation`: the translation pipeline:
 *   - `translation::classifier`: which lines to translate
 *   - `translation::core`: best-effort translation service
 *   - `translation::formatting`: whitespace envelope preservation
 *   - `translation::scheduler`: bounded task scheduler
 *   - `translation::pipeline`: document orchestration
 * - `providers`: remote translation providers
 * - `app_controller`: read, translate, write
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use errors::{AppError, ProviderError, SchedulerError};
pub use providers::Provider;
pub use translation::{DocumentPipeline, DocumentReport, TranslationOutcome, TranslationService};
