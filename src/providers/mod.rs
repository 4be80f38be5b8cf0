/*!
 * Provider implementations for remote translation capabilities.
 *
 * - `google`: the public `translate_a/single` endpoint used in production
 * - `mock`: an in-process provider for tests and benchmarks
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers
///
/// A provider is configured for one fixed language pair. It reports failures
/// as `ProviderError`; turning those into a fallback is the job of
/// `TranslationService`, not of the provider.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate `text`, returning the translated text or an error
    async fn translate(&self, text: &str) -> Result<String, ProviderError>;

    /// Short identifier used in log output
    fn name(&self) -> &str;
}

pub mod google;
pub mod mock;
