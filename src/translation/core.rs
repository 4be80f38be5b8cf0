/*!
 * Core translation service.
 *
 * `TranslationService` sits between the pipeline and a `Provider`. It never
 * fails: provider errors are absorbed here and reported as a fallback
 * outcome carrying the original text.
 */

use log::debug;
use std::sync::Arc;

use crate::providers::Provider;

use super::cache::TranslationCache;

/// Result of translating one piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// The provider returned a translation
    Translated(String),
    /// The provider failed; this is the original text, unchanged
    Fallback(String),
}

impl TranslationOutcome {
    /// The text to use, whichever way the translation went
    pub fn text(&self) -> &str {
        match self {
            Self::Translated(text) | Self::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Translated(text) | Self::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Apply `f` to the carried text, keeping the variant
    pub fn map(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            Self::Translated(text) => Self::Translated(f(text)),
            Self::Fallback(text) => Self::Fallback(f(text)),
        }
    }
}

/// Best-effort translation on top of a provider
#[derive(Debug)]
pub struct TranslationService<P: Provider> {
    provider: Arc<P>,
    cache: TranslationCache,
}

impl<P: Provider> TranslationService<P> {
    pub fn new(provider: P) -> Self {
        Self::with_cache(Arc::new(provider), TranslationCache::new(false))
    }

    /// Create a service sharing an existing provider and cache
    pub fn with_cache(provider: Arc<P>, cache: TranslationCache) -> Self {
        Self { provider, cache }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Translate `text`, falling back to the input on any provider failure
    pub async fn translate(&self, text: &str) -> TranslationOutcome {
        if text.is_empty() {
            return TranslationOutcome::Translated(String::new());
        }

        if let Some(cached) = self.cache.get(text) {
            return TranslationOutcome::Translated(cached);
        }

        match self.provider.translate(text).await {
            Ok(translated) => {
                self.cache.store(text, &translated);
                TranslationOutcome::Translated(translated)
            }
            Err(e) => {
                debug!("{} failed, keeping original text: {}", self.provider.name(), e);
                TranslationOutcome::Fallback(text.to_string())
            }
        }
    }
}
