/*!
 * Document pipeline orchestrator.
 *
 * Walks the units of a document in order. Units that pass the classifier
 * are submitted to a fresh `Scheduler`; everything else is copied into its
 * output slot immediately. Results are written back by original index, so
 * completion order never affects the output.
 */

use futures::future::join_all;
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::providers::Provider;
use crate::translation::classifier;
use crate::translation::core::TranslationService;
use crate::translation::document::{DocumentReport, TranslatedUnit, split_units};
use crate::translation::formatting::translate_preserving_whitespace;
use crate::translation::scheduler::Scheduler;

/// Default admission limit for concurrent provider calls
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Progress of the translation tasks of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineProgress {
    /// Tasks finished so far
    pub completed: usize,
    /// Tasks submitted in this run
    pub total: usize,
}

type ProgressCallback = Arc<dyn Fn(PipelineProgress) + Send + Sync>;

/// Translates ordered text units with bounded concurrency
pub struct DocumentPipeline<P: Provider + 'static> {
    service: Arc<TranslationService<P>>,
    concurrency: usize,
    progress: Option<ProgressCallback>,
}

impl<P: Provider + 'static> DocumentPipeline<P> {
    pub fn new(service: TranslationService<P>, concurrency: usize) -> Self {
        Self::with_service(Arc::new(service), concurrency)
    }

    pub fn with_service(service: Arc<TranslationService<P>>, concurrency: usize) -> Self {
        Self {
            service,
            concurrency: concurrency.max(1),
            progress: None,
        }
    }

    /// Report task completion through `callback`.
    ///
    /// The callback is invoked once with `completed == 0` after all tasks are
    /// submitted, then once per finished task.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(PipelineProgress) + Send + Sync + 'static,
    {
        self.progress = Some(Arc::new(callback));
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn service(&self) -> &TranslationService<P> {
        &self.service
    }

    /// Translate a whole document, splitting it into lines.
    pub async fn translate_document(&self, document: &str) -> DocumentReport {
        let units = split_units(document);
        DocumentReport::new(self.translate_units(&units).await)
    }

    /// Translate `units`, returning exactly one result per input position.
    pub async fn translate_units(&self, units: &[String]) -> Vec<TranslatedUnit> {
        let start_time = Instant::now();
        let scheduler = Scheduler::new(self.concurrency);
        let mut slots: Vec<Option<TranslatedUnit>> = vec![None; units.len()];
        let mut handles = Vec::new();

        for (index, unit) in units.iter().enumerate() {
            if !classifier::needs_translation(unit) {
                slots[index] = Some(TranslatedUnit::skipped(index, unit.as_str()));
                continue;
            }

            let service = Arc::clone(&self.service);
            let original = unit.clone();
            let handle = scheduler.submit(async move {
                translate_preserving_whitespace(&*service, &original).await
            });
            handles.push((index, handle));
        }

        let total = handles.len();
        debug!(
            "Submitted {} of {} lines for translation (limit {})",
            total,
            units.len(),
            scheduler.limit()
        );

        let completed = Arc::new(AtomicUsize::new(0));
        if let Some(progress) = &self.progress {
            progress(PipelineProgress { completed: 0, total });
        }

        let results = join_all(handles.into_iter().map(|(index, handle)| {
            let completed = completed.clone();
            let progress = self.progress.clone();
            async move {
                let result = handle.await;
                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                if let Some(progress) = progress {
                    progress(PipelineProgress { completed: done, total });
                }
                (index, result)
            }
        }))
        .await;

        for (index, result) in results {
            let unit = match result {
                Ok(outcome) => TranslatedUnit::from_outcome(index, outcome),
                Err(e) => {
                    warn!("Line {}: {}, keeping original text", index + 1, e);
                    TranslatedUnit::fallback(index, units[index].as_str())
                }
            };
            slots[index] = Some(unit);
        }

        let translated: Vec<TranslatedUnit> = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.unwrap_or_else(|| TranslatedUnit::fallback(index, units[index].as_str())))
            .collect();

        info!(
            "Translated {} lines in {:.2?} ({} provider tasks)",
            units.len(),
            start_time.elapsed(),
            total
        );

        translated
    }
}
