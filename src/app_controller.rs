use log::{debug, info};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::providers::Provider;
use crate::providers::google::GoogleTranslate;
use crate::translation::cache::TranslationCache;
use crate::translation::{DocumentPipeline, DocumentStats, TranslationService};

// @module: Application controller for document translation

/// Outcome of one controller run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// File the translated document was written to
    pub output_path: PathBuf,
    pub stats: DocumentStats,
}

/// Main application controller: read, translate, write
pub struct Controller<P: Provider + 'static = GoogleTranslate> {
    // @field: App configuration
    config: Config,
    // @field: Provider shared with every translation task
    provider: Arc<P>,
    // @field: Whether to draw a progress bar
    show_progress: bool,
}

impl Controller<GoogleTranslate> {
    // @method: Create a controller talking to the configured endpoint
    pub fn with_config(mut config: Config) -> Result<Self, AppError> {
        config
            .normalize()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;
        let provider = GoogleTranslate::from_config(&config.translation)?;
        Ok(Self::with_provider(config, provider))
    }
}

impl<P: Provider + 'static> Controller<P> {
    // @method: Create a controller around an existing provider
    pub fn with_provider(config: Config, provider: P) -> Self {
        Self {
            config,
            provider: Arc::new(provider),
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate the configured input document and write the result.
    ///
    /// Provider failures never fail the run; only I/O errors do.
    pub async fn run(&self) -> Result<RunSummary, AppError> {
        let start_time = Instant::now();
        let input_path = &self.config.input_path;
        let output_path = self.config.resolved_output_path();

        let document = FileManager::read_to_string(input_path)
            .map_err(|e| AppError::File(format!("{:#}", e)))?;

        let translation = &self.config.translation;
        info!(
            "Translating {:?} from {} to {} with {} (concurrency {})",
            input_path,
            language_name(&translation.source_language),
            language_name(&translation.target_language),
            self.provider.name(),
            translation.concurrent_requests
        );

        let service = TranslationService::with_cache(
            Arc::clone(&self.provider),
            TranslationCache::new(translation.enable_cache),
        );
        let mut pipeline = DocumentPipeline::new(service, translation.concurrent_requests);

        let progress_bar = self.show_progress.then(create_progress_bar);
        if let Some(progress_bar) = &progress_bar {
            let pb = progress_bar.clone();
            pipeline = pipeline.with_progress(move |progress| {
                pb.set_length(progress.total as u64);
                pb.set_position(progress.completed as u64);
            });
        }

        let report = pipeline.translate_document(&document).await;

        if let Some(progress_bar) = progress_bar {
            progress_bar.finish_and_clear();
        }

        let (hits, misses, _) = pipeline.service().cache().stats();
        debug!("Cache: {} hits, {} misses", hits, misses);

        FileManager::write_to_file(&output_path, &report.text())
            .map_err(|e| AppError::File(format!("{:#}", e)))?;

        let stats = report.stats();
        info!("{} in {}", stats, format_duration(start_time.elapsed()));

        Ok(RunSummary { output_path, stats })
    }
}

fn language_name(code: &str) -> String {
    language_utils::get_language_name(code).unwrap_or_else(|_| code.to_string())
}

fn create_progress_bar() -> ProgressBar {
    let progress_bar = ProgressBar::new(0);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({percent}%) {eta}")
        .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%)"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress_bar.set_style(style.progress_chars("=> "));
    progress_bar
}

fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    if total_secs >= 60 {
        format!("{}m {}s", total_secs / 60, total_secs % 60)
    } else {
        format!("{:.1}s", duration.as_secs_f64())
    }
}
