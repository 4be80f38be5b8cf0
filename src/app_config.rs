//! Application configuration.
//!
//! Holds the run parameters: where the document comes from and goes to, and
//! how the provider is reached. Every field has a default, so a partial JSON
//! file is a valid configuration.

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use url::Url;

use crate::file_utils::FileManager;
use crate::language_utils;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Document to translate
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Where to write the result; defaults to a sibling of the input
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Provider and scheduling parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationConfig {
    /// Source language code (ISO 639-1)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO 639-1)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Machine-translation client identifier sent with every request
    #[serde(default = "default_client_id")]
    pub client_id: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Max concurrent requests
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,

    /// Reuse translations of identical lines within one run
    #[serde(default = "default_true")]
    pub enable_cache: bool,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_source_language() -> String {
    "ru".to_string()
}

fn default_target_language() -> String {
    "kk".to_string()
}

fn default_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_client_id() -> String {
    "gtx".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_concurrent_requests() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load a configuration file; missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.translation.validate()
    }

    /// Replace language codes by their normalized form, then validate
    pub fn normalize(&mut self) -> Result<()> {
        self.translation.normalize()
    }

    /// Output path, falling back to `<stem>.<target>.<ext>` next to the input
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => FileManager::generate_output_path(&self.input_path, &self.translation.target_language),
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: default_input_path(),
            output_path: None,
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl TranslationConfig {
    /// Store the trimmed, lower-cased language codes that are sent on the wire
    pub fn normalize(&mut self) -> Result<()> {
        self.source_language = language_utils::validate_language_code(&self.source_language)?;
        self.target_language = language_utils::validate_language_code(&self.target_language)?;
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        language_utils::validate_language_code(&self.source_language)?;
        language_utils::validate_language_code(&self.target_language)?;
        if language_utils::language_codes_match(&self.source_language, &self.target_language) {
            return Err(anyhow!(
                "Source and target language are the same: {}",
                self.source_language
            ));
        }

        let endpoint = Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", self.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(anyhow!("Endpoint must use http or https: {}", self.endpoint));
        }

        if self.concurrent_requests == 0 {
            return Err(anyhow!("concurrent_requests must be at least 1"));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be at least 1"));
        }

        Ok(())
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            endpoint: default_endpoint(),
            client_id: default_client_id(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            concurrent_requests: default_concurrent_requests(),
            enable_cache: default_true(),
        }
    }
}
