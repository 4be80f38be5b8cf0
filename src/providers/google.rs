use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::app_config::TranslationConfig;
use crate::errors::ProviderError;
use crate::providers::Provider;

/// Client for the public `translate_a/single` endpoint
///
/// One GET per call, no retries. The HTTP client carries the timeout, so a
/// hung request surfaces as `ProviderError::Timeout`.
#[derive(Debug)]
pub struct GoogleTranslate {
    /// Full URL of the translation endpoint
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
    /// Value of the `client` query parameter
    client_id: String,
    /// Source language code (`sl`)
    source_language: String,
    /// Target language code (`tl`)
    target_language: String,
}

impl GoogleTranslate {
    /// Create a client for the given endpoint and language pair
    pub fn new(
        endpoint: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        Self::with_options(
            endpoint,
            "gtx",
            "Mozilla/5.0",
            source_language,
            target_language,
            timeout,
        )
    }

    /// Create a client from the translation section of the configuration
    pub fn from_config(config: &TranslationConfig) -> Result<Self, ProviderError> {
        Self::with_options(
            config.endpoint.clone(),
            config.client_id.clone(),
            config.user_agent.clone(),
            config.source_language.clone(),
            config.target_language.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn with_options(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        user_agent: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.into())
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
            client_id: client_id.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        })
    }

    /// Extract the translation from a raw response body
    ///
    /// The body is a nested array whose first element lists segment pairs
    /// `[translated, original, ...]`. Translated segments are concatenated in
    /// order; a segment without a leading string contributes nothing.
    pub fn parse_response(body: &str) -> Result<String, ProviderError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let segments = value
            .as_array()
            .and_then(|top| top.first())
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ProviderError::ParseError("expected an array of segments as the first element".to_string())
            })?;

        Ok(segments
            .iter()
            .map(|segment| {
                segment
                    .as_array()
                    .and_then(|pair| pair.first())
                    .and_then(Value::as_str)
                    .unwrap_or("")
            })
            .collect())
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", self.client_id.as_str()),
                ("sl", self.source_language.as_str()),
                ("tl", self.target_language.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let translated = Self::parse_response(&body)?;
        debug!("{} -> {}: {} chars translated", self.source_language, self.target_language, translated.chars().count());
        Ok(translated)
    }

    fn name(&self) -> &str {
        "google"
    }
}
