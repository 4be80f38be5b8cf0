/*!
 * Mock provider implementation for testing.
 *
 * - `MockProvider::working()` - Always succeeds with a tagged copy of the input
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::intermittent(n)` - Fails every n-th request
 * - `MockProvider::jittered(ms)` - Succeeds after a random delay up to `ms`
 *
 * The provider also tracks how many requests are in flight, so tests can
 * check that the scheduler never exceeds its admission limit.
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Sleeps for a fixed time before succeeding
    Slow { delay_ms: u64 },
    /// Sleeps for a random time in `0..=max_delay_ms` before succeeding
    Jittered { max_delay_ms: u64 },
}

type Responder = Arc<dyn Fn(&str) -> Result<String, ProviderError> + Send + Sync>;

/// Mock provider for testing translation behavior
#[derive(Clone)]
pub struct MockProvider {
    behavior: MockBehavior,
    request_count: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
    responder: Option<Responder>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            peak_in_flight: Arc::new(AtomicUsize::new(0)),
            responder: None,
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every: fail_every.max(1) })
    }

    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    pub fn jittered(max_delay_ms: u64) -> Self {
        Self::new(MockBehavior::Jittered { max_delay_ms })
    }

    /// Answer from a fixed table; texts missing from the table fail
    pub fn with_table<K, V>(mut self, table: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table: HashMap<String, String> = table
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.responder = Some(Arc::new(move |text: &str| {
            table
                .get(text)
                .cloned()
                .ok_or_else(|| ProviderError::RequestFailed(format!("no mock translation for '{}'", text)))
        }));
        self
    }

    /// Use a custom response generator
    pub fn with_responder<F>(mut self, responder: F) -> Self
    where
        F: Fn(&str) -> Result<String, ProviderError> + Send + Sync + 'static,
    {
        self.responder = Some(Arc::new(responder));
        self
    }

    /// Number of `translate` calls received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Highest number of simultaneously running `translate` calls observed
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn respond(&self, text: &str) -> Result<String, ProviderError> {
        match &self.responder {
            Some(responder) => responder(text),
            None => Ok(format!("[kk] {}", text)),
        }
    }
}

impl fmt::Debug for MockProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockProvider")
            .field("behavior", &self.behavior)
            .field("request_count", &self.request_count())
            .field("custom_responder", &self.responder.is_some())
            .finish()
    }
}

/// Decrements the in-flight counter even if the call is cancelled
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
        let _in_flight = InFlight(&self.in_flight);

        match self.behavior {
            MockBehavior::Working => self.respond(text),

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated failure on request {}", count + 1),
                    })
                } else {
                    self.respond(text)
                }
            }

            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "Simulated provider failure".to_string(),
            )),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                self.respond(text)
            }

            MockBehavior::Jittered { max_delay_ms } => {
                let delay_ms = rand::random_range(0..=max_delay_ms);
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                self.respond(text)
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
