//! Default HTTP transport backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use cachet_core::{Headers, HttpResponse, HttpTransport, TransportError};
use reqwest::Client;
use tracing::{debug, warn};

use crate::retry::RetryStrategy;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP transport with timeout and retry handling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    retry_strategy: RetryStrategy,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cachet/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            inner: client,
            retry_strategy: RetryStrategy::default(),
        })
    }

    /// Sets the retry strategy for this client.
    pub fn with_retry_strategy(mut self, strategy: RetryStrategy) -> Self {
        self.retry_strategy = strategy;
        self
    }

    async fn execute(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let mut attempts = 0;
        let max_attempts = self.retry_strategy.max_attempts;

        loop {
            attempts += 1;
            debug!(url = %url, attempt = attempts, "Making GET request");

            match self.inner.get(url).send().await {
                Ok(response) => return materialize(response).await,
                Err(e) => {
                    if attempts < max_attempts && self.retry_strategy.should_retry(&e) {
                        let delay = self.retry_strategy.delay_for_attempt(attempts);
                        warn!(
                            url = %url,
                            error = %e,
                            delay_ms = delay.as_millis() as u64,
                            "Request failed, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(map_error(&e));
                }
            }
        }
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.execute(url).await
    }
}

impl Default for HttpClient {
    /// Creates a default HTTP client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should only happen
    /// if the system's TLS configuration is broken, which indicates a
    /// fundamentally broken environment where the application cannot function.
    fn default() -> Self {
        Self::new().unwrap_or_else(|e| {
            panic!(
                "Failed to create default HTTP client: {}. \
                This usually indicates a broken TLS/SSL configuration.",
                e
            )
        })
    }
}

/// Drains a reqwest response into the owned response value.
async fn materialize(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
    let status = response.status().as_u16();

    let mut headers = Headers::new();
    for (name, value) in response.headers() {
        // Header values that are not valid UTF-8 are dropped.
        if let Ok(value) = value.to_str() {
            headers.append(name.as_str(), value);
        }
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| TransportError::Body(e.to_string()))?
        .to_vec();

    Ok(HttpResponse::new(status, headers, body))
}

/// Maps a reqwest error onto the transport-agnostic error type.
fn map_error(error: &reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else if error.is_builder() {
        TransportError::InvalidUrl(error.to_string())
    } else {
        TransportError::Other(error.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
