//! HTTP backend abstraction.
//!
//! The clients are generic over [`HttpBackend`] so tests can swap in
//! [`testing::FakeBackend`]. The production implementation uses reqwest with
//! automatic retry for transient errors.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{NetError, NetResult};
use crate::models::NetSettings;

/// `Accept` value preferred by weather.gov.
pub const GEO_JSON: &str = "application/geo+json";

/// `Accept` value for plain JSON APIs.
pub const JSON: &str = "application/json";

/// Upper bound on the wait between two attempts.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

/// Delay before retry `attempt` (1-based): `base * 2^(attempt - 1)`, capped.
fn backoff_delay(base_ms: u64, attempt: u8) -> Duration {
    let factor = 2u64.saturating_pow(u32::from(attempt.saturating_sub(1)));
    Duration::from_millis(base_ms.saturating_mul(factor)).min(MAX_RETRY_DELAY)
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> NetResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Retries server errors (5xx) and network errors with exponential backoff.
/// Client errors (4xx) fail immediately.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a backend that sends `accept` as the `Accept` header.
    pub fn new(settings: &NetSettings, accept: &'static str) -> NetResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(accept));

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            max_retries: settings.max_retries,
            retry_base_delay_ms: settings.retry_base_delay_ms,
        })
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> NetResult<reqwest::Response> {
        let mut last_error: Option<NetError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(self.retry_base_delay_ms, attempt);
                warn!(%url, attempt, ?delay, "Retrying request");
                tokio::time::sleep(delay).await;
            }

            debug!(%url, "GET");
            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(NetError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(NetError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| NetError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> NetResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(Into::into)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
