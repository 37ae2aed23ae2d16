// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the API-Ninjas quotes endpoint.
//!
//! Handles request construction, API-key authentication, an explicit
//! request timeout, and transient error retry.

use std::time::Duration;

use quotly_core::{Quote, QuotlyError};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::ApiQuote;

/// HTTP client for the quote provider.
///
/// Manages the `X-Api-Key` header, connection pooling, and retry logic for
/// transient errors (429, 500, 503).
#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl QuoteClient {
    /// Creates a new quote API client.
    ///
    /// # Arguments
    /// * `api_key` - provider API key sent as `X-Api-Key`
    /// * `base_url` - endpoint URL (e.g. `https://api.api-ninjas.com/v1/quotes`)
    /// * `timeout_secs` - per-request timeout
    pub fn new(api_key: &str, base_url: &str, timeout_secs: u64) -> Result<Self, QuotlyError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Api-Key",
            HeaderValue::from_str(api_key)
                .map_err(|e| QuotlyError::Config(format!("invalid API key header value: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| QuotlyError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            max_retries: 1,
        })
    }

    /// Fetches one quote for the given category.
    ///
    /// On transient errors (429, 500, 503), retries once after a 1-second
    /// delay. Any other failure -- transport error, non-2xx status, empty or
    /// malformed body -- is a provider error.
    pub async fn fetch(&self, category: &str) -> Result<Quote, QuotlyError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying quote fetch after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .get(&self.base_url)
                .query(&[("category", category)])
                .send()
                .await
                .map_err(|e| QuotlyError::Provider {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, category, "quote response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| QuotlyError::Provider {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let quotes: Vec<ApiQuote> =
                    serde_json::from_str(&body).map_err(|e| QuotlyError::Provider {
                        message: format!("failed to parse API response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                return quotes
                    .into_iter()
                    .next()
                    .map(Quote::from)
                    .ok_or_else(|| QuotlyError::Provider {
                        message: format!("API returned no quotes for category `{category}`"),
                        source: None,
                    });
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(QuotlyError::Provider {
                    message: format!("API returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            return Err(QuotlyError::Provider {
                message: format!("API returned {status}: {body}"),
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| QuotlyError::Provider {
            message: "quote fetch failed after retries".into(),
            source: None,
        }))
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
