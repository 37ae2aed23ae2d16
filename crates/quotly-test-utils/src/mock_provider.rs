// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock quote provider for deterministic testing.
//!
//! `MockQuoteProvider` implements `QuoteProvider` with pre-configured
//! results, enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use quotly_core::traits::adapter::PluginAdapter;
use quotly_core::traits::provider::QuoteProvider;
use quotly_core::types::{AdapterType, HealthStatus, Quote};
use quotly_core::QuotlyError;

/// A mock quote provider that returns pre-configured results.
///
/// Results are popped from a FIFO queue. When the queue is empty, a default
/// canned quote is returned.
pub struct MockQuoteProvider {
    responses: Arc<Mutex<VecDeque<Result<Quote, QuotlyError>>>>,
    fetch_count: AtomicUsize,
}

impl MockQuoteProvider {
    /// Create a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fetch_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock provider pre-loaded with the given quotes.
    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        let queue: VecDeque<Result<Quote, QuotlyError>> =
            quotes.into_iter().map(Ok).collect();
        Self {
            responses: Arc::new(Mutex::new(queue)),
            fetch_count: AtomicUsize::new(0),
        }
    }

    /// Queue a successful fetch result.
    pub async fn push_quote(&self, quote: Quote) {
        self.responses.lock().await.push_back(Ok(quote));
    }

    /// Queue a failed fetch result.
    pub async fn push_failure(&self) {
        self.responses.lock().await.push_back(Err(QuotlyError::Provider {
            message: "scripted provider failure".into(),
            source: None,
        }));
    }

    /// Number of fetches attempted against this provider.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::Relaxed)
    }

    fn default_quote(category: Option<&str>) -> Quote {
        Quote {
            text: "mock quote".to_string(),
            author: "Mock Author".to_string(),
            category: category.unwrap_or("happiness").to_string(),
        }
    }
}

impl Default for MockQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockQuoteProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, QuotlyError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), QuotlyError> {
        Ok(())
    }
}

#[async_trait]
impl QuoteProvider for MockQuoteProvider {
    async fn fetch_quote(&self, category: Option<&str>) -> Result<Quote, QuotlyError> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        match self.responses.lock().await.pop_front() {
            Some(result) => result,
            None => Ok(Self::default_quote(category)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(text: &str) -> Quote {
        Quote {
            text: text.into(),
            author: "A".into(),
            category: "C".into(),
        }
    }

    #[tokio::test]
    async fn returns_queued_quotes_in_order() {
        let provider = MockQuoteProvider::with_quotes(vec![quote("one"), quote("two")]);
        assert_eq!(provider.fetch_quote(None).await.unwrap().text, "one");
        assert_eq!(provider.fetch_quote(None).await.unwrap().text, "two");
    }

    #[tokio::test]
    async fn returns_default_when_queue_empty() {
        let provider = MockQuoteProvider::new();
        let quote = provider.fetch_quote(Some("stoicism")).await.unwrap();
        assert_eq!(quote.text, "mock quote");
        assert_eq!(quote.category, "stoicism");
    }

    #[tokio::test]
    async fn scripted_failure_surfaces_as_provider_error() {
        let provider = MockQuoteProvider::new();
        provider.push_failure().await;
        let err = provider.fetch_quote(None).await.unwrap_err();
        assert!(matches!(err, QuotlyError::Provider { .. }));
    }

    #[tokio::test]
    async fn fetch_count_tracks_attempts() {
        let provider = MockQuoteProvider::new();
        assert_eq!(provider.fetch_count(), 0);
        provider.fetch_quote(None).await.unwrap();
        provider.push_failure().await;
        let _ = provider.fetch_quote(None).await;
        assert_eq!(provider.fetch_count(), 2);
    }
}
