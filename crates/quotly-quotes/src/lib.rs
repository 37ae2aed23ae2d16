// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! API-Ninjas quote provider adapter for the Quotly bot.
//!
//! Implements [`QuoteProvider`] over the API-Ninjas `/v1/quotes` endpoint
//! via [`QuoteClient`], applying the configured default category when the
//! caller does not name one.

pub mod client;
pub mod types;

use async_trait::async_trait;
use quotly_config::model::QuotesConfig;
use quotly_core::{
    AdapterType, HealthStatus, PluginAdapter, Quote, QuoteProvider, QuotlyError,
};

pub use client::QuoteClient;

/// Quote provider backed by the API-Ninjas quotes endpoint.
pub struct ApiNinjasProvider {
    client: QuoteClient,
    default_category: String,
}

impl ApiNinjasProvider {
    /// Creates the provider from configuration.
    ///
    /// Requires `config.api_key` to be set.
    pub fn new(config: &QuotesConfig) -> Result<Self, QuotlyError> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            QuotlyError::Config("quotes.api_key is required for the quote provider".into())
        })?;

        if api_key.is_empty() {
            return Err(QuotlyError::Config("quotes.api_key cannot be empty".into()));
        }

        let client = QuoteClient::new(api_key, &config.base_url, config.timeout_secs)?;

        Ok(Self {
            client,
            default_category: config.default_category.clone(),
        })
    }
}

#[async_trait]
impl PluginAdapter for ApiNinjasProvider {
    fn name(&self) -> &str {
        "api-ninjas"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, QuotlyError> {
        // No free ping endpoint; the client is healthy once constructed.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), QuotlyError> {
        Ok(())
    }
}

#[async_trait]
impl QuoteProvider for ApiNinjasProvider {
    async fn fetch_quote(&self, category: Option<&str>) -> Result<Quote, QuotlyError> {
        let category = category.unwrap_or(&self.default_category);
        self.client.fetch(category).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> QuotesConfig {
        QuotesConfig {
            api_key: Some("test-key".into()),
            base_url: base_url.to_string(),
            default_category: "happiness".into(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn new_requires_api_key() {
        let config = QuotesConfig {
            api_key: None,
            ..QuotesConfig::default()
        };
        assert!(ApiNinjasProvider::new(&config).is_err());
    }

    #[test]
    fn new_rejects_empty_api_key() {
        let config = QuotesConfig {
            api_key: Some(String::new()),
            ..QuotesConfig::default()
        };
        assert!(ApiNinjasProvider::new(&config).is_err());
    }

    #[test]
    fn plugin_adapter_metadata() {
        let provider = ApiNinjasProvider::new(&test_config("http://localhost")).unwrap();
        assert_eq!(provider.name(), "api-ninjas");
        assert_eq!(provider.adapter_type(), AdapterType::Provider);
    }

    #[tokio::test]
    async fn fetch_quote_applies_default_category() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("category", "happiness"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"quote": "Q", "author": "A", "category": "happiness"}
            ])))
            .mount(&server)
            .await;

        let provider = ApiNinjasProvider::new(&test_config(&server.uri())).unwrap();
        let quote = provider.fetch_quote(None).await.unwrap();
        assert_eq!(quote.text, "Q");
    }

    #[tokio::test]
    async fn fetch_quote_passes_explicit_category() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("category", "courage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"quote": "Q2", "author": "A2", "category": "courage"}
            ])))
            .mount(&server)
            .await;

        let provider = ApiNinjasProvider::new(&test_config(&server.uri())).unwrap();
        let quote = provider.fetch_quote(Some("courage")).await.unwrap();
        assert_eq!(quote.category, "courage");
    }
}
