// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quote provider trait for external quotation APIs.

use async_trait::async_trait;

use crate::error::QuotlyError;
use crate::traits::adapter::PluginAdapter;
use crate::types::Quote;

/// Adapter for external quote provider integrations.
///
/// Provider adapters fetch a single quote over HTTP. Any non-success
/// status, transport error, or malformed body surfaces as
/// [`QuotlyError::Provider`](crate::error::QuotlyError::Provider); the
/// dispatcher recovers locally with an apology reply.
#[async_trait]
pub trait QuoteProvider: PluginAdapter {
    /// Fetches one quote, optionally constrained to a category.
    ///
    /// `None` selects the provider's configured default category.
    async fn fetch_quote(&self, category: Option<&str>) -> Result<Quote, QuotlyError>;
}
