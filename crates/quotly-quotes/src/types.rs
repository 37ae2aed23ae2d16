// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the quote provider API.

use quotly_core::Quote;
use serde::Deserialize;

/// One element of the provider's JSON response array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiQuote {
    pub quote: String,
    pub author: String,
    pub category: String,
}

impl From<ApiQuote> for Quote {
    fn from(api: ApiQuote) -> Self {
        Quote {
            text: api.quote,
            author: api.author,
            category: api.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_quote_deserializes_from_provider_json() {
        let json = r#"[{"quote": "Q", "author": "A", "category": "happiness"}]"#;
        let quotes: Vec<ApiQuote> = serde_json::from_str(json).unwrap();
        assert_eq!(quotes.len(), 1);
        let quote: Quote = quotes.into_iter().next().unwrap().into();
        assert_eq!(quote.text, "Q");
        assert_eq!(quote.author, "A");
        assert_eq!(quote.category, "happiness");
    }
}
