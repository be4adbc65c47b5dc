//! Client for the BAN (Base Adresse Nationale) address autocomplete API.
//!
//! The API is an external collaborator: we consume its request/response
//! shape and nothing else. One `GET` per lookup, no retries, no caching,
//! and no timeout beyond whatever the transport defaults to.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Fixed host for the French national address database search endpoint.
const BAN_SEARCH_URL: &str = "https://api-adresse.data.gouv.fr/search/";

/// Number of candidates requested per lookup.
const SUGGESTION_LIMIT: &str = "5";

/// One autocomplete candidate, flattened from a BAN feature's `properties`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddressSuggestion {
    /// Display label, e.g. "1 Rue de la Paix, 75002 Paris".
    pub label: String,
    /// Match quality reported by the API, between 0.0 and 1.0.
    pub score: f64,
    /// Place-type tag (wire name `type`): "housenumber", "street",
    /// "municipality", ...
    #[serde(rename = "type")]
    pub kind: String,
}

/// BAN search response envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: AddressSuggestion,
}

/// Source of address suggestions for a partial query.
///
/// The TUI uses the BAN client; tests substitute their own implementation.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, query: &str) -> ClientResult<Vec<AddressSuggestion>>;
}

/// HTTP client for the BAN search endpoint.
pub struct BanClient {
    http: Client,
}

impl BanClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    fn request(&self, query: &str) -> reqwest::RequestBuilder {
        self.http.get(BAN_SEARCH_URL).query(&[
            ("q", query),
            ("limit", SUGGESTION_LIMIT),
            ("autocomplete", "1"),
        ])
    }
}

impl Default for BanClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuggestionProvider for BanClient {
    async fn suggest(&self, query: &str) -> ClientResult<Vec<AddressSuggestion>> {
        let response = self.request(query).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }

        let body: SearchResponse = response.json().await?;
        Ok(body
            .features
            .into_iter()
            .map(|feature| feature.properties)
            .collect())
    }
}
