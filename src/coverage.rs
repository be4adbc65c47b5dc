//! Wire types and client for the coverage backend.
//!
//! The backend takes an address and reports, per operator, whether 2G/3G/4G
//! service is available there. Like the geocoding API it is an external
//! collaborator: one `POST` per check, no retries, no caching, transport
//! default timeouts only.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{ClientError, ClientResult};

/// Default base URL of the coverage backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Availability of one operator's network at an address, by generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OperatorCoverage {
    #[serde(rename = "2G")]
    pub two_g: bool,
    #[serde(rename = "3G")]
    pub three_g: bool,
    #[serde(rename = "4G")]
    pub four_g: bool,
}

impl OperatorCoverage {
    /// Generation tags paired with availability, in display order.
    pub fn generations(&self) -> [(&'static str, bool); 3] {
        [("2G", self.two_g), ("3G", self.three_g), ("4G", self.four_g)]
    }
}

/// Coverage record for one address: the four national operators.
///
/// Field names follow the backend's JSON keys, capitalization included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AddressCoverage {
    pub orange: OperatorCoverage,
    #[serde(rename = "SFR")]
    pub sfr: OperatorCoverage,
    pub bouygues: OperatorCoverage,
    #[serde(rename = "Free")]
    pub free: OperatorCoverage,
}

impl AddressCoverage {
    /// Operator display names paired with their coverage, in display order.
    pub fn operators(&self) -> [(&'static str, OperatorCoverage); 4] {
        [
            ("Orange", self.orange),
            ("SFR", self.sfr),
            ("Bouygues", self.bouygues),
            ("Free", self.free),
        ]
    }
}

/// Mapping from address label to its coverage record, as returned by the
/// backend. A `BTreeMap` keeps rendering order stable between frames.
pub type CoverageResults = BTreeMap<String, AddressCoverage>;

/// The backend accepts a mapping of identifiers to addresses but the
/// client only ever sends one address, always under this key.
fn payload(address: &str) -> serde_json::Value {
    json!({ "id1": address })
}

/// Source of coverage reports for a chosen address.
#[async_trait]
pub trait CoverageProvider: Send + Sync {
    async fn check(&self, address: &str) -> ClientResult<CoverageResults>;
}

/// HTTP client for the coverage backend.
pub struct CoverageClient {
    http: Client,
    base_url: String,
}

impl CoverageClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/coverage", self.base_url)
    }
}

#[async_trait]
impl CoverageProvider for CoverageClient {
    async fn check(&self, address: &str) -> ClientResult<CoverageResults> {
        let response = self
            .http
            .post(self.endpoint())
            .json(&payload(address))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }

        Ok(response.json().await?)
    }
}
