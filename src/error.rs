//! Error types shared by the HTTP API clients.

use thiserror::Error;

/// Result type for API client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Failure of a geocoding or coverage request.
///
/// The clients do not classify errors finely: anything that is not a
/// successful response collapses into one of these two variants. Callers
/// decide whether the failure is surfaced (coverage check) or silently
/// degraded (suggestion lookup).
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl ClientError {
    /// Capture a non-success response, preserving the status line and body
    /// text for diagnostics.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ClientError::Status { status, body }
    }

    /// True when the failure carries an HTTP status (as opposed to a
    /// transport-level failure that never produced a response).
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}
