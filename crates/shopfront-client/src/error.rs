//! # API Error Types
//!
//! The remote half of the error taxonomy. Local checkout/validation
//! errors live in `shopfront_core::error`; everything here crossed the
//! network (or tried to).
//!
//! ## Tagged Results, Not Status Codes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              "fetch-then-branch-on-404" as a pattern match              │
//! │                                                                         │
//! │  match client.fetch_my_page(&session).await {                          │
//! │      Ok(page) => Ready(page),                                          │
//! │      Err(ApiError::NotFound { .. }) => NoPageYet,   // not an error    │
//! │      Err(other) => Failed(other.reason()),          // real failure    │
//! │  }                                                                      │
//! │                                                                         │
//! │  Callers never inspect raw status codes.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The checkout flow does NOT distinguish remote sub-kinds: any
//! [`ApiError`] from the Order Sink folds into one `Failed(reason)` with
//! a retry available. The variants exist for the callers that do care
//! (dashboard 404 handling, login 401 messaging).

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// A failure from the backend API or the transport underneath it.
///
/// ## Design Principles
/// - `NotFound` is its own variant so callers can treat it as a state,
///   not an error (the dashboard's "no page yet")
/// - Every variant renders to a human-readable reason for the UI
/// - Remote errors are retryable by resubmitting; nothing here requires
///   the user to lose local state
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The resource does not exist (HTTP 404).
    #[error("{detail}")]
    NotFound { detail: String },

    /// Authentication missing, expired, or insufficient (HTTP 401/403).
    #[error("{detail}")]
    Unauthorized { detail: String },

    /// The backend rejected the request (any other non-2xx status).
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// The request never completed (DNS, connect, timeout, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The response arrived but was not the JSON we expected.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// The client itself is misconfigured (bad base URL, ...).
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Checks whether this is the 404 case callers branch on.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// The human-readable reason surfaced to the user.
    ///
    /// Checkout folds every remote failure through this: one generic,
    /// readable string with retry available.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
