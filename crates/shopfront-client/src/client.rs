//! # HTTP Client Core
//!
//! The shared request plumbing behind every API call: URL joining,
//! bearer auth, JSON bodies, and the status-to-error mapping that turns
//! raw HTTP responses into the tagged [`ApiError`] taxonomy.
//!
//! ## Response Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Status → ApiError Mapping                           │
//! │                                                                         │
//! │  2xx ──────────► deserialize body ──► Ok(T)                            │
//! │                        │ (bad JSON)                                     │
//! │                        └────────────► Err(Decode)                      │
//! │                                                                         │
//! │  404 ──────────► Err(NotFound { detail })                              │
//! │  401 / 403 ────► Err(Unauthorized { detail })                          │
//! │  other non-2xx ► Err(Rejected { status, detail })                      │
//! │                                                                         │
//! │  no response ──► Err(Network)                                          │
//! │                                                                         │
//! │  `detail` comes from the backend's {"detail": "..."} error body,       │
//! │  falling back to the status line when the body is not that shape.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::AuthSession;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// The backend's error body shape.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// HTTP client for the Shopfront backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a client from the given configuration.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig(format!("Failed to build HTTP client: {}", e)))?;
        Ok(ApiClient { http, config })
    }

    /// Creates a client from environment configuration.
    pub fn from_env() -> ApiResult<Self> {
        ApiClient::new(ApiConfig::from_env()?)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ===== Request Builders =====

    fn authed(builder: RequestBuilder, session: Option<&AuthSession>) -> RequestBuilder {
        match session {
            Some(session) => builder.bearer_auth(session.token()),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&AuthSession>,
    ) -> ApiResult<T> {
        let url = self.config.endpoint(path);
        debug!(method = "GET", %url, "API request");
        let response = Self::authed(self.http.get(&url), session).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        session: Option<&AuthSession>,
    ) -> ApiResult<T> {
        let url = self.config.endpoint(path);
        debug!(method = "POST", %url, "API request");
        let response = Self::authed(self.http.post(&url), session)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_form<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        form: &B,
        session: Option<&AuthSession>,
    ) -> ApiResult<T> {
        let url = self.config.endpoint(path);
        debug!(method = "POST", %url, "API request (form)");
        let response = Self::authed(self.http.post(&url), session)
            .form(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        session: Option<&AuthSession>,
    ) -> ApiResult<T> {
        let url = self.config.endpoint(path);
        debug!(method = "PUT", %url, "API request");
        let response = Self::authed(self.http.put(&url), session)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&AuthSession>,
    ) -> ApiResult<T> {
        let url = self.config.endpoint(path);
        debug!(method = "DELETE", %url, "API request");
        let response = Self::authed(self.http.delete(&url), session).send().await?;
        Self::decode(response).await
    }

    // ===== Response Decoding =====

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await?;
            return serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()));
        }

        let detail = Self::error_detail(status, response).await;
        warn!(status = status.as_u16(), detail = %detail, "API request failed");

        Err(match status {
            StatusCode::NOT_FOUND => ApiError::NotFound { detail },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized { detail },
            _ => ApiError::Rejected {
                status: status.as_u16(),
                detail,
            },
        })
    }

    /// Extracts the `detail` field from an error body, falling back to the
    /// status's canonical reason when the body is missing or malformed.
    async fn error_detail(status: StatusCode, response: Response) -> String {
        let fallback = || {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        };
        match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|body| body.detail)
                .unwrap_or_else(|_| fallback()),
            Err(_) => fallback(),
        }
    }
}
