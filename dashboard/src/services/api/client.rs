//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! The client keeps a cookie store so the HTTP-only session cookie issued at
//! login rides along on every subsequent request, including the WebSocket
//! upgrade performed elsewhere.

use crate::core::error::{ApiError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::ApiErrorBody;

/// Base URL for the backend API server when `LIFELINK_API_URL` is unset.
const DEFAULT_API_URL: &str = "http://127.0.0.1:4000/api";

/// HTTP client for communicating with the backend API server.
///
/// This client handles all REST API calls and maintains a connection pool
/// for efficient HTTP/2 multiplexing.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// Reads the base URL from `LIFELINK_API_URL` and falls back to the local
    /// development backend. The client is configured with a 10 second timeout
    /// to prevent freezing and a cookie store for the session cookie.
    pub fn new() -> Self {
        let base_url =
            std::env::var("LIFELINK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client pointed at an explicit base URL. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .cookie_store(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build a full URL for an API path such as `/auth/login`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The configured base URL, e.g. `http://127.0.0.1:4000/api`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Implement AuthApi for ApiClient so the session store can be driven by the
// real backend in production and by a mock in tests.
#[async_trait::async_trait]
impl crate::core::service::AuthApi for ApiClient {
    async fn fetch_session(&self) -> Result<shared::SessionResponse> {
        super::auth::fetch_session(self).await
    }

    async fn refresh_session(&self) -> Result<shared::SessionResponse> {
        super::auth::refresh_session(self).await
    }

    async fn login(&self, payload: shared::LoginPayload) -> Result<shared::SessionResponse> {
        super::auth::login(self, payload).await
    }

    async fn logout(&self) -> Result<()> {
        super::auth::logout(self).await
    }

    async fn register(&self, payload: shared::RegisterPayload) -> Result<shared::RegisterResponse> {
        super::auth::register(self, payload).await
    }

    async fn send_otp(&self, payload: shared::OtpSendPayload) -> Result<shared::OtpSendResponse> {
        super::auth::send_otp(self, payload).await
    }

    async fn verify_otp(
        &self,
        payload: shared::OtpVerifyPayload,
    ) -> Result<shared::SessionResponse> {
        super::auth::verify_otp(self, payload).await
    }

    async fn update_profile(&self, patch: shared::ProfilePatch) -> Result<shared::User> {
        super::users::update_profile(self, patch).await
    }
}

/// Map a reqwest error into the transport variant, logging it once here so
/// individual endpoints do not have to.
pub(crate) fn transport(err: reqwest::Error) -> ApiError {
    tracing::error!(error = %err, "Request transport failure");
    ApiError::Transport(err.to_string())
}

/// Decode a response into `T`, turning non-success statuses into
/// [`ApiError::Http`] with the message from the backend's error body.
///
/// Every endpoint funnels its response through here, which is also where
/// HTTP errors are logged, so no failure goes unrecorded.
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        response.json::<T>().await.map_err(|e| {
            tracing::error!(status = status.as_u16(), error = %e, "Response decode failure");
            ApiError::Decode(e.to_string())
        })
    } else {
        let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
        let message = body
            .detail()
            .map(str::to_string)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        tracing::error!(status = status.as_u16(), message = %message, "API request failed");
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

/// Decode an empty-body success response, still surfacing HTTP errors.
pub(crate) async fn decode_unit(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
        let message = body
            .detail()
            .map(str::to_string)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        tracing::error!(status = status.as_u16(), message = %message, "API request failed");
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }
}
