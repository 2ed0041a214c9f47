//! # Authentication Endpoints
//!
//! Session bootstrap, login/logout, registration, and OTP verification.
//!
//! The backend issues an HTTP-only session cookie on login; the shared
//! [`ApiClient`] cookie store carries it on every later call, so none of
//! these functions deal with tokens directly.

use super::client::{self, ApiClient};
use crate::core::error::Result;
use shared::{
    normalize_phone, LoginPayload, OtpSendPayload, OtpSendResponse, OtpVerifyPayload,
    RegisterPayload, RegisterResponse, SessionResponse,
};

/// Fetch the session backing the current cookie, if any.
pub async fn fetch_session(api: &ApiClient) -> Result<SessionResponse> {
    let response = api
        .client
        .get(api.url("/auth/session"))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Ask the backend to rotate the session cookie.
pub async fn refresh_session(api: &ApiClient) -> Result<SessionResponse> {
    let response = api
        .client
        .post(api.url("/auth/refresh"))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Login with email and password.
#[tracing::instrument(skip(api, payload), fields(email = %payload.email))]
pub async fn login(api: &ApiClient, payload: LoginPayload) -> Result<SessionResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let response = api
        .client
        .post(api.url("/auth/login"))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;

    let result = client::decode::<SessionResponse>(response).await;
    if result.is_ok() {
        tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    }
    result
}

/// Invalidate the session server-side.
pub async fn logout(api: &ApiClient) -> Result<()> {
    let response = api
        .client
        .post(api.url("/auth/logout"))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode_unit(response).await
}

/// Register a new account. The phone number is normalized to the canonical
/// `+91` form before it leaves the client.
#[tracing::instrument(skip(api, payload), fields(email = %payload.email, role = ?payload.role))]
pub async fn register(api: &ApiClient, mut payload: RegisterPayload) -> Result<RegisterResponse> {
    payload.phone_number = normalize_phone(&payload.phone_number);

    let response = api
        .client
        .post(api.url("/auth/register"))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Request a fresh OTP for the given email or phone number.
pub async fn send_otp(api: &ApiClient, mut payload: OtpSendPayload) -> Result<OtpSendResponse> {
    if let Some(phone) = payload.phone_number.take() {
        payload.phone_number = Some(normalize_phone(&phone));
    }

    let response = api
        .client
        .post(api.url("/auth/otp/send"))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Verify an OTP code. Success establishes a session.
#[tracing::instrument(skip(api, payload), fields(email = %payload.email))]
pub async fn verify_otp(api: &ApiClient, payload: OtpVerifyPayload) -> Result<SessionResponse> {
    let response = api
        .client
        .post(api.url("/auth/otp/verify"))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}
