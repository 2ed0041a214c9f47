//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::{
    LoginPayload, OtpSendPayload, OtpSendResponse, OtpVerifyPayload, ProfilePatch,
    RegisterPayload, RegisterResponse, SessionResponse, User,
};

/// Trait covering the authentication endpoints consumed by the session store.
///
/// The session store holds an `Arc<dyn AuthApi>` rather than a concrete
/// client so that tests can drive it with a mock backend.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Fetch the current session from the session cookie.
    async fn fetch_session(&self) -> Result<SessionResponse>;

    /// Refresh the session cookie and return the refreshed session.
    async fn refresh_session(&self) -> Result<SessionResponse>;

    /// Login with email and password.
    async fn login(&self, payload: LoginPayload) -> Result<SessionResponse>;

    /// Invalidate the session cookie server-side.
    async fn logout(&self) -> Result<()>;

    /// Register a new account.
    async fn register(&self, payload: RegisterPayload) -> Result<RegisterResponse>;

    /// Request an OTP to be sent for account verification.
    async fn send_otp(&self, payload: OtpSendPayload) -> Result<OtpSendResponse>;

    /// Verify an OTP code, establishing a session on success.
    async fn verify_otp(&self, payload: OtpVerifyPayload) -> Result<SessionResponse>;

    /// Update the authenticated user's profile.
    async fn update_profile(&self, patch: ProfilePatch) -> Result<User>;
}
