//! # Session Store
//!
//! Single source of truth for authentication state.
//!
//! The store moves through four statuses:
//!
//! ```text
//!        initialize()
//! Idle ───────────────► Loading ──► Authenticated
//!                          │              ▲ │
//!                          │   login /    │ │ logout
//!                          ▼  verify_otp  │ ▼
//!                     Unauthenticated ────┘
//! ```
//!
//! `Authenticated` always carries a user and `Unauthenticated` never does;
//! every operation preserves that pairing. Protected screens read the store
//! through [`crate::session::guard`] rather than inspecting it directly.

use crate::core::error::Result;
use crate::core::service::AuthApi;
use parking_lot::RwLock;
use shared::{
    LoginPayload, OtpSendPayload, OtpSendResponse, OtpVerifyPayload, ProfilePatch,
    RegisterPayload, User,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Startup state; no session probe has run yet.
    Idle,
    /// A session probe is in flight.
    Loading,
    /// A user is logged in.
    Authenticated,
    /// No valid session exists.
    Unauthenticated,
}

/// Immutable copy of the session state, cheap enough to clone per frame.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub user: Option<User>,
    /// Demo-mode OTP echoed by the registration endpoint, surfaced on the
    /// verification screen. Cleared on successful verification.
    pub otp_hint: Option<String>,
}

impl SessionSnapshot {
    fn idle() -> Self {
        Self {
            status: SessionStatus::Idle,
            user: None,
            otp_hint: None,
        }
    }
}

/// Authentication state machine over an injectable backend.
pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    state: RwLock<SessionSnapshot>,
}

impl SessionStore {
    /// Create a store in the `Idle` state.
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            api,
            state: RwLock::new(SessionSnapshot::idle()),
        }
    }

    /// Copy of the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().clone()
    }

    /// Current status without cloning the user.
    pub fn status(&self) -> SessionStatus {
        self.state.read().status
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    /// Resolve the session from the stored cookie on startup.
    ///
    /// Probes `/auth/session` first; when that fails, attempts one refresh
    /// before settling on `Unauthenticated`. The refresh is skipped entirely
    /// when the first probe succeeds. This operation is terminal and never
    /// returns an error: an unreachable backend resolves to logged-out, and
    /// the failure details are logged here.
    pub async fn initialize(&self) {
        self.state.write().status = SessionStatus::Loading;

        match self.api.fetch_session().await {
            Ok(session) => {
                info!(user_id = %session.user.id, "Session restored from cookie");
                self.set_authenticated(session.user);
            }
            Err(fetch_err) => match self.api.refresh_session().await {
                Ok(session) => {
                    info!(user_id = %session.user.id, "Session restored via refresh");
                    self.set_authenticated(session.user);
                }
                Err(refresh_err) => {
                    warn!(
                        fetch_error = %fetch_err,
                        refresh_error = %refresh_err,
                        "No restorable session, starting logged out"
                    );
                    self.set_unauthenticated();
                }
            },
        }
    }

    /// Login with email and password.
    ///
    /// On failure the previous state is left untouched so a failed login
    /// from the login screen stays `Unauthenticated` with its message in
    /// the form, not in the store.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };
        let session = self.api.login(payload).await?;
        self.set_authenticated(session.user);
        Ok(())
    }

    /// Logout, clearing local state regardless of how the request fared.
    ///
    /// The server call is awaited first so the cookie is invalidated when
    /// the backend is reachable, but a failure never leaves a stale user
    /// behind; the error is returned only for surfacing.
    pub async fn logout(&self) -> Result<()> {
        let result = self.api.logout().await;
        if let Err(ref e) = result {
            warn!(error = %e, "Logout request failed, clearing local session anyway");
        }
        self.set_unauthenticated();
        result
    }

    /// Register a new account. Does not authenticate; the flow continues on
    /// the OTP verification screen. Returns the demo OTP hint when the
    /// backend echoes one.
    pub async fn register(&self, payload: RegisterPayload) -> Result<Option<String>> {
        let response = self.api.register(payload).await?;
        let hint = response.otp.clone();
        self.state.write().otp_hint = response.otp;
        Ok(hint)
    }

    /// Request a fresh OTP, updating the hint when the backend echoes one.
    pub async fn send_otp(&self, payload: OtpSendPayload) -> Result<OtpSendResponse> {
        let response = self.api.send_otp(payload).await?;
        if response.debug_code.is_some() {
            self.state.write().otp_hint = response.debug_code.clone();
        }
        Ok(response)
    }

    /// Verify an OTP code; success authenticates and clears the hint.
    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<()> {
        let payload = OtpVerifyPayload {
            email: email.to_string(),
            code: code.to_string(),
        };
        let session = self.api.verify_otp(payload).await?;
        self.set_authenticated(session.user);
        Ok(())
    }

    /// Update the profile, replacing the stored user wholesale with the
    /// backend's response. Ignored when no user is logged in so the status
    /// and user never desynchronize.
    pub async fn update_profile(&self, patch: ProfilePatch) -> Result<User> {
        let updated = self.api.update_profile(patch).await?;
        let mut state = self.state.write();
        if state.status == SessionStatus::Authenticated {
            state.user = Some(updated.clone());
        }
        Ok(updated)
    }

    fn set_authenticated(&self, user: User) {
        let mut state = self.state.write();
        state.user = Some(user);
        state.status = SessionStatus::Authenticated;
        state.otp_hint = None;
    }

    fn set_unauthenticated(&self) {
        let mut state = self.state.write();
        state.user = None;
        state.status = SessionStatus::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use async_trait::async_trait;
    use shared::{RegisterResponse, SessionResponse, UserRole};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_user(id: &str) -> User {
        User {
            id: id.to_string(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: format!("{id}@example.com"),
            phone_number: "+919876543210".to_string(),
            role: UserRole::Donor,
            blood_type: Some("O+".to_string()),
            is_verified: Some(true),
            availability: None,
            donor_profile: None,
            recipient_profile: None,
            delivery_profile: None,
            notification_preferences: None,
            location: None,
            created_at: None,
        }
    }

    fn not_configured<T>() -> crate::core::error::Result<T> {
        Err(ApiError::Http {
            status: 500,
            message: "not configured".to_string(),
        })
    }

    /// Mock backend: every endpoint returns a preconfigured result and the
    /// refresh call count is recorded.
    struct MockAuthApi {
        session: crate::core::error::Result<SessionResponse>,
        refresh: crate::core::error::Result<SessionResponse>,
        login: crate::core::error::Result<SessionResponse>,
        logout: crate::core::error::Result<()>,
        register: crate::core::error::Result<RegisterResponse>,
        verify: crate::core::error::Result<SessionResponse>,
        profile: crate::core::error::Result<User>,
        refresh_calls: AtomicUsize,
    }

    impl Default for MockAuthApi {
        fn default() -> Self {
            Self {
                session: not_configured(),
                refresh: not_configured(),
                login: not_configured(),
                logout: not_configured(),
                register: not_configured(),
                verify: not_configured(),
                profile: not_configured(),
                refresh_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AuthApi for MockAuthApi {
        async fn fetch_session(&self) -> crate::core::error::Result<SessionResponse> {
            self.session.clone()
        }

        async fn refresh_session(&self) -> crate::core::error::Result<SessionResponse> {
            self.refresh_calls.fetch_add(1, Ordering::SeqCst);
            self.refresh.clone()
        }

        async fn login(
            &self,
            _payload: LoginPayload,
        ) -> crate::core::error::Result<SessionResponse> {
            self.login.clone()
        }

        async fn logout(&self) -> crate::core::error::Result<()> {
            self.logout.clone()
        }

        async fn register(
            &self,
            _payload: RegisterPayload,
        ) -> crate::core::error::Result<RegisterResponse> {
            self.register.clone()
        }

        async fn send_otp(
            &self,
            _payload: OtpSendPayload,
        ) -> crate::core::error::Result<OtpSendResponse> {
            not_configured()
        }

        async fn verify_otp(
            &self,
            _payload: OtpVerifyPayload,
        ) -> crate::core::error::Result<SessionResponse> {
            self.verify.clone()
        }

        async fn update_profile(
            &self,
            _patch: ProfilePatch,
        ) -> crate::core::error::Result<User> {
            self.profile.clone()
        }
    }

    fn store_with(api: MockAuthApi) -> (SessionStore, Arc<MockAuthApi>) {
        let api = Arc::new(api);
        (SessionStore::new(api.clone()), api)
    }

    /// Authenticated must always carry a user, everything else must not.
    fn assert_invariant(store: &SessionStore) {
        let snapshot = store.snapshot();
        match snapshot.status {
            SessionStatus::Authenticated => assert!(snapshot.user.is_some()),
            _ => assert!(snapshot.user.is_none()),
        }
    }

    #[tokio::test]
    async fn initialize_uses_session_endpoint_when_cookie_is_valid() {
        let (store, api) = store_with(MockAuthApi {
            session: Ok(SessionResponse {
                user: test_user("u-1"),
            }),
            ..Default::default()
        });

        assert_eq!(store.status(), SessionStatus::Idle);
        store.initialize().await;

        assert_eq!(store.status(), SessionStatus::Authenticated);
        assert_eq!(store.user().map(|u| u.id), Some("u-1".to_string()));
        // Refresh must not be attempted when the probe succeeds.
        assert_eq!(api.refresh_calls.load(Ordering::SeqCst), 0);
        assert_invariant(&store);
    }

    #[tokio::test]
    async fn initialize_falls_back_to_refresh_once() {
        let (store, api) = store_with(MockAuthApi {
            session: Err(ApiError::Http {
                status: 401,
                message: "Not authenticated".to_string(),
            }),
            refresh: Ok(SessionResponse {
                user: test_user("u-2"),
            }),
            ..Default::default()
        });

        store.initialize().await;

        assert_eq!(store.status(), SessionStatus::Authenticated);
        assert_eq!(api.refresh_calls.load(Ordering::SeqCst), 1);
        assert_invariant(&store);
    }

    #[tokio::test]
    async fn initialize_settles_unauthenticated_when_both_probes_fail() {
        let (store, api) = store_with(MockAuthApi {
            session: Err(ApiError::Transport("connection refused".to_string())),
            refresh: Err(ApiError::Transport("connection refused".to_string())),
            ..Default::default()
        });

        store.initialize().await;

        assert_eq!(store.status(), SessionStatus::Unauthenticated);
        assert!(store.user().is_none());
        assert_eq!(api.refresh_calls.load(Ordering::SeqCst), 1);
        assert_invariant(&store);
    }

    #[tokio::test]
    async fn login_success_stores_returned_user() {
        let (store, _api) = store_with(MockAuthApi {
            login: Ok(SessionResponse {
                user: test_user("u-3"),
            }),
            ..Default::default()
        });

        store.login("asha@example.com", "secret").await.unwrap();

        assert_eq!(store.status(), SessionStatus::Authenticated);
        assert_eq!(store.user().map(|u| u.id), Some("u-3".to_string()));
        assert_invariant(&store);
    }

    #[tokio::test]
    async fn login_failure_leaves_state_untouched() {
        let (store, _api) = store_with(MockAuthApi {
            login: Err(ApiError::Http {
                status: 401,
                message: "Invalid credentials".to_string(),
            }),
            ..Default::default()
        });

        let err = store.login("asha@example.com", "wrong").await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Http {
                status: 401,
                message: "Invalid credentials".to_string(),
            }
        );
        assert_eq!(store.status(), SessionStatus::Idle);
        assert_invariant(&store);
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_request_fails() {
        let (store, _api) = store_with(MockAuthApi {
            login: Ok(SessionResponse {
                user: test_user("u-4"),
            }),
            logout: Err(ApiError::Transport("connection reset".to_string())),
            ..Default::default()
        });

        store.login("asha@example.com", "secret").await.unwrap();
        let result = store.logout().await;

        assert!(result.is_err());
        assert_eq!(store.status(), SessionStatus::Unauthenticated);
        assert!(store.user().is_none());
        assert_invariant(&store);
    }

    #[tokio::test]
    async fn register_stores_otp_hint_and_verify_clears_it() {
        let (store, _api) = store_with(MockAuthApi {
            register: Ok(RegisterResponse {
                user: test_user("u-5"),
                message: "OTP sent".to_string(),
                otp: Some("123456".to_string()),
            }),
            verify: Ok(SessionResponse {
                user: test_user("u-5"),
            }),
            ..Default::default()
        });

        let hint = store
            .register(RegisterPayload {
                first_name: "Asha".to_string(),
                last_name: "Rao".to_string(),
                email: "asha@example.com".to_string(),
                phone_number: "+919876543210".to_string(),
                password: "secret".to_string(),
                role: UserRole::Donor,
                blood_type: Some("O+".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(hint.as_deref(), Some("123456"));
        assert_eq!(store.snapshot().otp_hint.as_deref(), Some("123456"));
        // Registration alone must not authenticate.
        assert_eq!(store.status(), SessionStatus::Idle);

        store.verify_otp("asha@example.com", "123456").await.unwrap();

        assert_eq!(store.status(), SessionStatus::Authenticated);
        assert!(store.snapshot().otp_hint.is_none());
        assert_invariant(&store);
    }

    #[tokio::test]
    async fn update_profile_replaces_user_wholesale() {
        let mut updated = test_user("u-6");
        updated.first_name = "Asha Updated".to_string();

        let (store, _api) = store_with(MockAuthApi {
            login: Ok(SessionResponse {
                user: test_user("u-6"),
            }),
            profile: Ok(updated),
            ..Default::default()
        });

        store.login("asha@example.com", "secret").await.unwrap();
        let user = store.update_profile(ProfilePatch::default()).await.unwrap();

        assert_eq!(user.first_name, "Asha Updated");
        assert_eq!(
            store.user().map(|u| u.first_name),
            Some("Asha Updated".to_string())
        );
        assert_invariant(&store);
    }

    #[tokio::test]
    async fn update_profile_without_session_does_not_create_one() {
        let (store, _api) = store_with(MockAuthApi {
            profile: Ok(test_user("u-7")),
            ..Default::default()
        });

        let result = store.update_profile(ProfilePatch::default()).await;

        assert!(result.is_ok());
        assert_eq!(store.status(), SessionStatus::Idle);
        assert!(store.user().is_none());
        assert_invariant(&store);
    }
}
