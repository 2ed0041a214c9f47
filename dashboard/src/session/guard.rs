//! # Route Guard
//!
//! Pure projection from session state to a routing decision for protected
//! screens. The guard never mutates the store; acting on the decision
//! (kicking off initialization, swapping the visible screen) is the app
//! layer's job, which keeps this logic trivially testable.

use crate::session::store::{SessionSnapshot, SessionStatus};

/// What a protected screen should do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Show the loading screen; when `start_initialize` is set the session
    /// probe has not been kicked off yet and the caller must start it.
    ShowLoading { start_initialize: bool },
    /// No session; send the user to the login screen.
    RedirectToLogin,
    /// Session is valid; render the protected content.
    Render,
}

/// Decide what to do with a protected screen given the current session.
pub fn decide(snapshot: &SessionSnapshot) -> RouteDecision {
    match snapshot.status {
        SessionStatus::Idle => RouteDecision::ShowLoading {
            start_initialize: true,
        },
        SessionStatus::Loading => RouteDecision::ShowLoading {
            start_initialize: false,
        },
        SessionStatus::Authenticated if snapshot.user.is_some() => RouteDecision::Render,
        // Resolved without a user, whichever way that happened.
        _ => RouteDecision::RedirectToLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(status: SessionStatus, with_user: bool) -> SessionSnapshot {
        SessionSnapshot {
            status,
            user: with_user.then(|| {
                serde_json::from_value(serde_json::json!({
                    "_id": "u-1",
                    "firstName": "Asha",
                    "lastName": "Rao",
                    "email": "asha@example.com",
                    "phoneNumber": "+919876543210",
                    "role": "donor"
                }))
                .unwrap()
            }),
            otp_hint: None,
        }
    }

    #[test]
    fn idle_requests_initialization() {
        assert_eq!(
            decide(&snapshot(SessionStatus::Idle, false)),
            RouteDecision::ShowLoading {
                start_initialize: true
            }
        );
    }

    #[test]
    fn loading_waits_without_reinitializing() {
        assert_eq!(
            decide(&snapshot(SessionStatus::Loading, false)),
            RouteDecision::ShowLoading {
                start_initialize: false
            }
        );
    }

    #[test]
    fn authenticated_renders() {
        assert_eq!(
            decide(&snapshot(SessionStatus::Authenticated, true)),
            RouteDecision::Render
        );
    }

    #[test]
    fn unauthenticated_redirects() {
        assert_eq!(
            decide(&snapshot(SessionStatus::Unauthenticated, false)),
            RouteDecision::RedirectToLogin
        );
    }
}
