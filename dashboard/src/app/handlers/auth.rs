//! # Authentication Handlers
//!
//! Handlers for login, registration, OTP verification, and logout. Each
//! validates the form synchronously, then spawns the matching session task.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::session::SessionStore;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{OtpSendPayload, RegisterPayload};
use std::sync::Arc;

/// Handle login form submission.
pub(crate) fn handle_login_submit(
    state: Arc<RwLock<AppState>>,
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
) {
    let (email, password) = {
        let state = state.read();
        if state.login.submitting {
            return;
        }
        (state.login.email.clone(), state.login.password.clone())
    };

    let email_check = validation::validate_email(&email);
    if !email_check.is_valid {
        state.write().login.error = email_check.error;
        return;
    }
    if password.is_empty() {
        state.write().login.error = Some("Password is required".to_string());
        return;
    }

    {
        let mut state = state.write();
        state.login.error = None;
        state.login.submitting = true;
    }
    tasks::auth::login(session, event_tx, email, password);
}

/// Handle registration form submission.
pub(crate) fn handle_register_submit(
    state: Arc<RwLock<AppState>>,
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
) {
    let form = {
        let state = state.read();
        if state.register.submitting {
            return;
        }
        state.register.clone()
    };

    for check in [
        validation::validate_required(&form.first_name, "First name"),
        validation::validate_required(&form.last_name, "Last name"),
        validation::validate_email(&form.email),
        validation::validate_phone(&form.phone_number),
        validation::validate_password(&form.password),
    ] {
        if !check.is_valid {
            state.write().register.error = check.error;
            return;
        }
    }
    // Blood type is optional for couriers and admins.
    let blood_type = form.blood_type.trim();
    if !blood_type.is_empty() {
        let check = validation::validate_blood_type(blood_type);
        if !check.is_valid {
            state.write().register.error = check.error;
            return;
        }
    }

    let payload = RegisterPayload {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone_number: form.phone_number.trim().to_string(),
        password: form.password,
        role: form.role,
        blood_type: (!blood_type.is_empty()).then(|| blood_type.to_uppercase()),
    };

    {
        let mut state = state.write();
        state.register.error = None;
        state.register.submitting = true;
        // The OTP screen verifies the same address the user registered.
        state.verify.email = payload.email.clone();
    }
    tasks::auth::register(session, event_tx, payload);
}

/// Handle OTP verification form submission.
pub(crate) fn handle_otp_verify_submit(
    state: Arc<RwLock<AppState>>,
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
) {
    let (email, code) = {
        let state = state.read();
        if state.verify.submitting {
            return;
        }
        (state.verify.email.clone(), state.verify.code.clone())
    };

    let email_check = validation::validate_email(&email);
    if !email_check.is_valid {
        state.write().verify.error = email_check.error;
        return;
    }
    let code = code.trim().to_string();
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        state.write().verify.error = Some("Enter the 6 digit code".to_string());
        return;
    }

    {
        let mut state = state.write();
        state.verify.error = None;
        state.verify.submitting = true;
    }
    tasks::auth::verify_otp(session, event_tx, email, code);
}

/// Request a fresh OTP for the email on the verification screen.
pub(crate) fn handle_otp_resend(
    state: Arc<RwLock<AppState>>,
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
) {
    let email = state.read().verify.email.clone();
    let check = validation::validate_email(&email);
    if !check.is_valid {
        state.write().verify.error = check.error;
        return;
    }

    state.write().verify.error = None;
    tasks::auth::send_otp(
        session,
        event_tx,
        OtpSendPayload {
            email: Some(email),
            ..Default::default()
        },
    );
}

/// Handle the sign-out button.
pub(crate) fn handle_logout(
    state: Arc<RwLock<AppState>>,
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
) {
    // Cached per-user data must not leak into the next session.
    state.write().clear_user_data();
    tasks::auth::logout(session, event_tx);
}
