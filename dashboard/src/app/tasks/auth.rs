//! # Session Tasks
//!
//! Async tasks that drive the session store. Every task finishes with a
//! `SessionChanged` snapshot so the rendered state never drifts from the
//! store, plus an operation-specific result event for form feedback.

use crate::app::events::AppEvent;
use crate::session::SessionStore;
use async_channel::Sender;
use shared::{OtpSendPayload, ProfilePatch, RegisterPayload};
use std::sync::Arc;
use tokio::spawn;

/// Resolve the session from the stored cookie. Spawned exactly once, when
/// the route guard first sees the `Idle` state.
pub(crate) fn initialize(session: Arc<SessionStore>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        session.initialize().await;
        let _ = event_tx
            .send(AppEvent::SessionChanged(session.snapshot()))
            .await;
    });
}

pub(crate) fn login(
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    spawn(async move {
        let result = session.login(&email, &password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
        let _ = event_tx
            .send(AppEvent::SessionChanged(session.snapshot()))
            .await;
    });
}

pub(crate) fn logout(session: Arc<SessionStore>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        // The store clears local state even when the request fails; nothing
        // to surface beyond the snapshot.
        let _ = session.logout().await;
        let _ = event_tx
            .send(AppEvent::SessionChanged(session.snapshot()))
            .await;
    });
}

pub(crate) fn register(
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
    payload: RegisterPayload,
) {
    spawn(async move {
        let result = session.register(payload).await;
        let _ = event_tx.send(AppEvent::RegisterResult(result)).await;
        let _ = event_tx
            .send(AppEvent::SessionChanged(session.snapshot()))
            .await;
    });
}

pub(crate) fn send_otp(
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
    payload: OtpSendPayload,
) {
    spawn(async move {
        let result = session.send_otp(payload).await.map(|r| r.message);
        let _ = event_tx.send(AppEvent::OtpSendResult(result)).await;
        let _ = event_tx
            .send(AppEvent::SessionChanged(session.snapshot()))
            .await;
    });
}

pub(crate) fn verify_otp(
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
    email: String,
    code: String,
) {
    spawn(async move {
        let result = session.verify_otp(&email, &code).await;
        let _ = event_tx.send(AppEvent::OtpVerifyResult(result)).await;
        let _ = event_tx
            .send(AppEvent::SessionChanged(session.snapshot()))
            .await;
    });
}

pub(crate) fn update_profile(
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
    patch: ProfilePatch,
) {
    spawn(async move {
        let result = session.update_profile(patch).await;
        let _ = event_tx.send(AppEvent::ProfileSaved(result)).await;
        let _ = event_tx
            .send(AppEvent::SessionChanged(session.snapshot()))
            .await;
    });
}
