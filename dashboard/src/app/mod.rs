//! # Application Core
//!
//! Event-driven architecture with shared state. The UI thread owns [`App`]
//! and calls [`App::on_tick`] once per frame; background tasks run on the
//! tokio runtime and report back through an event channel.
//!
//! ```text
//! UI input ──► handlers ──► tokio task ──► AppEvent channel ──► on_tick
//!                                                              │
//! WebSocket ──► invalidation signal ──► realtime channel ──────┘
//! ```
//!
//! `on_tick` also runs the session-driven machinery: the route guard, the
//! realtime connection lifecycle, and the notification freshness cycle.

pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;

use crate::app::event_handler::Followup;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::core::service::AuthApi;
use crate::services::{ApiClient, RealtimeClient, RealtimeEvent};
use crate::session::{decide, RouteDecision, SessionStatus, SessionStore};
use async_channel::{Receiver, Sender};
use parking_lot::RwLock;
use shared::{AppointmentStatus, DeliveryStatus};
use std::sync::Arc;
use tracing::info;

pub use tasks::requests::RequestAction;

/// Top-level application handle owned by the UI thread.
pub struct App {
    pub state: Arc<RwLock<AppState>>,
    session: Arc<SessionStore>,
    api: Arc<ApiClient>,
    realtime: Arc<RealtimeClient>,
    realtime_rx: Receiver<RealtimeEvent>,
    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
}

impl App {
    pub fn new() -> Self {
        let api = Arc::new(ApiClient::new());
        let session = Arc::new(SessionStore::new(
            Arc::clone(&api) as Arc<dyn AuthApi>
        ));
        let (event_tx, event_rx) = async_channel::unbounded::<AppEvent>();
        let (realtime_tx, realtime_rx) = async_channel::unbounded::<RealtimeEvent>();
        let realtime = Arc::new(RealtimeClient::new(realtime_tx));

        info!("Dashboard starting against {}", api.base_url());

        Self {
            state: Arc::new(RwLock::new(AppState::new())),
            session,
            api,
            realtime,
            realtime_rx,
            event_tx,
            event_rx,
        }
    }

    /// Per-frame pump: drain channels, fold events, then run the
    /// session-driven machinery.
    pub fn on_tick(&self) {
        // Realtime invalidation signals only mark the feed stale; the feed
        // itself is refetched over REST below. The session is untouched.
        while self.realtime_rx.try_recv().is_ok() {
            let mut state = self.state.write();
            state.notifications.invalidations += 1;
            state.notifications.stale = true;
        }

        let mut followups = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            let mut state = self.state.write();
            if let Some(followup) = event_handler::apply(&mut state, event) {
                followups.push(followup);
            }
        }
        for followup in followups {
            match followup {
                Followup::LoadScreen(screen) => self.load_screen(screen),
            }
        }

        self.apply_route_guard();
        self.sync_realtime();
        self.refresh_notifications();
    }

    /// Route guard: protected screens need an authenticated session.
    fn apply_route_guard(&self) {
        let (decision, protected) = {
            let state = self.state.read();
            (decide(&state.session), state.current_screen.is_protected())
        };
        if !protected {
            return;
        }
        match decision {
            RouteDecision::ShowLoading { start_initialize } => {
                if start_initialize && !self.state.read().initialize_started {
                    self.state.write().initialize_started = true;
                    tasks::auth::initialize(Arc::clone(&self.session), self.event_tx.clone());
                }
            }
            RouteDecision::RedirectToLogin => {
                self.state.write().current_screen = Screen::Login;
            }
            RouteDecision::Render => {}
        }
    }

    /// Keep the notification stream connected exactly while a session is live.
    fn sync_realtime(&self) {
        let target = {
            let state = self.state.read();
            match (&state.session.status, &state.session.user) {
                (SessionStatus::Authenticated, Some(user)) => {
                    Some((user.id.clone(), user.role))
                }
                _ => None,
            }
        };
        match target {
            Some((user_id, role)) => {
                if !self.realtime.is_connected() {
                    self.realtime.connect(&user_id, role);
                }
            }
            None => self.realtime.disconnect(),
        }
        self.state.write().realtime_connected = self.realtime.is_connected();
    }

    /// Fetch the feed when it is stale or the fallback interval elapsed.
    fn refresh_notifications(&self) {
        let mut state = self.state.write();
        if state.session.status != SessionStatus::Authenticated {
            return;
        }
        let due = state.notifications.stale || state.notifications.fallback_due();
        if due && !state.notifications.fetching {
            state.notifications.fetching = true;
            tasks::notifications::fetch_notifications(
                Arc::clone(&self.api),
                self.event_tx.clone(),
            );
        }
    }

    // ---- UI entry points -------------------------------------------------

    pub fn navigate(&self, screen: Screen) {
        handlers::navigation::handle_screen_change(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
            screen,
        );
    }

    /// Refetch the data backing the given screen.
    pub fn load_screen(&self, screen: Screen) {
        handlers::navigation::load_screen_data(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
            screen,
        );
    }

    pub fn login_submit(&self) {
        handlers::auth::handle_login_submit(
            Arc::clone(&self.state),
            Arc::clone(&self.session),
            self.event_tx.clone(),
        );
    }

    pub fn register_submit(&self) {
        handlers::auth::handle_register_submit(
            Arc::clone(&self.state),
            Arc::clone(&self.session),
            self.event_tx.clone(),
        );
    }

    pub fn otp_verify_submit(&self) {
        handlers::auth::handle_otp_verify_submit(
            Arc::clone(&self.state),
            Arc::clone(&self.session),
            self.event_tx.clone(),
        );
    }

    pub fn otp_resend(&self) {
        handlers::auth::handle_otp_resend(
            Arc::clone(&self.state),
            Arc::clone(&self.session),
            self.event_tx.clone(),
        );
    }

    pub fn logout(&self) {
        handlers::auth::handle_logout(
            Arc::clone(&self.state),
            Arc::clone(&self.session),
            self.event_tx.clone(),
        );
    }

    pub fn request_submit(&self) {
        handlers::requests::handle_request_submit(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
        );
    }

    pub fn request_action(&self, request_id: String, action: RequestAction) {
        handlers::requests::handle_request_action(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
            request_id,
            action,
        );
    }

    pub fn delivery_submit(&self) {
        handlers::deliveries::handle_delivery_submit(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
        );
    }

    pub fn delivery_status(&self, delivery_id: String, status: DeliveryStatus) {
        handlers::deliveries::handle_status_change(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
            delivery_id,
            status,
        );
    }

    pub fn tracking_submit(&self) {
        handlers::deliveries::handle_tracking_submit(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
        );
    }

    pub fn appointment_submit(&self) {
        handlers::appointments::handle_appointment_submit(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
        );
    }

    pub fn appointment_status(&self, appointment_id: String, status: AppointmentStatus) {
        handlers::appointments::handle_appointment_status(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
            appointment_id,
            status,
        );
    }

    pub fn blood_bank_search(&self) {
        handlers::bloodbanks::handle_search(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
        );
    }

    pub fn blood_bank_submit(&self) {
        handlers::bloodbanks::handle_blood_bank_submit(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
        );
    }

    pub fn notification_mark_read(&self, notification_id: String) {
        handlers::notifications::handle_mark_read(
            Arc::clone(&self.api),
            self.event_tx.clone(),
            notification_id,
        );
    }

    pub fn notification_mark_all_read(&self) {
        handlers::notifications::handle_mark_all_read(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
        );
    }

    pub fn profile_save(&self) {
        handlers::profile::handle_profile_save(
            Arc::clone(&self.state),
            Arc::clone(&self.session),
            self.event_tx.clone(),
        );
    }

    pub fn health_submit(&self) {
        handlers::profile::handle_health_submit(
            Arc::clone(&self.state),
            Arc::clone(&self.api),
            self.event_tx.clone(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::User;

    fn test_user() -> User {
        serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "firstName": "Ada",
            "lastName": "Okafor",
            "email": "ada@example.com",
            "phoneNumber": "+919876543210",
            "role": "donor",
            "createdAt": "2026-01-10T08:00:00Z",
        }))
        .unwrap()
    }

    /// App wired with a hand-held realtime bus sender for injecting signals.
    fn app_with_bus() -> (App, Sender<RealtimeEvent>) {
        let api = Arc::new(ApiClient::new());
        let session = Arc::new(SessionStore::new(Arc::clone(&api) as Arc<dyn AuthApi>));
        let (event_tx, event_rx) = async_channel::unbounded::<AppEvent>();
        let (realtime_tx, realtime_rx) = async_channel::unbounded::<RealtimeEvent>();
        let realtime = Arc::new(RealtimeClient::new(realtime_tx.clone()));
        let app = App {
            state: Arc::new(RwLock::new(AppState::new())),
            session,
            api,
            realtime,
            realtime_rx,
            event_tx,
            event_rx,
        };
        (app, realtime_tx)
    }

    #[test]
    fn invalidation_signal_marks_feed_stale_once_per_signal() {
        let (app, bus) = app_with_bus();
        {
            // Unauthenticated on an auth screen, so the tick runs no tasks.
            let mut state = app.state.write();
            state.session.status = SessionStatus::Unauthenticated;
            state.current_screen = Screen::Login;
            state.notifications.stale = false;
        }

        bus.try_send(RealtimeEvent::NotificationNew).unwrap();
        bus.try_send(RealtimeEvent::NotificationBroadcast).unwrap();
        app.on_tick();

        let state = app.state.read();
        assert_eq!(state.notifications.invalidations, 2);
        assert!(state.notifications.stale);
        // Signals never touch the session.
        assert_eq!(state.session.status, SessionStatus::Unauthenticated);
        assert!(state.session.user.is_none());
    }

    #[test]
    fn guard_redirects_protected_screen_to_login() {
        let (app, _bus) = app_with_bus();
        {
            let mut state = app.state.write();
            state.session.status = SessionStatus::Unauthenticated;
            state.current_screen = Screen::Requests;
        }

        app.on_tick();

        assert_eq!(app.state.read().current_screen, Screen::Login);
    }

    #[tokio::test]
    async fn authenticated_tick_connects_realtime_and_fetches_feed() {
        let (app, _bus) = app_with_bus();
        {
            let mut state = app.state.write();
            state.session.status = SessionStatus::Authenticated;
            state.session.user = Some(test_user());
        }

        app.on_tick();

        let state = app.state.read();
        assert!(state.realtime_connected);
        assert!(state.notifications.fetching);
    }

    #[tokio::test]
    async fn logout_tick_disconnects_realtime() {
        let (app, _bus) = app_with_bus();
        {
            let mut state = app.state.write();
            state.session.status = SessionStatus::Authenticated;
            state.session.user = Some(test_user());
        }
        app.on_tick();
        assert!(app.state.read().realtime_connected);

        {
            let mut state = app.state.write();
            state.session.status = SessionStatus::Unauthenticated;
            state.session.user = None;
            state.current_screen = Screen::Login;
        }
        app.on_tick();

        assert!(!app.state.read().realtime_connected);
    }
}
