//! # Navigation Handlers
//!
//! Screen changes with role filtering, plus the initial data load each
//! screen kicks off when it becomes visible.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks;
use crate::services::api::ApiClient;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{BloodBankQuery, ListQuery, NearbyDonorsQuery, UserRole};
use std::sync::Arc;
use tracing::warn;

/// Switch to a screen, refusing navigation the user's role cannot see.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    if screen.is_protected() {
        let role = state.read().role();
        match role {
            Some(role) if screen.visible_for(role) => {}
            Some(role) => {
                warn!(screen = ?screen, role = ?role, "Navigation refused by role filter");
                return;
            }
            None => {
                // The route guard will bounce to login; don't load anything.
                state.write().current_screen = screen;
                return;
            }
        }
    }

    state.write().current_screen = screen;
    load_screen_data(state, api, event_tx, screen);
}

/// Kick off the fetches a screen needs when it becomes visible.
pub(crate) fn load_screen_data(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    let role = state.read().role();

    match screen {
        Screen::Overview => {
            {
                let mut state = state.write();
                state.overview.loading = true;
                state.overview.error = None;
            }
            tasks::analytics::fetch_overview(api.clone(), event_tx.clone());
            if matches!(role, Some(UserRole::Admin | UserRole::Recipient)) {
                tasks::analytics::fetch_donor_availability(api, event_tx);
            }
        }
        Screen::Requests => {
            {
                let mut state = state.write();
                state.requests.loading = true;
                state.requests.error = None;
            }
            tasks::requests::fetch_requests(api.clone(), event_tx.clone(), ListQuery::default());
            if matches!(role, Some(UserRole::Recipient)) {
                let blood_type = {
                    let state = state.read();
                    state
                        .session
                        .user
                        .as_ref()
                        .and_then(|u| u.blood_type.clone())
                };
                state.write().requests.nearby_loading = true;
                tasks::requests::fetch_nearby_donors(
                    api,
                    event_tx,
                    NearbyDonorsQuery {
                        recipient_blood_type: blood_type,
                        ..Default::default()
                    },
                );
            }
        }
        Screen::Deliveries => {
            {
                let mut state = state.write();
                state.deliveries.loading = true;
                state.deliveries.error = None;
            }
            tasks::deliveries::fetch_deliveries(api, event_tx, ListQuery::default());
        }
        Screen::Appointments => {
            {
                let mut state = state.write();
                state.appointments.loading = true;
                state.appointments.error = None;
            }
            tasks::appointments::fetch_appointments(api, event_tx, ListQuery::default());
        }
        Screen::BloodBanks => {
            let search = state.read().blood_banks.search.trim().to_string();
            {
                let mut state = state.write();
                state.blood_banks.loading = true;
                state.blood_banks.error = None;
            }
            tasks::bloodbanks::fetch_blood_banks(
                api,
                event_tx,
                BloodBankQuery {
                    search: (!search.is_empty()).then_some(search),
                    ..Default::default()
                },
            );
        }
        Screen::Analytics => {
            {
                let mut state = state.write();
                state.analytics.loading = true;
                state.analytics.error = None;
            }
            tasks::analytics::fetch_donor_performance(api.clone(), event_tx.clone());
            tasks::analytics::fetch_recipient_insights(api.clone(), event_tx.clone());
            tasks::analytics::fetch_delivery_metrics(api.clone(), event_tx.clone());
            tasks::analytics::fetch_users(api, event_tx, ListQuery::default());
        }
        Screen::Notifications => {
            // Force a refetch; on_tick picks the stale flag up immediately.
            state.write().notifications.stale = true;
        }
        Screen::Profile => {
            if matches!(role, Some(UserRole::Donor)) {
                state.write().profile.health_loading = true;
                tasks::users::fetch_health_metrics(api, event_tx);
            }
        }
        Screen::Login | Screen::Register | Screen::VerifyOtp => {}
    }
}
