//! # Event Folding
//!
//! Folds finished-task events into [`AppState`]. This is pure state
//! manipulation; network work already happened in the task, and any
//! follow-up fetch is returned as a [`Followup`] for the caller to spawn.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen, VerifyOtpForm};
use crate::session::SessionStatus;
use std::time::Instant;

/// Work that `on_tick` should kick off after an event lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Followup {
    /// Navigation happened as part of the event; fetch the screen's data.
    LoadScreen(Screen),
}

/// Apply one event to the state, returning any follow-up work.
pub(crate) fn apply(state: &mut AppState, event: AppEvent) -> Option<Followup> {
    match event {
        AppEvent::SessionChanged(snapshot) => {
            state.session = snapshot;
            if state.session.status == SessionStatus::Authenticated && !state.profile.seeded {
                if let Some(user) = state.session.user.clone() {
                    state.profile.seed_from(&user);
                }
            }
            None
        }

        AppEvent::LoginResult(result) => {
            state.login.submitting = false;
            match result {
                Ok(()) => {
                    state.login = Default::default();
                    state.current_screen = Screen::Overview;
                    Some(Followup::LoadScreen(Screen::Overview))
                }
                Err(err) => {
                    state.login.error = Some(err.to_string());
                    None
                }
            }
        }

        AppEvent::RegisterResult(result) => {
            state.register.submitting = false;
            match result {
                Ok(_) => {
                    // The demo OTP hint travels in the session snapshot; the
                    // verify screen shows it from there.
                    state.verify.info =
                        Some("Account created. Enter the code sent to your phone.".to_string());
                    state.current_screen = Screen::VerifyOtp;
                }
                Err(err) => state.register.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::OtpSendResult(result) => {
            match result {
                Ok(message) => {
                    state.verify.error = None;
                    state.verify.info = Some(message);
                }
                Err(err) => state.verify.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::OtpVerifyResult(result) => {
            state.verify.submitting = false;
            match result {
                Ok(()) => {
                    state.verify = VerifyOtpForm::default();
                    state.current_screen = Screen::Overview;
                    Some(Followup::LoadScreen(Screen::Overview))
                }
                Err(err) => {
                    state.verify.error = Some(err.to_string());
                    None
                }
            }
        }

        AppEvent::ProfileSaved(result) => {
            state.profile.submitting = false;
            match result {
                Ok(user) => {
                    state.profile.seed_from(&user);
                    state.profile.error = None;
                    state.profile.message = Some("Profile saved".to_string());
                }
                Err(err) => state.profile.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::RequestsLoaded(result) => {
            state.requests.loading = false;
            match result {
                Ok(page) => {
                    state.requests.items = page.items;
                    state.requests.pagination = page.pagination;
                    state.requests.error = None;
                }
                Err(err) => state.requests.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::RequestSaved(result) => {
            state.requests.form.submitting = false;
            state.requests.busy_request = None;
            match result {
                Ok(request) => {
                    state.requests.error = None;
                    match state.requests.items.iter_mut().find(|r| r.id == request.id) {
                        Some(existing) => *existing = request,
                        None => {
                            state.requests.items.insert(0, request);
                            state.requests.form = Default::default();
                        }
                    }
                }
                Err(err) => state.requests.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::NearbyDonorsLoaded(result) => {
            state.requests.nearby_loading = false;
            match result {
                Ok(donors) => state.requests.nearby = donors,
                // The side panel is auxiliary; keep the list error slot for
                // the main fetch and just log-free drop this one.
                Err(_) => state.requests.nearby.clear(),
            }
            None
        }

        AppEvent::DeliveriesLoaded(result) => {
            state.deliveries.loading = false;
            match result {
                Ok(page) => {
                    state.deliveries.items = page.items;
                    state.deliveries.pagination = page.pagination;
                    state.deliveries.error = None;
                }
                Err(err) => state.deliveries.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::DeliverySaved(result) => {
            state.deliveries.form.submitting = false;
            state.deliveries.busy_delivery = None;
            match result {
                Ok(delivery) => {
                    state.deliveries.error = None;
                    if state.deliveries.selected.as_deref() == Some(delivery.id.as_str()) {
                        state.deliveries.tracking = Default::default();
                    }
                    match state
                        .deliveries
                        .items
                        .iter_mut()
                        .find(|d| d.id == delivery.id)
                    {
                        Some(existing) => *existing = delivery,
                        None => {
                            state.deliveries.items.insert(0, delivery);
                            state.deliveries.form = Default::default();
                        }
                    }
                }
                Err(err) => state.deliveries.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::AppointmentsLoaded(result) => {
            state.appointments.loading = false;
            match result {
                Ok(page) => {
                    state.appointments.items = page.items;
                    state.appointments.pagination = page.pagination;
                    state.appointments.error = None;
                }
                Err(err) => state.appointments.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::AppointmentSaved(result) => {
            state.appointments.form.submitting = false;
            state.appointments.busy_appointment = None;
            match result {
                Ok(appointment) => {
                    state.appointments.error = None;
                    match state
                        .appointments
                        .items
                        .iter_mut()
                        .find(|a| a.id == appointment.id)
                    {
                        Some(existing) => *existing = appointment,
                        None => {
                            state.appointments.items.insert(0, appointment);
                            state.appointments.form = Default::default();
                        }
                    }
                }
                Err(err) => state.appointments.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::BloodBanksLoaded(result) => {
            state.blood_banks.loading = false;
            match result {
                Ok(banks) => {
                    state.blood_banks.items = banks;
                    state.blood_banks.error = None;
                }
                Err(err) => state.blood_banks.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::BloodBankSaved(result) => {
            state.blood_banks.form.submitting = false;
            match result {
                Ok(bank) => {
                    state.blood_banks.error = None;
                    match state.blood_banks.items.iter_mut().find(|b| b.id == bank.id) {
                        Some(existing) => *existing = bank,
                        None => {
                            state.blood_banks.items.insert(0, bank);
                            state.blood_banks.form = Default::default();
                        }
                    }
                }
                Err(err) => state.blood_banks.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::NotificationsLoaded(result) => {
            state.notifications.fetching = false;
            match result {
                Ok(page) => {
                    state.notifications.items = page.items;
                    state.notifications.pagination = page.pagination;
                    state.notifications.stale = false;
                    state.notifications.last_fetch = Some(Instant::now());
                    state.notifications.error = None;
                }
                Err(err) => {
                    // Leave `stale` set; the fallback interval retries.
                    state.notifications.last_fetch = Some(Instant::now());
                    state.notifications.error = Some(err.to_string());
                }
            }
            None
        }

        AppEvent::NotificationUpdated(result) => {
            match result {
                Ok(notification) => {
                    if let Some(existing) = state
                        .notifications
                        .items
                        .iter_mut()
                        .find(|n| n.id == notification.id)
                    {
                        *existing = notification;
                    }
                }
                Err(err) => state.notifications.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::NotificationsAllRead(result) => {
            match result {
                // Refetch so the cached feed matches the server again.
                Ok(()) => state.notifications.stale = true,
                Err(err) => state.notifications.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::OverviewLoaded(result) => {
            state.overview.loading = false;
            match result {
                Ok(overview) => {
                    state.overview.overview = Some(overview);
                    state.overview.error = None;
                }
                Err(err) => state.overview.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::AvailabilityLoaded(result) => {
            if let Ok(summary) = result {
                state.overview.availability = Some(summary);
            }
            None
        }

        AppEvent::DonorPerformanceLoaded(result) => {
            state.analytics.loading = false;
            match result {
                Ok(performance) => {
                    state.analytics.donor_performance = Some(performance);
                    state.analytics.error = None;
                }
                Err(err) => state.analytics.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::RecipientInsightsLoaded(result) => {
            match result {
                Ok(rows) => state.analytics.recipient_insights = rows,
                Err(err) => state.analytics.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::DeliveryMetricsLoaded(result) => {
            match result {
                Ok(rows) => state.analytics.delivery_metrics = rows,
                Err(err) => state.analytics.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::UsersLoaded(result) => {
            match result {
                Ok(page) => {
                    state.analytics.users = page.items;
                    state.analytics.users_pagination = page.pagination;
                }
                Err(err) => state.analytics.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::HealthMetricsLoaded(result) => {
            state.profile.health_loading = false;
            match result {
                Ok(metrics) => state.profile.health = metrics,
                Err(err) => state.profile.error = Some(err.to_string()),
            }
            None
        }

        AppEvent::HealthMetricSaved(result) => {
            state.profile.health_form.submitting = false;
            match result {
                Ok(metric) => {
                    state.profile.health.insert(0, metric);
                    state.profile.health_form = Default::default();
                }
                Err(err) => state.profile.health_form.error = Some(err.to_string()),
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use shared::{Paginated, RequestStatus, Urgency};

    fn request(id: &str, status: RequestStatus) -> shared::BloodRequest {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "recipientId": {
                "_id": "u1",
                "firstName": "Ada",
                "lastName": "Okafor",
                "email": "ada@example.com",
                "phoneNumber": "+919876543210",
                "role": "recipient",
                "createdAt": "2026-01-10T08:00:00Z",
            },
            "bloodType": "O-",
            "unitsNeeded": 2,
            "urgency": "high",
            "status": status,
            "createdAt": "2026-02-01T09:00:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn login_failure_keeps_screen_and_surfaces_error() {
        let mut state = AppState::new();
        state.current_screen = Screen::Login;
        state.login.submitting = true;

        let followup = apply(
            &mut state,
            AppEvent::LoginResult(Err(ApiError::Http {
                status: 401,
                message: "Invalid credentials".to_string(),
            })),
        );

        assert_eq!(followup, None);
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.login.submitting);
        assert_eq!(state.login.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn login_success_navigates_to_overview() {
        let mut state = AppState::new();
        state.current_screen = Screen::Login;
        state.login.submitting = true;

        let followup = apply(&mut state, AppEvent::LoginResult(Ok(())));

        assert_eq!(followup, Some(Followup::LoadScreen(Screen::Overview)));
        assert_eq!(state.current_screen, Screen::Overview);
    }

    #[test]
    fn saved_request_upserts_by_id() {
        let mut state = AppState::new();
        state.requests.items = vec![request("r1", RequestStatus::Pending)];
        state.requests.busy_request = Some("r1".to_string());

        apply(
            &mut state,
            AppEvent::RequestSaved(Ok(request("r1", RequestStatus::Matched))),
        );
        assert_eq!(state.requests.items.len(), 1);
        assert_eq!(state.requests.items[0].status, RequestStatus::Matched);
        assert_eq!(state.requests.busy_request, None);

        // Unknown id is a fresh create and lands at the top.
        state.requests.form.submitting = true;
        state.requests.form.urgency = Urgency::Critical;
        apply(
            &mut state,
            AppEvent::RequestSaved(Ok(request("r2", RequestStatus::Pending))),
        );
        assert_eq!(state.requests.items.len(), 2);
        assert_eq!(state.requests.items[0].id, "r2");
        // Create resets the form.
        assert_eq!(state.requests.form.urgency, Urgency::Medium);
    }

    #[test]
    fn notification_fetch_clears_stale_and_stamps_time() {
        let mut state = AppState::new();
        assert!(state.notifications.stale);
        state.notifications.fetching = true;

        apply(
            &mut state,
            AppEvent::NotificationsLoaded(Ok(Paginated::default())),
        );

        assert!(!state.notifications.stale);
        assert!(!state.notifications.fetching);
        assert!(state.notifications.last_fetch.is_some());
        assert!(!state.notifications.fallback_due());
    }

    #[test]
    fn failed_notification_fetch_stays_stale_for_retry() {
        let mut state = AppState::new();
        state.notifications.fetching = true;

        apply(
            &mut state,
            AppEvent::NotificationsLoaded(Err(ApiError::Transport("offline".to_string()))),
        );

        assert!(state.notifications.stale);
        assert!(!state.notifications.fetching);
        assert!(state.notifications.error.is_some());
    }

    #[test]
    fn mark_all_read_invalidates_the_feed() {
        let mut state = AppState::new();
        state.notifications.stale = false;

        apply(&mut state, AppEvent::NotificationsAllRead(Ok(())));

        assert!(state.notifications.stale);
    }
}
