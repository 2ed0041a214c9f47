//! # Profile Handlers
//!
//! Profile save and the donor health journal.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::services::api::ApiClient;
use crate::session::SessionStore;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{normalize_phone, Availability, HealthMetric, NotificationPreferences, ProfilePatch};
use std::sync::Arc;

/// Handle the profile form save.
pub(crate) fn handle_profile_save(
    state: Arc<RwLock<AppState>>,
    session: Arc<SessionStore>,
    event_tx: Sender<AppEvent>,
) {
    let profile = {
        let state = state.read();
        if state.profile.submitting {
            return;
        }
        state.profile.clone()
    };

    for check in [
        validation::validate_required(&profile.first_name, "First name"),
        validation::validate_required(&profile.last_name, "Last name"),
        validation::validate_phone(&profile.phone_number),
    ] {
        if !check.is_valid {
            state.write().profile.error = check.error;
            return;
        }
    }
    let blood_type = profile.blood_type.trim().to_string();
    if !blood_type.is_empty() {
        let check = validation::validate_blood_type(&blood_type);
        if !check.is_valid {
            state.write().profile.error = check.error;
            return;
        }
    }

    let patch = ProfilePatch {
        first_name: Some(profile.first_name.trim().to_string()),
        last_name: Some(profile.last_name.trim().to_string()),
        phone_number: Some(normalize_phone(&profile.phone_number)),
        blood_type: (!blood_type.is_empty()).then(|| blood_type.to_uppercase()),
        availability: Some(Availability {
            is_available: profile.available,
            next_available_date: None,
            preferred_donation_centers: None,
        }),
        notification_preferences: Some(NotificationPreferences {
            emergency_alerts: profile.emergency_alerts,
            email_updates: profile.email_updates,
            sms_updates: profile.sms_updates,
        }),
        location: None,
    };

    {
        let mut state = state.write();
        state.profile.error = None;
        state.profile.message = None;
        state.profile.submitting = true;
    }
    tasks::auth::update_profile(session, event_tx, patch);
}

/// Handle the health journal entry form.
pub(crate) fn handle_health_submit(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
) {
    let form = {
        let state = state.read();
        if state.profile.health_form.submitting {
            return;
        }
        state.profile.health_form.clone()
    };

    // Optional numeric fields; anything present must parse.
    let parse = |value: &str, label: &str| -> Result<Option<f64>, String> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| format!("{label} must be a number"))
    };

    let parsed = (|| {
        Ok::<_, String>(HealthMetric {
            hemoglobin: parse(&form.hemoglobin, "Hemoglobin")?,
            blood_pressure_systolic: parse(&form.systolic, "Systolic pressure")?,
            blood_pressure_diastolic: parse(&form.diastolic, "Diastolic pressure")?,
            pulse: parse(&form.pulse, "Pulse")?,
            weight: parse(&form.weight, "Weight")?,
            notes: {
                let notes = form.notes.trim();
                (!notes.is_empty()).then(|| notes.to_string())
            },
            recorded_at: None,
        })
    })();

    let metric = match parsed {
        Ok(metric) => metric,
        Err(message) => {
            state.write().profile.health_form.error = Some(message);
            return;
        }
    };

    if metric.hemoglobin.is_none()
        && metric.blood_pressure_systolic.is_none()
        && metric.blood_pressure_diastolic.is_none()
        && metric.pulse.is_none()
        && metric.weight.is_none()
    {
        state.write().profile.health_form.error =
            Some("Enter at least one measurement".to_string());
        return;
    }

    {
        let mut state = state.write();
        state.profile.health_form.error = None;
        state.profile.health_form.submitting = true;
    }
    tasks::users::add_health_metric(api, event_tx, metric);
}
