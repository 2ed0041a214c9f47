//! # Appointment Handlers

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::services::api::ApiClient;
use crate::utils::validation;
use async_channel::Sender;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use shared::{AppointmentPatch, AppointmentStatus, CreateAppointmentPayload};
use std::sync::Arc;

/// Handle the booking form submission.
pub(crate) fn handle_appointment_submit(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
) {
    let form = {
        let state = state.read();
        if state.appointments.form.submitting {
            return;
        }
        state.appointments.form.clone()
    };

    let check = validation::validate_required(&form.blood_bank_id, "Blood bank");
    if !check.is_valid {
        state.write().appointments.form.error = check.error;
        return;
    }
    let scheduled_at = match form.scheduled_at.trim().parse::<DateTime<Utc>>() {
        Ok(at) => at,
        Err(_) => {
            state.write().appointments.form.error =
                Some("Scheduled time must be RFC 3339, e.g. 2026-09-14T10:30:00Z".to_string());
            return;
        }
    };

    let payload = CreateAppointmentPayload {
        blood_bank_id: form.blood_bank_id.trim().to_string(),
        scheduled_at,
        notes: {
            let notes = form.notes.trim();
            (!notes.is_empty()).then(|| notes.to_string())
        },
    };

    {
        let mut state = state.write();
        state.appointments.form.error = None;
        state.appointments.form.submitting = true;
    }
    tasks::appointments::create_appointment(api, event_tx, payload);
}

/// Change the status of an appointment row (cancel, complete, no-show).
pub(crate) fn handle_appointment_status(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    appointment_id: String,
    status: AppointmentStatus,
) {
    {
        let mut state = state.write();
        if state.appointments.busy_appointment.is_some() {
            return;
        }
        state.appointments.busy_appointment = Some(appointment_id.clone());
    }
    tasks::appointments::update_appointment(
        api,
        event_tx,
        appointment_id,
        AppointmentPatch {
            status: Some(status),
            ..Default::default()
        },
    );
}
