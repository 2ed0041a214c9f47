//! # Appointment Tasks

use crate::app::events::AppEvent;
use crate::services::api::{self, ApiClient};
use async_channel::Sender;
use shared::{AppointmentPatch, CreateAppointmentPayload, ListQuery};
use std::sync::Arc;
use tokio::spawn;

pub(crate) fn fetch_appointments(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    query: ListQuery,
) {
    spawn(async move {
        let result = api::appointments::list_appointments(&api, &query).await;
        let _ = event_tx.send(AppEvent::AppointmentsLoaded(result)).await;
    });
}

pub(crate) fn create_appointment(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    payload: CreateAppointmentPayload,
) {
    spawn(async move {
        let result = api::appointments::create_appointment(&api, payload).await;
        let _ = event_tx.send(AppEvent::AppointmentSaved(result)).await;
    });
}

pub(crate) fn update_appointment(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    appointment_id: String,
    patch: AppointmentPatch,
) {
    spawn(async move {
        let result = api::appointments::update_appointment(&api, &appointment_id, patch).await;
        let _ = event_tx.send(AppEvent::AppointmentSaved(result)).await;
    });
}
