//! # Appointment Endpoints
//!
//! Donation appointment scheduling against blood banks.

use super::client::{self, ApiClient};
use crate::core::error::Result;
use shared::{Appointment, AppointmentPatch, CreateAppointmentPayload, ListQuery, Paginated};

/// Book a donation slot at a blood bank.
#[tracing::instrument(skip(api, payload), fields(blood_bank_id = %payload.blood_bank_id))]
pub async fn create_appointment(
    api: &ApiClient,
    payload: CreateAppointmentPayload,
) -> Result<Appointment> {
    let response = api
        .client
        .post(api.url("/appointments"))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// List appointments visible to the authenticated user.
pub async fn list_appointments(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Paginated<Appointment>> {
    let response = api
        .client
        .get(api.url("/appointments"))
        .query(query)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Reschedule, annotate, or change the status of an appointment.
pub async fn update_appointment(
    api: &ApiClient,
    appointment_id: &str,
    patch: AppointmentPatch,
) -> Result<Appointment> {
    let response = api
        .client
        .put(api.url(&format!("/appointments/{appointment_id}")))
        .json(&patch)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}
