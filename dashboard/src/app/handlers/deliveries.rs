//! # Delivery Handlers

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::services::api::ApiClient;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{CreateDeliveryPayload, DeliveryStatus, DeliveryStatusPayload, TrackingEventPayload};
use std::sync::Arc;

/// Handle the assign-courier form submission (admin).
pub(crate) fn handle_delivery_submit(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
) {
    let form = {
        let state = state.read();
        if state.deliveries.form.submitting {
            return;
        }
        state.deliveries.form.clone()
    };

    for check in [
        validation::validate_required(&form.request_id, "Request id"),
        validation::validate_required(&form.courier_id, "Courier id"),
    ] {
        if !check.is_valid {
            state.write().deliveries.form.error = check.error;
            return;
        }
    }

    let payload = CreateDeliveryPayload {
        request_id: form.request_id.trim().to_string(),
        donor_id: None,
        delivery_person_id: form.courier_id.trim().to_string(),
        pickup_eta: None,
        dropoff_eta: None,
    };

    {
        let mut state = state.write();
        state.deliveries.form.error = None;
        state.deliveries.form.submitting = true;
    }
    tasks::deliveries::create_delivery(api, event_tx, payload);
}

/// Advance a delivery to the given status.
pub(crate) fn handle_status_change(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    delivery_id: String,
    status: DeliveryStatus,
) {
    {
        let mut state = state.write();
        if state.deliveries.busy_delivery.is_some() {
            return;
        }
        state.deliveries.busy_delivery = Some(delivery_id.clone());
    }
    tasks::deliveries::update_status(
        api,
        event_tx,
        delivery_id,
        DeliveryStatusPayload {
            status,
            pickup_eta: None,
            dropoff_eta: None,
        },
    );
}

/// Append a tracking event from the courier's tracking form.
pub(crate) fn handle_tracking_submit(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
) {
    let (delivery_id, form) = {
        let state = state.read();
        match state.deliveries.selected.clone() {
            Some(id) => (id, state.deliveries.tracking.clone()),
            None => return,
        }
    };

    let check = validation::validate_required(&form.status, "Status");
    if !check.is_valid {
        state.write().deliveries.error = check.error;
        return;
    }

    let payload = TrackingEventPayload {
        status: form.status.trim().to_string(),
        coordinates: None,
        notes: {
            let notes = form.notes.trim();
            (!notes.is_empty()).then(|| notes.to_string())
        },
    };

    state.write().deliveries.error = None;
    tasks::deliveries::add_tracking_event(api, event_tx, delivery_id, payload);
}
