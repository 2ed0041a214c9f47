//! # Blood Request Handlers

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks::{self, requests::RequestAction};
use crate::services::api::ApiClient;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{CreateRequestPayload, Hospital};
use std::sync::Arc;

/// Handle the create-request form submission.
pub(crate) fn handle_request_submit(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
) {
    let form = {
        let state = state.read();
        if state.requests.form.submitting {
            return;
        }
        state.requests.form.clone()
    };

    let blood_check = validation::validate_blood_type(&form.blood_type);
    if !blood_check.is_valid {
        state.write().requests.form.error = blood_check.error;
        return;
    }
    let units = match form.units.trim().parse::<u32>() {
        Ok(units) if units >= 1 => units,
        _ => {
            state.write().requests.form.error =
                Some("Units must be a whole number of at least 1".to_string());
            return;
        }
    };

    let hospital_name = form.hospital_name.trim();
    let hospital = (!hospital_name.is_empty()).then(|| Hospital {
        name: Some(hospital_name.to_string()),
        address: {
            let address = form.hospital_address.trim();
            (!address.is_empty()).then(|| address.to_string())
        },
        location: None,
    });

    let payload = CreateRequestPayload {
        blood_type: form.blood_type.trim().to_uppercase(),
        units_needed: units,
        urgency: form.urgency,
        hospital,
        notes: {
            let notes = form.notes.trim();
            (!notes.is_empty()).then(|| notes.to_string())
        },
    };

    {
        let mut state = state.write();
        state.requests.form.error = None;
        state.requests.form.submitting = true;
    }
    tasks::requests::create_request(api, event_tx, payload);
}

/// Run one of the lifecycle actions on a request row.
pub(crate) fn handle_request_action(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    request_id: String,
    action: RequestAction,
) {
    {
        let mut state = state.write();
        // One lifecycle action at a time; the row's buttons are disabled
        // until the result lands.
        if state.requests.busy_request.is_some() {
            return;
        }
        state.requests.busy_request = Some(request_id.clone());
    }
    tasks::requests::request_action(api, event_tx, request_id, action);
}
