//! # Blood Bank Handlers

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::services::api::ApiClient;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{BloodBankPayload, BloodBankQuery};
use std::sync::Arc;

/// Re-run the directory search with the current search box contents.
pub(crate) fn handle_search(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
) {
    let search = {
        let mut state = state.write();
        state.blood_banks.loading = true;
        state.blood_banks.error = None;
        state.blood_banks.search.trim().to_string()
    };
    tasks::bloodbanks::fetch_blood_banks(
        api,
        event_tx,
        BloodBankQuery {
            search: (!search.is_empty()).then_some(search),
            ..Default::default()
        },
    );
}

/// Handle the admin create form submission.
pub(crate) fn handle_blood_bank_submit(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
) {
    let form = {
        let state = state.read();
        if state.blood_banks.form.submitting {
            return;
        }
        state.blood_banks.form.clone()
    };

    let check = validation::validate_required(&form.name, "Name");
    if !check.is_valid {
        state.write().blood_banks.form.error = check.error;
        return;
    }

    let optional = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    };
    let payload = BloodBankPayload {
        name: Some(form.name.trim().to_string()),
        contact_number: optional(&form.contact_number),
        email: optional(&form.email),
        address: optional(&form.address),
        location: None,
        inventory: None,
    };

    {
        let mut state = state.write();
        state.blood_banks.form.error = None;
        state.blood_banks.form.submitting = true;
    }
    tasks::bloodbanks::create_blood_bank(api, event_tx, payload);
}
