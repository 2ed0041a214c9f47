//! # Blood Bank Tasks

use crate::app::events::AppEvent;
use crate::services::api::{self, ApiClient};
use async_channel::Sender;
use shared::{BloodBankPayload, BloodBankQuery};
use std::sync::Arc;
use tokio::spawn;

pub(crate) fn fetch_blood_banks(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    query: BloodBankQuery,
) {
    spawn(async move {
        let result = api::bloodbanks::list_blood_banks(&api, &query).await;
        let _ = event_tx.send(AppEvent::BloodBanksLoaded(result)).await;
    });
}

pub(crate) fn create_blood_bank(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    payload: BloodBankPayload,
) {
    spawn(async move {
        let result = api::bloodbanks::create_blood_bank(&api, payload).await;
        let _ = event_tx.send(AppEvent::BloodBankSaved(result)).await;
    });
}
