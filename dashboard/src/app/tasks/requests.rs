//! # Blood Request Tasks
//!
//! Async tasks for the request list, creation, and the matching lifecycle.

use crate::app::events::AppEvent;
use crate::services::api::{self, ApiClient};
use async_channel::Sender;
use shared::{CreateRequestPayload, ListQuery, NearbyDonorsQuery};
use std::sync::Arc;
use tokio::spawn;

pub(crate) fn fetch_requests(api: Arc<ApiClient>, event_tx: Sender<AppEvent>, query: ListQuery) {
    spawn(async move {
        let result = api::requests::list_requests(&api, &query).await;
        let _ = event_tx.send(AppEvent::RequestsLoaded(result)).await;
    });
}

pub(crate) fn create_request(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    payload: CreateRequestPayload,
) {
    spawn(async move {
        let result = api::requests::create_request(&api, payload).await;
        let _ = event_tx.send(AppEvent::RequestSaved(result)).await;
    });
}

/// One of the POST lifecycle actions on a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    Match,
    Escalate,
    Accept,
    Decline,
}

pub(crate) fn request_action(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    request_id: String,
    action: RequestAction,
) {
    spawn(async move {
        let result = match action {
            RequestAction::Match => api::requests::match_donors(&api, &request_id).await,
            RequestAction::Escalate => api::requests::escalate_emergency(&api, &request_id).await,
            RequestAction::Accept => api::requests::accept_request(&api, &request_id).await,
            RequestAction::Decline => api::requests::decline_request(&api, &request_id).await,
        };
        let _ = event_tx.send(AppEvent::RequestSaved(result)).await;
    });
}

pub(crate) fn fetch_nearby_donors(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    query: NearbyDonorsQuery,
) {
    spawn(async move {
        let result = api::users::nearby_donors(&api, &query).await;
        let _ = event_tx.send(AppEvent::NearbyDonorsLoaded(result)).await;
    });
}
