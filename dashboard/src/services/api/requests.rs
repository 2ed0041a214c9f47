//! # Blood Request Endpoints
//!
//! Request creation, listing, and the donor matching lifecycle.

use super::client::{self, ApiClient};
use crate::core::error::Result;
use shared::{BloodRequest, CreateRequestPayload, ListQuery, Paginated};

/// Create a new blood request on behalf of the authenticated recipient.
#[tracing::instrument(skip(api, payload), fields(blood_type = %payload.blood_type, urgency = ?payload.urgency))]
pub async fn create_request(
    api: &ApiClient,
    payload: CreateRequestPayload,
) -> Result<BloodRequest> {
    let response = api
        .client
        .post(api.url("/requests"))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// List blood requests visible to the authenticated user.
pub async fn list_requests(api: &ApiClient, query: &ListQuery) -> Result<Paginated<BloodRequest>> {
    let response = api
        .client
        .get(api.url("/requests"))
        .query(query)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Fetch a single request with its match list.
pub async fn get_request(api: &ApiClient, request_id: &str) -> Result<BloodRequest> {
    let response = api
        .client
        .get(api.url(&format!("/requests/{request_id}")))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Run donor matching for a request, populating its match list.
pub async fn match_donors(api: &ApiClient, request_id: &str) -> Result<BloodRequest> {
    post_action(api, request_id, "match").await
}

/// Escalate a request to emergency urgency, broadcasting to nearby donors.
pub async fn escalate_emergency(api: &ApiClient, request_id: &str) -> Result<BloodRequest> {
    post_action(api, request_id, "escalate").await
}

/// Accept a match as the authenticated donor.
pub async fn accept_request(api: &ApiClient, request_id: &str) -> Result<BloodRequest> {
    post_action(api, request_id, "accept").await
}

/// Decline a match as the authenticated donor.
pub async fn decline_request(api: &ApiClient, request_id: &str) -> Result<BloodRequest> {
    post_action(api, request_id, "decline").await
}

/// POST one of the request lifecycle actions and decode the updated request.
async fn post_action(api: &ApiClient, request_id: &str, action: &str) -> Result<BloodRequest> {
    let response = api
        .client
        .post(api.url(&format!("/requests/{request_id}/{action}")))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}
