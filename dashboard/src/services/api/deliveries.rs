//! # Delivery Endpoints
//!
//! Courier assignment, status transitions, and the tracking timeline.

use super::client::{self, ApiClient};
use crate::core::error::Result;
use shared::{
    CreateDeliveryPayload, Delivery, DeliveryStatusPayload, ListQuery, Paginated,
    TrackingEventPayload,
};

/// List deliveries visible to the authenticated user.
pub async fn list_deliveries(api: &ApiClient, query: &ListQuery) -> Result<Paginated<Delivery>> {
    let response = api
        .client
        .get(api.url("/deliveries"))
        .query(query)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Assign a courier to a fulfilled request, creating the delivery record.
#[tracing::instrument(skip(api, payload), fields(request_id = %payload.request_id))]
pub async fn create_delivery(api: &ApiClient, payload: CreateDeliveryPayload) -> Result<Delivery> {
    let response = api
        .client
        .post(api.url("/deliveries"))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Advance a delivery through its status lifecycle.
pub async fn update_delivery_status(
    api: &ApiClient,
    delivery_id: &str,
    payload: DeliveryStatusPayload,
) -> Result<Delivery> {
    let response = api
        .client
        .post(api.url(&format!("/deliveries/{delivery_id}/status")))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Append a tracking event (position, note) to a delivery's timeline.
pub async fn add_tracking_event(
    api: &ApiClient,
    delivery_id: &str,
    payload: TrackingEventPayload,
) -> Result<Delivery> {
    let response = api
        .client
        .post(api.url(&format!("/deliveries/{delivery_id}/track")))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}
