//! # Delivery Tasks
//!
//! Async tasks for the delivery list, courier assignment, status
//! transitions, and tracking events.

use crate::app::events::AppEvent;
use crate::services::api::{self, ApiClient};
use async_channel::Sender;
use shared::{CreateDeliveryPayload, DeliveryStatusPayload, ListQuery, TrackingEventPayload};
use std::sync::Arc;
use tokio::spawn;

pub(crate) fn fetch_deliveries(api: Arc<ApiClient>, event_tx: Sender<AppEvent>, query: ListQuery) {
    spawn(async move {
        let result = api::deliveries::list_deliveries(&api, &query).await;
        let _ = event_tx.send(AppEvent::DeliveriesLoaded(result)).await;
    });
}

pub(crate) fn create_delivery(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    payload: CreateDeliveryPayload,
) {
    spawn(async move {
        let result = api::deliveries::create_delivery(&api, payload).await;
        let _ = event_tx.send(AppEvent::DeliverySaved(result)).await;
    });
}

pub(crate) fn update_status(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    delivery_id: String,
    payload: DeliveryStatusPayload,
) {
    spawn(async move {
        let result = api::deliveries::update_delivery_status(&api, &delivery_id, payload).await;
        let _ = event_tx.send(AppEvent::DeliverySaved(result)).await;
    });
}

pub(crate) fn add_tracking_event(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    delivery_id: String,
    payload: TrackingEventPayload,
) {
    spawn(async move {
        let result = api::deliveries::add_tracking_event(&api, &delivery_id, payload).await;
        let _ = event_tx.send(AppEvent::DeliverySaved(result)).await;
    });
}
