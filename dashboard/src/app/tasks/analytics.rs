//! # Analytics and Directory Tasks
//!
//! Fetches for the overview cards, the admin analytics screen, and the
//! donor availability summary.

use crate::app::events::AppEvent;
use crate::services::api::{self, ApiClient};
use async_channel::Sender;
use shared::ListQuery;
use std::sync::Arc;
use tokio::spawn;

pub(crate) fn fetch_overview(api: Arc<ApiClient>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = api::analytics::fetch_overview(&api).await;
        let _ = event_tx.send(AppEvent::OverviewLoaded(result)).await;
    });
}

pub(crate) fn fetch_donor_availability(api: Arc<ApiClient>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = api::users::donor_availability(&api).await;
        let _ = event_tx.send(AppEvent::AvailabilityLoaded(result)).await;
    });
}

pub(crate) fn fetch_donor_performance(api: Arc<ApiClient>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = api::analytics::fetch_donor_performance(&api).await;
        let _ = event_tx.send(AppEvent::DonorPerformanceLoaded(result)).await;
    });
}

pub(crate) fn fetch_recipient_insights(api: Arc<ApiClient>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = api::analytics::fetch_recipient_insights(&api).await;
        let _ = event_tx
            .send(AppEvent::RecipientInsightsLoaded(result))
            .await;
    });
}

pub(crate) fn fetch_delivery_metrics(api: Arc<ApiClient>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = api::analytics::fetch_delivery_metrics(&api).await;
        let _ = event_tx.send(AppEvent::DeliveryMetricsLoaded(result)).await;
    });
}

pub(crate) fn fetch_users(api: Arc<ApiClient>, event_tx: Sender<AppEvent>, query: ListQuery) {
    spawn(async move {
        let result = api::users::list_users(&api, &query).await;
        let _ = event_tx.send(AppEvent::UsersLoaded(result)).await;
    });
}
