//! # Health Journal Tasks

use crate::app::events::AppEvent;
use crate::services::api::{self, ApiClient};
use async_channel::Sender;
use shared::HealthMetric;
use std::sync::Arc;
use tokio::spawn;

/// Entry cap for the profile screen's history list.
const HISTORY_LIMIT: u32 = 30;

pub(crate) fn fetch_health_metrics(api: Arc<ApiClient>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = api::users::health_metrics(&api, Some(HISTORY_LIMIT)).await;
        let _ = event_tx.send(AppEvent::HealthMetricsLoaded(result)).await;
    });
}

pub(crate) fn add_health_metric(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    metric: HealthMetric,
) {
    spawn(async move {
        let result = api::users::add_health_metric(&api, &metric).await;
        let _ = event_tx.send(AppEvent::HealthMetricSaved(result)).await;
    });
}
