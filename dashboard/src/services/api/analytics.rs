//! # Analytics Endpoints
//!
//! Aggregated counts and performance series for the overview cards and the
//! admin analytics screen.

use super::client::{self, ApiClient};
use crate::core::error::Result;
use shared::{AnalyticsOverview, DeliveryMetric, DonorPerformance, RecipientInsight};

/// Thirty-day activity counts grouped by role/status/urgency.
pub async fn fetch_overview(api: &ApiClient) -> Result<AnalyticsOverview> {
    let response = api
        .client
        .get(api.url("/analytics/overview"))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Top donors by donation count plus the availability split.
pub async fn fetch_donor_performance(api: &ApiClient) -> Result<DonorPerformance> {
    let response = api
        .client
        .get(api.url("/analytics/donor-performance"))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Per-recipient request volume and fulfilment success rates.
pub async fn fetch_recipient_insights(api: &ApiClient) -> Result<Vec<RecipientInsight>> {
    let response = api
        .client
        .get(api.url("/analytics/recipient-insights"))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Delivery counts and average durations grouped by status.
pub async fn fetch_delivery_metrics(api: &ApiClient) -> Result<Vec<DeliveryMetric>> {
    let response = api
        .client
        .get(api.url("/analytics/delivery-metrics"))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}
