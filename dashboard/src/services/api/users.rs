//! # User Endpoints
//!
//! Profile management, the user directory, donor discovery, and the
//! donor health journal.

use super::client::{self, ApiClient};
use crate::core::error::Result;
use shared::{
    DonorAvailabilitySummary, HealthMetric, ListQuery, NearbyDonor, NearbyDonorsQuery, Paginated,
    ProfilePatch, User,
};

/// Fetch the authenticated user's full record.
pub async fn fetch_current_user(api: &ApiClient) -> Result<User> {
    let response = api
        .client
        .get(api.url("/users/me"))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Apply a partial update to the authenticated user's profile.
#[tracing::instrument(skip(api, patch))]
pub async fn update_profile(api: &ApiClient, patch: ProfilePatch) -> Result<User> {
    let response = api
        .client
        .put(api.url("/users/me"))
        .json(&patch)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// List users, optionally filtered by role. Admin only.
pub async fn list_users(api: &ApiClient, query: &ListQuery) -> Result<Paginated<User>> {
    let response = api
        .client
        .get(api.url("/users"))
        .query(query)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Find available donors near a point, scored for blood-type compatibility.
pub async fn nearby_donors(api: &ApiClient, query: &NearbyDonorsQuery) -> Result<Vec<NearbyDonor>> {
    let response = api
        .client
        .get(api.url("/users/donors/nearby"))
        .query(query)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Availability counts across the donor pool plus the most active donors.
pub async fn donor_availability(api: &ApiClient) -> Result<DonorAvailabilitySummary> {
    let response = api
        .client
        .get(api.url("/users/donors/availability"))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Recent health journal entries for the authenticated donor.
pub async fn health_metrics(api: &ApiClient, limit: Option<u32>) -> Result<Vec<HealthMetric>> {
    let mut request = api.client.get(api.url("/users/me/health"));
    if let Some(limit) = limit {
        request = request.query(&[("limit", limit)]);
    }
    let response = request.send().await.map_err(client::transport)?;
    client::decode(response).await
}

/// Append an entry to the authenticated donor's health journal.
pub async fn add_health_metric(api: &ApiClient, metric: &HealthMetric) -> Result<HealthMetric> {
    let response = api
        .client
        .post(api.url("/users/me/health"))
        .json(metric)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}
