//! # Notification Endpoints
//!
//! The notification feed backing the alert drawer and the realtime
//! invalidation cycle.

use super::client::{self, ApiClient};
use crate::core::error::Result;
use shared::{ListQuery, Notification, Paginated};

/// List the authenticated user's notifications, newest first.
pub async fn list_notifications(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Paginated<Notification>> {
    let response = api
        .client
        .get(api.url("/notifications"))
        .query(query)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Mark a single notification as read.
pub async fn mark_notification_read(
    api: &ApiClient,
    notification_id: &str,
) -> Result<Notification> {
    let response = api
        .client
        .post(api.url(&format!("/notifications/{notification_id}/read")))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Mark every notification as read.
pub async fn mark_all_notifications(api: &ApiClient) -> Result<()> {
    let response = api
        .client
        .post(api.url("/notifications/mark-all"))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode_unit(response).await
}
