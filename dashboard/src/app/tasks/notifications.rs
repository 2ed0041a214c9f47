//! # Notification Tasks
//!
//! Refetches the notification feed after a realtime invalidation or the
//! fallback interval, and pushes read-state changes.

use crate::app::events::AppEvent;
use crate::services::api::{self, ApiClient};
use async_channel::Sender;
use shared::ListQuery;
use std::sync::Arc;
use tokio::spawn;

/// Page size for the notification drawer; matches what the badge counts.
const FEED_LIMIT: u32 = 20;

pub(crate) fn fetch_notifications(api: Arc<ApiClient>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let query = ListQuery {
            limit: Some(FEED_LIMIT),
            ..Default::default()
        };
        let result = api::notifications::list_notifications(&api, &query).await;
        let _ = event_tx.send(AppEvent::NotificationsLoaded(result)).await;
    });
}

pub(crate) fn mark_read(api: Arc<ApiClient>, event_tx: Sender<AppEvent>, notification_id: String) {
    spawn(async move {
        let result = api::notifications::mark_notification_read(&api, &notification_id).await;
        let _ = event_tx.send(AppEvent::NotificationUpdated(result)).await;
    });
}

pub(crate) fn mark_all_read(api: Arc<ApiClient>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = api::notifications::mark_all_notifications(&api).await;
        let _ = event_tx.send(AppEvent::NotificationsAllRead(result)).await;
    });
}
