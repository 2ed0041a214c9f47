//! # Notification Handlers

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::services::api::ApiClient;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Mark a single notification as read.
pub(crate) fn handle_mark_read(
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    notification_id: String,
) {
    tasks::notifications::mark_read(api, event_tx, notification_id);
}

/// Mark every notification as read, then refetch the feed.
pub(crate) fn handle_mark_all_read(
    state: Arc<RwLock<AppState>>,
    api: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
) {
    // Optimistically flip the local copies so the badge clears immediately;
    // the follow-up fetch after NotificationsAllRead reconciles.
    {
        let mut state = state.write();
        for notification in &mut state.notifications.items {
            notification.is_read = true;
        }
    }
    tasks::notifications::mark_all_read(api, event_tx);
}
