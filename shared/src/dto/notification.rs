//! Notification DTOs.
//!
//! The client never constructs or deletes notifications; it only reflects
//! server state and flips read flags through the dedicated endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broad category used for filtering and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Alert,
    Reminder,
    Update,
    Assignment,
}

impl NotificationCategory {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationCategory::Alert => "Alert",
            NotificationCategory::Reminder => "Reminder",
            NotificationCategory::Update => "Update",
            NotificationCategory::Assignment => "Assignment",
        }
    }
}

/// A notification as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_deserializes_with_metadata() {
        let json = r#"{
            "_id": "n1",
            "title": "Donor matched",
            "message": "A donor accepted your request",
            "category": "update",
            "metadata": { "requestId": "req1" },
            "isRead": false,
            "createdAt": "2024-06-02T12:00:00Z"
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.category, NotificationCategory::Update);
        assert!(!notification.is_read);
        assert_eq!(notification.metadata.unwrap()["requestId"], "req1");
    }
}
