//! Delivery and tracking DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::request::BloodRequest;
use super::user::User;

/// Lifecycle of a delivery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    PendingPickup,
    InTransit,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    pub fn all() -> &'static [DeliveryStatus] {
        &[
            DeliveryStatus::PendingPickup,
            DeliveryStatus::InTransit,
            DeliveryStatus::Delivered,
            DeliveryStatus::Cancelled,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::PendingPickup => "Pending pickup",
            DeliveryStatus::InTransit => "In transit",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Cancelled => "Cancelled",
        }
    }

    /// Wire value, for filter query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::PendingPickup => "pending_pickup",
            DeliveryStatus::InTransit => "in_transit",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Cancelled => "cancelled",
        }
    }
}

/// One entry in a delivery's tracking log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A delivery as returned by the backend. ETA computation is server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    #[serde(rename = "_id")]
    pub id: String,
    pub request_id: BloodRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_id: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_person_id: Option<User>,
    pub status: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_eta: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_eta: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tracking: Vec<TrackingEvent>,
}

/// Payload for `POST /deliveries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeliveryPayload {
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_id: Option<String>,
    pub delivery_person_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_eta: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_eta: Option<DateTime<Utc>>,
}

/// Payload for `POST /deliveries/:id/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStatusPayload {
    pub status: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_eta: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_eta: Option<DateTime<Utc>>,
}

/// Payload for `POST /deliveries/:id/track`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEventPayload {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::PendingPickup).unwrap(),
            "\"pending_pickup\""
        );
        for status in DeliveryStatus::all() {
            let wire = serde_json::to_string(status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_tracking_payload_omits_optional_fields() {
        let payload = TrackingEventPayload {
            status: "picked_up".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"status":"picked_up"}"#);
    }
}
