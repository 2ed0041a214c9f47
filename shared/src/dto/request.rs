//! Blood request and donor match DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{GeoLocation, User};

/// How urgently a request needs blood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub fn all() -> &'static [Urgency] {
        &[Urgency::Low, Urgency::Medium, Urgency::High, Urgency::Critical]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
            Urgency::Critical => "Critical",
        }
    }
}

/// Lifecycle of a blood request. Transitions happen server-side; the client
/// only renders whatever state comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Matched,
    InTransit,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Matched => "Matched",
            RequestStatus::InTransit => "In transit",
            RequestStatus::Completed => "Completed",
            RequestStatus::Cancelled => "Cancelled",
        }
    }
}

/// A matched donor's response state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Notified,
    Accepted,
    Declined,
}

/// One donor candidate attached to a request by the server-side matcher.
/// Scoring happens entirely on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMatch {
    pub donor_id: User,
    pub compatibility_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
}

/// Hospital destination attached to a new request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
}

/// A blood request as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub recipient_id: User,
    pub blood_type: String,
    pub units_needed: u32,
    pub urgency: Urgency,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub matches: Vec<RequestMatch>,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /requests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestPayload {
    pub blood_type: String,
    pub units_needed: u32,
    pub urgency: Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<Hospital>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_statuses_use_snake_case() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::InTransit).unwrap(),
            "\"in_transit\""
        );
        let status: RequestStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, RequestStatus::Pending);
    }

    #[test]
    fn test_urgency_ordering_tracks_severity() {
        assert!(Urgency::Critical > Urgency::High);
        assert!(Urgency::High > Urgency::Medium);
        assert!(Urgency::Medium > Urgency::Low);
    }

    #[test]
    fn test_blood_request_deserializes_with_embedded_matches() {
        let json = r#"{
            "_id": "req1",
            "recipientId": {
                "_id": "u1", "firstName": "Ravi", "lastName": "K",
                "email": "r@x.com", "phoneNumber": "+911111111111", "role": "recipient"
            },
            "bloodType": "A+",
            "unitsNeeded": 2,
            "urgency": "critical",
            "status": "matched",
            "matches": [{
                "donorId": {
                    "_id": "u2", "firstName": "Asha", "lastName": "Rao",
                    "email": "a@x.com", "phoneNumber": "+912222222222", "role": "donor"
                },
                "compatibilityScore": 0.92,
                "distanceKm": 3.4,
                "status": "notified"
            }],
            "createdAt": "2024-06-01T08:30:00Z"
        }"#;

        let request: BloodRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.urgency, Urgency::Critical);
        assert_eq!(request.status, RequestStatus::Matched);
        assert_eq!(request.matches.len(), 1);
        assert_eq!(request.matches[0].status, MatchStatus::Notified);
        assert_eq!(request.matches[0].donor_id.first_name, "Asha");
    }
}
