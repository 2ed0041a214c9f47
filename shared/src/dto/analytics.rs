//! Aggregate analytics payloads for the admin dashboard.
//!
//! All numbers are computed server-side; the client only renders them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One `{ _id, count }` aggregation bucket, keyed by a string dimension
/// (role, status, urgency...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountBucket {
    #[serde(rename = "_id")]
    pub key: String,
    pub count: u64,
}

/// `GET /analytics/overview`: counts per dimension for each entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    #[serde(default)]
    pub users: Vec<CountBucket>,
    #[serde(default)]
    pub requests: Vec<CountBucket>,
    #[serde(default)]
    pub deliveries: Vec<CountBucket>,
    #[serde(default)]
    pub appointments: Vec<CountBucket>,
}

/// One row in the donor leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopDonor {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    pub donor_profile: TopDonorProfile,
}

/// Donation stats embedded in a leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopDonorProfile {
    pub total_donations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_donation_date: Option<DateTime<Utc>>,
}

/// Availability bucket keyed by a boolean dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityBucket {
    #[serde(rename = "_id")]
    pub available: bool,
    pub count: u64,
}

/// `GET /analytics/donor-performance`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorPerformance {
    #[serde(default)]
    pub top_donors: Vec<TopDonor>,
    #[serde(default)]
    pub availability: Vec<AvailabilityBucket>,
}

/// One row of `GET /analytics/recipient-insights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientInsight {
    #[serde(rename = "_id")]
    pub recipient_id: String,
    pub recipient: RecipientName,
    pub total_requests: u64,
    pub completed: u64,
    pub success_rate: f64,
}

/// Name fields embedded in a recipient insight row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientName {
    pub first_name: String,
    pub last_name: String,
}

/// One row of `GET /analytics/delivery-metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryMetric {
    pub status: String,
    pub count: u64,
    #[serde(default)]
    pub avg_duration_minutes: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_buckets() {
        let json = r#"{
            "users": [{ "_id": "donor", "count": 12 }, { "_id": "recipient", "count": 5 }],
            "requests": [{ "_id": "pending", "count": 3 }],
            "deliveries": [],
            "appointments": []
        }"#;
        let overview: AnalyticsOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.users.len(), 2);
        assert_eq!(overview.users[0].key, "donor");
        assert_eq!(overview.users[0].count, 12);
        assert!(overview.deliveries.is_empty());
    }

    #[test]
    fn test_delivery_metric_null_duration() {
        let json = r#"[{ "status": "cancelled", "count": 2, "avgDurationMinutes": null }]"#;
        let metrics: Vec<DeliveryMetric> = serde_json::from_str(json).unwrap();
        assert_eq!(metrics[0].count, 2);
        assert!(metrics[0].avg_duration_minutes.is_none());
    }
}
