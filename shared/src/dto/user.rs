//! User identity, roles and profile DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of an account in the coordination network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Donor,
    Recipient,
    Delivery,
    Admin,
}

impl UserRole {
    /// Display label for navigation and tables.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Donor => "Donor",
            UserRole::Recipient => "Recipient",
            UserRole::Delivery => "Courier",
            UserRole::Admin => "Administrator",
        }
    }
}

/// Postal address plus optional `[longitude, latitude]` point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
}

/// Donor availability window and preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default)]
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_available_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_donation_centers: Option<Vec<String>>,
}

/// Donor-specific profile fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_donation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_donations: Option<u32>,
}

/// Recipient-specific profile fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_notes: Option<String>,
}

/// Courier-specific profile fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_assignments: Option<u32>,
}

/// Per-channel notification opt-ins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub emergency_alerts: bool,
    pub email_updates: bool,
    pub sms_updates: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            emergency_alerts: true,
            email_updates: true,
            sms_updates: false,
        }
    }
}

/// A user account as returned by the backend.
///
/// The client holds a cached copy inside the session; profile updates
/// replace it wholesale with the server's returned representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_profile: Option<DonorProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_profile: Option<RecipientProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_profile: Option<DeliveryProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_preferences: Option<NotificationPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Partial profile update sent to `PUT /users/me`.
///
/// Only the populated fields are transmitted; the server returns the full
/// updated [`User`], which replaces the cached copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_preferences: Option<NotificationPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
}

/// A nearby-donor row from `GET /users/donors/nearby`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyDonor {
    #[serde(flatten)]
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_score: Option<f64>,
}

/// Query parameters for the nearby-donor geosearch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyDonorsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_blood_type: Option<String>,
}

/// Aggregate donor availability from `GET /users/donors/availability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorAvailabilitySummary {
    pub availability: AvailabilityCounts,
    #[serde(default)]
    pub top_donors: Vec<User>,
}

/// Available/unavailable donor headcounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityCounts {
    pub available: u64,
    pub unavailable: u64,
}

/// One self-reported health reading from `GET /users/me/health`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hemoglobin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure_systolic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure_diastolic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user_json() -> &'static str {
        r#"{
            "_id": "665f1c2ab8d4",
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@example.com",
            "phoneNumber": "+919876543210",
            "role": "donor",
            "bloodType": "O+",
            "isVerified": true,
            "availability": { "isAvailable": true },
            "donorProfile": { "totalDonations": 7 },
            "createdAt": "2024-05-01T10:00:00Z"
        }"#
    }

    #[test]
    fn test_user_deserializes_from_backend_shape() {
        let user: User = serde_json::from_str(sample_user_json()).expect("valid user JSON");

        assert_eq!(user.id, "665f1c2ab8d4");
        assert_eq!(user.role, UserRole::Donor);
        assert_eq!(user.blood_type.as_deref(), Some("O+"));
        assert_eq!(user.full_name(), "Asha Rao");
        assert_eq!(
            user.donor_profile.expect("donor profile").total_donations,
            Some(7)
        );
        // Fields absent from the payload come back as None
        assert!(user.location.is_none());
        assert!(user.recipient_profile.is_none());
    }

    #[test]
    fn test_role_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Delivery).unwrap(), "\"delivery\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_profile_patch_omits_empty_fields() {
        let patch = ProfilePatch {
            blood_type: Some("AB-".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"bloodType":"AB-"}"#);
    }
}
