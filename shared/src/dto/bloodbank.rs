//! Blood bank and inventory DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geo point as stored by the backend (`[longitude, latitude]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub coordinates: [f64; 2],
}

/// Stock of one blood type at a bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub blood_type: String,
    pub units_available: u32,
    pub last_updated: DateTime<Utc>,
}

/// A blood bank as returned by the backend. `distance_km` is present only
/// on geosearch results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodBank {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

/// Query parameters for `GET /bloodbanks` (geosearch plus text search).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodBankQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Create/update payload for blood banks (admin only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodBankPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Vec<InventoryItem>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_bank_geosearch_row() {
        let json = r#"{
            "_id": "bb1",
            "name": "Central Blood Bank",
            "address": "12 MG Road",
            "location": { "coordinates": [77.59, 12.97] },
            "distanceKm": 1.8,
            "inventory": [
                { "bloodType": "O+", "unitsAvailable": 14, "lastUpdated": "2024-06-01T00:00:00Z" }
            ]
        }"#;
        let bank: BloodBank = serde_json::from_str(json).unwrap();
        assert_eq!(bank.name, "Central Blood Bank");
        assert_eq!(bank.location.unwrap().coordinates, [77.59, 12.97]);
        assert_eq!(bank.distance_km, Some(1.8));
        assert_eq!(bank.inventory[0].units_available, 14);
    }

    #[test]
    fn test_query_serializes_only_set_params() {
        let query = BloodBankQuery {
            search: Some("central".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"search":"central"}"#
        );
    }
}
