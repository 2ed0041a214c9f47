//! # Blood Bank Endpoints
//!
//! Blood bank directory with geo search and admin CRUD.

use super::client::{self, ApiClient};
use crate::core::error::Result;
use shared::{BloodBank, BloodBankPayload, BloodBankQuery};

/// List blood banks, optionally filtered by proximity or name search.
pub async fn list_blood_banks(api: &ApiClient, query: &BloodBankQuery) -> Result<Vec<BloodBank>> {
    let response = api
        .client
        .get(api.url("/bloodbanks"))
        .query(query)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Fetch a single blood bank with its inventory.
pub async fn get_blood_bank(api: &ApiClient, blood_bank_id: &str) -> Result<BloodBank> {
    let response = api
        .client
        .get(api.url(&format!("/bloodbanks/{blood_bank_id}")))
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Register a new blood bank. Admin only.
#[tracing::instrument(skip(api, payload), fields(name = ?payload.name))]
pub async fn create_blood_bank(api: &ApiClient, payload: BloodBankPayload) -> Result<BloodBank> {
    let response = api
        .client
        .post(api.url("/bloodbanks"))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}

/// Update a blood bank's details or inventory. Admin only.
pub async fn update_blood_bank(
    api: &ApiClient,
    blood_bank_id: &str,
    payload: BloodBankPayload,
) -> Result<BloodBank> {
    let response = api
        .client
        .put(api.url(&format!("/bloodbanks/{blood_bank_id}")))
        .json(&payload)
        .send()
        .await
        .map_err(client::transport)?;
    client::decode(response).await
}
