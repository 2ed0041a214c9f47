//! Paginated list envelope shared by every list endpoint.

use serde::{Deserialize, Serialize};

/// Page bookkeeping attached to list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

/// `{ items, pagination }` envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: PageInfo::default(),
        }
    }
}

/// Common page/limit query parameters, plus optional status filters used by
/// the requests, deliveries and appointments lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_round_trip() {
        let json = r#"{
            "items": ["a", "b"],
            "pagination": { "page": 2, "limit": 10, "total": 42, "pages": 5 }
        }"#;
        let page: Paginated<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items, vec!["a", "b"]);
        assert_eq!(page.pagination.total, 42);
        assert_eq!(page.pagination.pages, 5);
    }

    #[test]
    fn test_list_query_skips_unset_params() {
        let query = ListQuery {
            page: Some(1),
            status: Some("pending".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"page":1,"status":"pending"}"#);
    }
}
