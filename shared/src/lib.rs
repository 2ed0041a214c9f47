//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard client and the
//! coordination backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, login, OTP and session DTOs
//!   - **[`dto::user`]**: User identity, roles, profiles, health metrics
//!   - **[`dto::request`]**: Blood requests and donor matches
//!   - **[`dto::delivery`]**: Deliveries and tracking events
//!   - **[`dto::appointment`]**: Donation appointments
//!   - **[`dto::bloodbank`]**: Blood banks and inventory
//!   - **[`dto::notification`]**: Notifications
//!   - **[`dto::analytics`]**: Aggregate analytics payloads
//!   - **[`dto::pagination`]**: Paginated list envelope
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::normalize_phone`]**: Canonicalize phone numbers before submission
//!
//! ## Wire Format
//!
//! The backend speaks **camelCase** JSON with MongoDB-style `_id` keys, so
//! every struct carries `#[serde(rename_all = "camelCase")]` and id fields
//! are renamed explicitly. Optional fields are omitted from JSON when `None`
//! and tolerated when absent (`#[serde(default)]`).
//!
//! ## Usage in the client
//!
//! ```rust
//! use shared::LoginPayload;
//!
//! let payload = LoginPayload {
//!     email: "donor@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let body = serde_json::to_string(&payload).unwrap();
//! assert!(body.contains("donor@example.com"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
