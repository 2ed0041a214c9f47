//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the dashboard and the coordination backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, OTP, login, session DTOs
//! - [`user`] - Users, roles, profiles, health metrics
//! - [`request`] - Blood requests and donor matches
//! - [`delivery`] - Deliveries and tracking events
//! - [`appointment`] - Donation appointments
//! - [`bloodbank`] - Blood banks and inventory
//! - [`notification`] - Notifications
//! - [`analytics`] - Aggregate analytics payloads
//! - [`pagination`] - Paginated list envelope
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (`#[serde(rename_all = "camelCase")]`)
//! - **Ids**: the backend emits MongoDB-style `_id` keys, renamed explicitly
//! - **Optional fields**: omitted when `None`, tolerated when absent
//! - **Enums**: lowercase / snake_case strings matching the backend
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! { "email": "donor@example.com", "password": "secret" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": {
//!     "_id": "665f1c2ab8d4",
//!     "firstName": "Asha",
//!     "lastName": "Rao",
//!     "email": "donor@example.com",
//!     "phoneNumber": "+919876543210",
//!     "role": "donor",
//!     "bloodType": "O+"
//!   }
//! }
//! ```

pub mod analytics;
pub mod appointment;
pub mod auth;
pub mod bloodbank;
pub mod delivery;
pub mod notification;
pub mod pagination;
pub mod request;
pub mod user;

pub use analytics::*;
pub use appointment::*;
pub use auth::*;
pub use bloodbank::*;
pub use delivery::*;
pub use notification::*;
pub use pagination::*;
pub use request::*;
pub use user::*;
