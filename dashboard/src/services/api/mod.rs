//! # Backend API Client Module
//!
//! HTTP client for communicating with the backend REST API.
//! One submodule per backend resource, mirroring the route tree.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient struct and response decoding
//! ├── auth.rs          - Session, login, registration, OTP
//! ├── users.rs         - Profile, directory, donor discovery, health journal
//! ├── requests.rs      - Blood requests and the matching lifecycle
//! ├── deliveries.rs    - Courier assignment and tracking
//! ├── appointments.rs  - Donation scheduling
//! ├── bloodbanks.rs    - Blood bank directory and inventory
//! ├── notifications.rs - Notification feed
//! └── analytics.rs     - Aggregated metrics
//! ```

pub mod analytics;
pub mod appointments;
pub mod auth;
pub mod bloodbanks;
pub mod client;
pub mod deliveries;
pub mod notifications;
pub mod requests;
pub mod users;

pub use client::ApiClient;
