//! # Services Module
//!
//! External service integrations for the dashboard.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/         - Backend HTTP API client
//! │                  (auth, requests, deliveries, appointments, ...)
//! └── realtime.rs  - WebSocket notification invalidation stream
//! ```

pub mod api;
pub mod realtime;

pub use api::ApiClient;
pub use realtime::{RealtimeClient, RealtimeEvent, RealtimeHandle};
