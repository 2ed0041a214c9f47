//! # Async Background Tasks
//!
//! Every task spawns onto the Tokio runtime, performs one API call, and
//! reports back through the event channel. Tasks never block the UI thread
//! and never touch state directly.

pub(crate) mod analytics;
pub(crate) mod appointments;
pub(crate) mod auth;
pub(crate) mod bloodbanks;
pub(crate) mod deliveries;
pub(crate) mod notifications;
pub mod requests;
pub(crate) mod users;
