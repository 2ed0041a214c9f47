//! # UI Event Handlers
//!
//! Validate form state, flip the relevant busy flag, and hand off to a
//! background task. Handlers never block the UI thread.

pub(crate) mod appointments;
pub(crate) mod auth;
pub(crate) mod bloodbanks;
pub(crate) mod deliveries;
pub(crate) mod navigation;
pub(crate) mod notifications;
pub(crate) mod profile;
pub(crate) mod requests;
