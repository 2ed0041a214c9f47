//! # Session Module
//!
//! Authentication state machine and the route guard that projects it onto
//! screen routing.

pub mod guard;
pub mod store;

pub use guard::{decide, RouteDecision};
pub use store::{SessionSnapshot, SessionStatus, SessionStore};
