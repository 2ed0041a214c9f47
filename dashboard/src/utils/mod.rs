//! # Utilities
//!
//! Input validation helpers shared by the form handlers.

pub mod validation;
