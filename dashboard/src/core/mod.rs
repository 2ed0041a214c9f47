//! # Core Module
//!
//! Shared error types and service traits used across the application.

pub mod error;
pub mod service;
