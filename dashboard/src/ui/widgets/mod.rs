//! # UI Widgets
//!
//! Reusable components shared across screens.

pub mod forms;
pub mod nav_bar;
pub mod status_bar;
pub mod tables;
