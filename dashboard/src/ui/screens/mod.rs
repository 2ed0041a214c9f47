//! # Screens
//!
//! One module per screen, each a `render(ui, state, actions)` function.

pub mod analytics;
pub mod appointments;
pub mod bloodbanks;
pub mod deliveries;
pub mod login;
pub mod notifications;
pub mod overview;
pub mod profile;
pub mod register;
pub mod requests;
pub mod verify_otp;
