//! # LifeLink Dashboard - Library Root
//!
//! A native desktop client for the LifeLink blood donation coordination
//! service. This library crate contains all modules used by the binary
//! crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI framework          │
//! │  egui_plot     - Analytics charts                      │
//! │  tokio         - Async runtime for background tasks    │
//! │  reqwest       - REST client (cookie-based session)    │
//! │  tungstenite   - Notification invalidation stream      │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (REST)                  │ WebSocket
//!          ▼                              ▼
//! ┌──────────────────────────────────────────────────────┐
//! │                  LifeLink backend                    │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application core
//!   - Event-driven architecture with async tasks
//!   - Screen navigation, route guard, and session machinery
//!
//! - **core**: Error types and the auth service trait
//!
//! - **services**: External integrations
//!   - `api`: Backend REST client, one module per resource
//!   - `realtime`: WebSocket notification invalidation stream
//!
//! - **session**: Session store and route-guard projection
//!
//! - **ui**: Rendering framework
//!   - `screens`: Screen-specific rendering
//!   - `widgets`: Reusable UI components
//!   - `theme`: Color palette and styling
//!
//! - **utils**: Form validation helpers

pub mod app;
pub mod core;
pub mod services;
pub mod session;
pub mod ui;
pub mod utils;
