//! # Panelform - Admin Panel Form Workflows
//!
//! Headless create-form and detail-view workflows for a REST-backed admin
//! panel, with a small CLI that drives them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  set_field   ┌──────────────┐  build_payload  ┌──────────────┐
//! │   Inputs    │─────────────▶│  FieldStore  │────────────────▶│   Payload    │
//! │ - keystroke │              │ - values     │                 │ - API names  │
//! │ - selection │              │ - errors     │                 │ - joined     │
//! └─────────────┘              └──────────────┘                 └──────────────┘
//!                                      ▲                               │
//!                                      │ reset                         ▼
//!                              ┌──────────────────┐   post_json  ┌──────────────┐
//!                              │   Submission     │─────────────▶│ RemoteClient │
//!                              │   Controller     │              └──────────────┘
//!                              │ - guard, state   │──▶ Notifier, Router, EventBus
//!                              └──────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod logging;
pub mod panel;

// Re-export main types for easy access
pub use panel::*;
