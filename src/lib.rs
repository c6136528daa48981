//! slidepanel - Elm-style side panel controller
//!
//! This crate provides a headless panel that can be shown, hidden, and
//! dismissed by clicking outside, pressing escape, activating a link inside
//! it, or swiping it away, plus the small page runtime that drives it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dom;
pub mod event;
pub mod messages;
pub mod nav_list;
pub mod panel;
pub mod prioritize;
pub mod runtime;
pub mod scenario;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SlidepanelConfig;
pub use dom::{Document, ElementId, ElementSpec};
pub use event::{DomEvent, EventControl};
pub use messages::Msg;
pub use panel::{PanelController, PanelId, PanelOptions, Side};
pub use runtime::Page;
