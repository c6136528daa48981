//! Panel system - show/hide/dismiss behavior for overlay and side panels
//!
//! ## Architecture
//!
//! - `PanelId`: Handle of a bound controller inside a `Page`
//! - `PanelConfig` / `PanelOptions`: Resolved configuration and caller overrides
//! - `Side`: Viewport edge the panel is anchored to (decides the dismiss swipe)
//! - `GestureTracker`: Touch origin and swipe classification
//! - `PanelController`: The listeners and the hide/toggle/cleanup operations
//!
//! ## Integration
//!
//! Controllers are owned by `runtime::Page`, which routes events to them in
//! bubbling order and executes the `Cmd`s they return.

mod config;
mod controller;
pub mod gesture;

use serde::Serialize;

pub use config::{PanelConfig, PanelOptions, Side, TargetRef};
pub use controller::PanelController;
pub use gesture::{classify_swipe, GestureTracker, MoveOutcome, SWIPE_BOUNDARY, SWIPE_DELTA};

/// Handle of a bound panel controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PanelId(pub usize);
