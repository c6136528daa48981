//! Message types for the Elm-style architecture
//!
//! Deferred work comes back to a [`crate::runtime::Page`] as these messages
//! when its timers fire. Input events are dispatched directly, since the
//! caller needs the event back with its final control flags.

use crate::commands::Disposition;
use crate::panel::PanelId;

/// Panel-specific messages
#[derive(Debug, Clone)]
pub enum PanelMsg {
    /// The post-hide cleanup timer fired
    CleanupDue(PanelId),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Panel(PanelMsg),
    /// A deferred navigation came due
    NavigateDue {
        href: String,
        disposition: Disposition,
    },
}

impl Msg {
    /// Short name used in logs and timelines
    pub fn label(&self) -> String {
        match self {
            Msg::Panel(PanelMsg::CleanupDue(id)) => format!("cleanup:{}", id.0),
            Msg::NavigateDue { href, .. } => format!("navigate:{}", href),
        }
    }
}
