//! Command types for the Elm-style architecture
//!
//! Commands represent deferred side effects requested by an update. The
//! runtime turns each one into a one-shot timer; none can be cancelled once
//! issued.

use serde::Serialize;

use crate::panel::PanelId;

/// Extra time between a link-triggered hide and the navigation
pub const NAVIGATION_GRACE_MS: u64 = 10;

/// Where a navigation opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// A new browsing context (`target="_blank"`)
    NewContext,
    /// Replace the current page
    CurrentContext,
}

impl Disposition {
    /// Disposition for a link's `target` attribute
    pub fn for_link_target(target: Option<&str>) -> Self {
        if target == Some("_blank") {
            Disposition::NewContext
        } else {
            Disposition::CurrentContext
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// After `delay_ms`, reset the panel's scroll offset and forms as configured
    ScheduleCleanup { panel: PanelId, delay_ms: u64 },
    /// After `delay_ms`, navigate to `href`
    Navigate {
        href: String,
        disposition: Disposition,
        delay_ms: u64,
    },
}

impl Cmd {
    /// Collapse optional commands: nothing, a single command, or a batch
    pub fn batch(cmds: impl IntoIterator<Item = Option<Cmd>>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .flatten()
            .filter(|c| *c != Cmd::None)
            .collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }
}
