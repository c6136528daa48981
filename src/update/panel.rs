//! Panel update handlers

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::runtime::Page;

/// Update function for panel messages
pub fn update_panel(page: &mut Page, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::CleanupDue(id) => {
            // Runs even if the panel was shown again after the hide
            page.run_cleanup(id);
            None
        }
    }
}
