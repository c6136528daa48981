//! Update functions for the Elm-style architecture
//!
//! Timer messages of a page are applied through these functions.

mod panel;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::runtime::Page;

pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
pub fn update(page: &mut Page, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => update_panel(page, m),
        Msg::NavigateDue { href, disposition } => {
            page.record_navigation(href, disposition);
            None
        }
    }
}
