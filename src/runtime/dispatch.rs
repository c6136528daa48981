//! Bubbling event dispatch
//!
//! An event travels from its target up to the body. At each element the
//! delegated listeners run first (all of them, even after one stops
//! propagation), then the direct listeners, but only while propagation has
//! not been stopped. Stopping propagation never cancels listeners already
//! running on the current element; it only keeps the event from reaching
//! ancestors.

use crate::commands::Cmd;
use crate::dom::Document;
use crate::event::{DomEvent, EventControl, EventKind};
use crate::panel::PanelController;

pub fn dispatch_event(
    document: &mut Document,
    controllers: &mut [PanelController],
    event: &mut DomEvent,
) -> Option<Cmd> {
    let mut cmds = Vec::new();

    if let Some(target) = event.target {
        let body = document.body();

        for current in document.path_to_root(target) {
            for controller in controllers.iter().filter(|c| c.element() == current) {
                cmds.push(controller.on_panel_delegated(document, event));
            }
            if current == body {
                for controller in controllers.iter() {
                    cmds.push(controller.on_body_delegated(document, event));
                }
            }

            if !event.is_propagation_stopped() {
                for controller in controllers.iter_mut().filter(|c| c.element() == current) {
                    cmds.push(controller.on_panel_direct(document, event));
                }
                if current == body {
                    for controller in controllers.iter() {
                        cmds.push(controller.on_body_direct(document, event));
                    }
                }
            }

            if event.is_propagation_stopped() {
                tracing::trace!(
                    event = event.kind.name(),
                    at = current.0,
                    "propagation stopped"
                );
                break;
            }
        }
    }

    let reaches_window = event.target.is_none() || !event.is_propagation_stopped();
    if reaches_window && matches!(event.kind, EventKind::KeyDown { .. }) {
        for controller in controllers.iter() {
            cmds.push(controller.on_window(document, event));
        }
    }

    Cmd::batch(cmds)
}
