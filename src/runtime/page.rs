//! The host page: element tree, bound panels, timers and navigations

use serde::Serialize;

use crate::commands::{Cmd, Disposition};
use crate::dom::{Document, ElementId};
use crate::event::{DomEvent, KEY_ESCAPE};
use crate::messages::{Msg, PanelMsg};
use crate::panel::{PanelController, PanelId, PanelOptions};
use crate::update::update;

use super::dispatch::dispatch_event;
use super::timer::TimerQueue;

/// A navigation performed after a deferred link activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub href: String,
    pub disposition: Disposition,
    pub at_ms: u64,
}

/// A timer that fired, for inspection and reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub at_ms: u64,
    pub label: String,
}

/// Single-threaded host runtime
///
/// Each event runs to completion before the next; deferred work only runs
/// when the clock is advanced.
#[derive(Debug, Default)]
pub struct Page {
    pub(crate) document: Document,
    pub(crate) controllers: Vec<PanelController>,
    timers: TimerQueue,
    navigations: Vec<Navigation>,
    timeline: Vec<TimelineEntry>,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            ..Default::default()
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn controller(&self, id: PanelId) -> Option<&PanelController> {
        self.controllers.get(id.0)
    }

    pub fn controllers(&self) -> &[PanelController] {
        &self.controllers
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn navigations(&self) -> &[Navigation] {
        &self.navigations
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    // === Binding ===

    /// Bind every element matching `selector`
    pub fn bind(&mut self, selector: &str, options: &PanelOptions) -> Vec<PanelId> {
        let elements = self.document.query_all(selector);
        self.bind_elements(&elements, options)
    }

    /// Bind each element independently with the same options
    ///
    /// Zero elements is a no-op returning no handles.
    pub fn bind_elements(&mut self, elements: &[ElementId], options: &PanelOptions) -> Vec<PanelId> {
        match elements {
            [] => Vec::new(),
            [element] => {
                let id = PanelId(self.controllers.len());
                let controller = PanelController::bind(id, &self.document, *element, options);
                self.controllers.push(controller);
                vec![id]
            }
            many => many
                .iter()
                .flat_map(|element| self.bind_elements(std::slice::from_ref(element), options))
                .collect(),
        }
    }

    // === Panel operations ===

    pub fn is_visible(&self, id: PanelId) -> bool {
        self.controller(id)
            .is_some_and(|c| c.is_visible(&self.document))
    }

    /// Programmatic hide without an originating event
    pub fn hide(&mut self, id: PanelId) {
        let Some(controller) = self.controllers.get(id.0) else {
            return;
        };
        if let Some(cmd) = controller.hide(&mut self.document, None) {
            self.process_cmd(cmd);
        }
    }

    /// Programmatic toggle; returns the new visibility
    pub fn toggle(&mut self, id: PanelId) -> bool {
        self.controllers
            .get(id.0)
            .is_some_and(|c| c.toggle(&mut self.document))
    }

    pub(crate) fn run_cleanup(&mut self, id: PanelId) {
        if let Some(controller) = self.controllers.get(id.0) {
            controller.run_cleanup(&mut self.document);
        }
    }

    pub(crate) fn record_navigation(&mut self, href: String, disposition: Disposition) {
        tracing::info!(%href, ?disposition, at_ms = self.now_ms(), "navigating");
        self.navigations.push(Navigation {
            href,
            disposition,
            at_ms: self.now_ms(),
        });
    }

    // === Elm loop ===

    /// Run `msg` through [`update`] and execute the resulting command
    pub fn send(&mut self, msg: Msg) {
        if let Some(cmd) = update(self, msg) {
            self.process_cmd(cmd);
        }
    }

    /// Deliver an event and return it with its final control flags
    pub fn dispatch(&mut self, mut event: DomEvent) -> DomEvent {
        tracing::trace!(event = event.kind.name(), target = ?event.target, "dispatch");
        if let Some(cmd) = dispatch_event(&mut self.document, &mut self.controllers, &mut event) {
            self.process_cmd(cmd);
        }
        event
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::ScheduleCleanup { panel, delay_ms } => {
                self.timers
                    .schedule(delay_ms, Msg::Panel(PanelMsg::CleanupDue(panel)));
            }
            Cmd::Navigate {
                href,
                disposition,
                delay_ms,
            } => {
                self.timers
                    .schedule(delay_ms, Msg::NavigateDue { href, disposition });
            }
        }
    }

    /// Advance the clock by `ms`, firing every timer that comes due
    ///
    /// Timers armed while firing run too if they fall inside the window.
    pub fn advance(&mut self, ms: u64) {
        let until = self.timers.now_ms().saturating_add(ms);
        while let Some((at_ms, msg)) = self.timers.pop_due(until) {
            self.timeline.push(TimelineEntry {
                at_ms,
                label: msg.label(),
            });
            self.send(msg);
        }
        self.timers.set_now(until);
    }

    // === Event shortcuts ===

    pub fn click(&mut self, target: ElementId) -> DomEvent {
        self.dispatch(DomEvent::click(target))
    }

    /// Click the first element matching `selector`, if any
    pub fn click_selector(&mut self, selector: &str) -> Option<DomEvent> {
        let target = self.document.query_all(selector).first().copied()?;
        Some(self.click(target))
    }

    pub fn touch_start(&mut self, target: ElementId, x: f64, y: f64) -> DomEvent {
        self.dispatch(DomEvent::touch_start(target, x, y))
    }

    pub fn touch_move(&mut self, target: ElementId, x: f64, y: f64) -> DomEvent {
        self.dispatch(DomEvent::touch_move(target, x, y))
    }

    pub fn touch_end(&mut self, target: ElementId) -> DomEvent {
        self.dispatch(DomEvent::touch_end(target))
    }

    pub fn key_down(&mut self, key_code: u32) -> DomEvent {
        self.dispatch(DomEvent::key_down(key_code))
    }

    pub fn press_escape(&mut self) -> DomEvent {
        self.key_down(KEY_ESCAPE)
    }
}
