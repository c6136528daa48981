//! Panel controller
//!
//! One controller per bound element. The controller stores only its
//! resolved configuration and the in-progress touch origin; visibility is
//! read from and written to the target's class list in the [`Document`].
//!
//! Listener layout per controller, in the order the runtime invokes them:
//!
//! | Where  | Kind      | Events                      | Effect                               |
//! |--------|-----------|-----------------------------|--------------------------------------|
//! | panel  | delegated | click on `a`                | hide-on-click, self-link close       |
//! | panel  | direct    | touchstart/move/end, click  | gesture tracking, stop propagation   |
//! | body   | delegated | click on `a[href="#id"]`    | toggle                               |
//! | body   | direct    | click, touchend             | hide (click outside)                 |
//! | window | direct    | keydown                     | hide on escape                       |

use crate::commands::{Cmd, Disposition, NAVIGATION_GRACE_MS};
use crate::dom::{Document, ElementId, Selector};
use crate::event::{DomEvent, EventControl, EventKind, KEY_ESCAPE};

use super::config::{PanelConfig, PanelOptions, TargetRef};
use super::gesture::{GestureTracker, MoveOutcome};
use super::PanelId;

#[derive(Debug, Clone)]
pub struct PanelController {
    id: PanelId,
    element: ElementId,
    /// `#<id>` of the panel element, when it has one
    fragment: Option<String>,
    config: PanelConfig,
    /// `None` when the configured target could not be resolved
    target: Option<ElementId>,
    gesture: GestureTracker,
}

impl PanelController {
    /// Bind a single element: merge options over defaults and resolve the target
    pub fn bind(id: PanelId, doc: &Document, element: ElementId, options: &PanelOptions) -> Self {
        let config = options.merge_over_defaults();
        let target = resolve_target(doc, element, &config.target);
        let fragment = doc.html_id(element).map(|html_id| format!("#{}", html_id));

        if target.is_none() {
            tracing::debug!(panel = id.0, target = ?config.target, "panel target unresolved");
        }
        tracing::debug!(
            panel = id.0,
            element = element.0,
            fragment = fragment.as_deref().unwrap_or(""),
            side = ?config.side,
            "panel bound"
        );

        Self {
            id,
            element,
            fragment,
            config,
            target,
            gesture: GestureTracker::default(),
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn target(&self) -> Option<ElementId> {
        self.target
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Whether the target currently carries the visible class
    pub fn is_visible(&self, doc: &Document) -> bool {
        self.target
            .is_some_and(|t| doc.has_class(t, &self.config.visible_class))
    }

    // === Operations ===

    /// Hide the panel, scheduling the post-hide cleanup
    ///
    /// No-op when already hidden. With an event, its default action and
    /// propagation are suppressed.
    pub fn hide(&self, doc: &mut Document, event: Option<&mut dyn EventControl>) -> Option<Cmd> {
        if !self.is_visible(doc) {
            return None;
        }
        let target = self.target?;

        if let Some(event) = event {
            event.cancel();
        }

        doc.remove_class(target, &self.config.visible_class);
        tracing::debug!(panel = self.id.0, delay_ms = self.config.delay, "panel hidden");

        Some(Cmd::ScheduleCleanup {
            panel: self.id,
            delay_ms: self.config.delay,
        })
    }

    /// Flip visibility, returning the new state
    pub fn toggle(&self, doc: &mut Document) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let visible = doc.toggle_class(target, &self.config.visible_class);
        tracing::debug!(panel = self.id.0, visible, "panel toggled");
        visible
    }

    /// Deferred part of [`hide`](Self::hide); runs whether or not the panel
    /// was shown again in the meantime
    pub fn run_cleanup(&self, doc: &mut Document) {
        if self.config.reset_scroll {
            doc.set_scroll_top(self.element, 0.0);
        }
        if self.config.reset_forms {
            for form in doc.query_within(self.element, &Selector::Tag("form".to_string())) {
                doc.reset_form(form);
            }
        }
        tracing::trace!(
            panel = self.id.0,
            reset_scroll = self.config.reset_scroll,
            reset_forms = self.config.reset_forms,
            "panel cleanup ran"
        );
    }

    // === Listeners ===

    /// Delegated click handlers for links inside the panel
    pub fn on_panel_delegated(&self, doc: &mut Document, event: &mut DomEvent) -> Option<Cmd> {
        if event.kind != EventKind::Click {
            return None;
        }
        let links = links_on_path(doc, event.target?, self.element);

        let mut cmds = Vec::new();
        for link in links {
            let href = doc.attr(link, "href").map(str::to_string);

            if self.config.hide_on_click && self.is_navigable(href.as_deref()) {
                if let Some(href) = href.clone() {
                    event.cancel();
                    cmds.push(self.hide(doc, None));
                    let disposition = Disposition::for_link_target(doc.attr(link, "target"));
                    tracing::debug!(panel = self.id.0, %href, ?disposition, "link activated in panel");
                    cmds.push(Some(Cmd::Navigate {
                        href,
                        disposition,
                        delay_ms: self.config.delay.saturating_add(NAVIGATION_GRACE_MS),
                    }));
                }
            }

            if self.is_self_link(href.as_deref()) {
                event.cancel();
                if let Some(target) = self.target {
                    doc.remove_class(target, &self.config.visible_class);
                }
            }

            // Outer links are not visited once an inner one stopped the event
            if event.is_propagation_stopped() {
                break;
            }
        }
        Cmd::batch(cmds)
    }

    /// Direct panel handlers: gesture tracking and propagation containment
    pub fn on_panel_direct(&mut self, doc: &mut Document, event: &mut DomEvent) -> Option<Cmd> {
        let cmd = match event.kind {
            EventKind::TouchStart { .. } => {
                if let Some(point) = event.first_touch() {
                    self.gesture.begin(point);
                }
                None
            }
            EventKind::TouchMove { .. } => self.on_touch_move(doc, event),
            EventKind::TouchEnd => {
                self.gesture.clear();
                None
            }
            _ => None,
        };

        if matches!(
            event.kind,
            EventKind::Click
                | EventKind::TouchStart { .. }
                | EventKind::TouchMove { .. }
                | EventKind::TouchEnd
        ) {
            event.stop_propagation();
        }
        cmd
    }

    fn on_touch_move(&mut self, doc: &mut Document, event: &mut DomEvent) -> Option<Cmd> {
        let current = event.first_touch()?;
        let side = self.config.hide_on_swipe.then_some(self.config.side);

        match self.gesture.track_move(current, side, doc.scroll(self.element)) {
            MoveOutcome::Ignored | MoveOutcome::Scroll => None,
            MoveOutcome::Dismiss => {
                tracing::debug!(panel = self.id.0, side = ?self.config.side, "swipe dismissed panel");
                let cmd = self.hide(doc, None);
                event.cancel();
                cmd
            }
            MoveOutcome::Contain => {
                event.cancel();
                None
            }
        }
    }

    /// Delegated body handler: toggle links anywhere outside the panel
    pub fn on_body_delegated(&self, doc: &mut Document, event: &mut DomEvent) -> Option<Cmd> {
        if event.kind != EventKind::Click {
            return None;
        }
        let links = links_on_path(doc, event.target?, doc.body());
        for link in links {
            if self.is_self_link(doc.attr(link, "href")) {
                event.cancel();
                self.toggle(doc);
            }
        }
        None
    }

    /// Direct body handler: click or touch end outside the panel hides it
    pub fn on_body_direct(&self, doc: &mut Document, event: &mut DomEvent) -> Option<Cmd> {
        match event.kind {
            EventKind::Click | EventKind::TouchEnd => self.hide(doc, Some(event)),
            _ => None,
        }
    }

    /// Window keydown handler
    pub fn on_window(&self, doc: &mut Document, event: &mut DomEvent) -> Option<Cmd> {
        match event.kind {
            EventKind::KeyDown { key_code } if self.config.hide_on_escape && key_code == KEY_ESCAPE => {
                self.hide(doc, Some(event))
            }
            _ => None,
        }
    }

    // === Link classification ===

    /// Link addressing this panel by its fragment identifier
    fn is_self_link(&self, href: Option<&str>) -> bool {
        matches!((href, self.fragment.as_deref()), (Some(h), Some(f)) if h == f)
    }

    /// Link worth navigating to after hiding
    fn is_navigable(&self, href: Option<&str>) -> bool {
        match href {
            None | Some("") | Some("#") => false,
            Some(h) => !self.is_self_link(Some(h)),
        }
    }
}

/// Anchors between `from` (inclusive) and `until` (exclusive), nearest first
fn links_on_path(doc: &Document, from: ElementId, until: ElementId) -> Vec<ElementId> {
    let path = doc.path_to_root(from);
    let Some(end) = path.iter().position(|id| *id == until) else {
        return Vec::new();
    };
    path[..end]
        .iter()
        .copied()
        .filter(|id| doc.tag(*id) == Some("a"))
        .collect()
}

/// Resolve the configured target to exactly one element
fn resolve_target(doc: &Document, panel: ElementId, target: &TargetRef) -> Option<ElementId> {
    match target {
        TargetRef::Panel => Some(panel),
        TargetRef::Element(id) => doc.get(*id).map(|_| *id),
        TargetRef::Selector(selector) => match doc.query_all(selector).as_slice() {
            [only] => Some(*only),
            _ => None,
        },
    }
}
