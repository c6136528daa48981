//! Input events delivered by the host runtime
//!
//! Handlers only ever see events through [`EventControl`], which is the
//! capability to suppress the default action and stop propagation.

use serde::{Deserialize, Serialize};

use crate::dom::ElementId;

/// Key code of the Escape key
pub const KEY_ESCAPE: u32 = 27;

/// Capability interface of an event object
pub trait EventControl {
    /// Suppress the host's default action (navigation, scrolling, ...)
    fn suppress_default(&mut self);
    /// Stop the event from bubbling to ancestors of the current element
    fn stop_propagation(&mut self);
    fn is_default_suppressed(&self) -> bool;
    fn is_propagation_stopped(&self) -> bool;

    /// Both of the above; what a handler returning `false` does
    fn cancel(&mut self) {
        self.suppress_default();
        self.stop_propagation();
    }
}

/// A touch point in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kind of event and its payload
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Click,
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd,
    KeyDown { key_code: u32 },
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::TouchStart { .. } => "touchstart",
            EventKind::TouchMove { .. } => "touchmove",
            EventKind::TouchEnd => "touchend",
            EventKind::KeyDown { .. } => "keydown",
        }
    }
}

/// Concrete event dispatched through a [`crate::runtime::Page`]
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub kind: EventKind,
    /// Element the event originated on; `None` for window-level events
    pub target: Option<ElementId>,
    default_suppressed: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    pub fn new(kind: EventKind, target: Option<ElementId>) -> Self {
        Self {
            kind,
            target,
            default_suppressed: false,
            propagation_stopped: false,
        }
    }

    pub fn click(target: ElementId) -> Self {
        Self::new(EventKind::Click, Some(target))
    }

    pub fn touch_start(target: ElementId, x: f64, y: f64) -> Self {
        Self::new(
            EventKind::TouchStart {
                touches: vec![TouchPoint::new(x, y)],
            },
            Some(target),
        )
    }

    pub fn touch_move(target: ElementId, x: f64, y: f64) -> Self {
        Self::new(
            EventKind::TouchMove {
                touches: vec![TouchPoint::new(x, y)],
            },
            Some(target),
        )
    }

    pub fn touch_end(target: ElementId) -> Self {
        Self::new(EventKind::TouchEnd, Some(target))
    }

    pub fn key_down(key_code: u32) -> Self {
        Self::new(EventKind::KeyDown { key_code }, None)
    }

    /// First touch point of a touch start/move event
    pub fn first_touch(&self) -> Option<TouchPoint> {
        match &self.kind {
            EventKind::TouchStart { touches } | EventKind::TouchMove { touches } => {
                touches.first().copied()
            }
            _ => None,
        }
    }
}

impl EventControl for DomEvent {
    fn suppress_default(&mut self) {
        self.default_suppressed = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    fn is_default_suppressed(&self) -> bool {
        self.default_suppressed
    }

    fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
