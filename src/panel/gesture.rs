//! Swipe gesture classification
//!
//! Displacements are `origin - current`, so a positive `diff_x` means the
//! finger travelled toward the left edge.

use crate::dom::ScrollMetrics;
use crate::event::TouchPoint;

use super::config::Side;

/// Maximum perpendicular drift for a swipe to count as straight
pub const SWIPE_BOUNDARY: f64 = 20.0;

/// Minimum travel along the dismissing axis
pub const SWIPE_DELTA: f64 = 50.0;

/// Tolerance when deciding the panel is scrolled to its bottom
const BOTTOM_TOLERANCE: f64 = 2.0;

/// Whether a displacement dismisses a panel anchored at `side`
pub fn classify_swipe(side: Side, diff_x: f64, diff_y: f64) -> bool {
    let straight_x = diff_y.abs() < SWIPE_BOUNDARY;
    let straight_y = diff_x.abs() < SWIPE_BOUNDARY;
    match side {
        Side::Left => straight_x && diff_x > SWIPE_DELTA,
        Side::Right => straight_x && diff_x < -SWIPE_DELTA,
        Side::Top => straight_y && diff_y > SWIPE_DELTA,
        Side::Bottom => straight_y && diff_y < -SWIPE_DELTA,
        Side::None => false,
    }
}

/// Whether a non-dismissing move would overscroll the panel
///
/// True when pulling down at the top, or pushing up at the bottom.
pub fn at_elastic_boundary(scroll: ScrollMetrics, diff_y: f64) -> bool {
    let at_top = scroll.scroll_top <= 0.0 && diff_y < 0.0;
    let at_bottom = (scroll.remaining() - scroll.outer_height).abs() < BOTTOM_TOLERANCE && diff_y > 0.0;
    at_top || at_bottom
}

/// Outcome of a touch move inside the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No gesture in progress
    Ignored,
    /// Swipe qualified; the panel should hide
    Dismiss,
    /// Overscroll at a boundary; suppress the default scroll
    Contain,
    /// Normal scrolling inside the panel
    Scroll,
}

/// Per-controller touch tracking
///
/// The origin is either fully recorded or absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureTracker {
    origin: Option<TouchPoint>,
}

impl GestureTracker {
    pub fn origin(&self) -> Option<TouchPoint> {
        self.origin
    }

    pub fn begin(&mut self, point: TouchPoint) {
        self.origin = Some(point);
    }

    pub fn clear(&mut self) {
        self.origin = None;
    }

    /// Displacement of `current` from the recorded origin
    pub fn displacement(&self, current: TouchPoint) -> Option<(f64, f64)> {
        self.origin
            .map(|origin| (origin.x - current.x, origin.y - current.y))
    }

    /// Classify a move; consumes the origin on a qualifying swipe
    pub fn track_move(
        &mut self,
        current: TouchPoint,
        side: Option<Side>,
        scroll: ScrollMetrics,
    ) -> MoveOutcome {
        let Some((diff_x, diff_y)) = self.displacement(current) else {
            return MoveOutcome::Ignored;
        };

        if let Some(side) = side {
            if classify_swipe(side, diff_x, diff_y) {
                self.clear();
                return MoveOutcome::Dismiss;
            }
        }

        if at_elastic_boundary(scroll, diff_y) {
            MoveOutcome::Contain
        } else {
            MoveOutcome::Scroll
        }
    }
}
