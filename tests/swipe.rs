//! Swipe gesture tests
//!
//! Tests for swipe-to-dismiss per side, gesture bookkeeping and the elastic
//! overscroll guard

mod common;

use common::fixture;

use slidepanel::event::EventControl;
use slidepanel::panel::{classify_swipe, PanelOptions, Side};

fn swipe_options(side: Side) -> PanelOptions {
    PanelOptions::new().hide_on_swipe(true).side(side)
}

#[test]
fn test_classification_examples() {
    assert!(classify_swipe(Side::Left, 60.0, 5.0));
    assert!(!classify_swipe(Side::Left, 60.0, 25.0));
    assert!(classify_swipe(Side::Right, -60.0, 0.0));
    assert!(!classify_swipe(Side::Top, 0.0, -60.0));
}

#[test]
fn test_swipe_left_dismisses() {
    let mut fx = fixture(swipe_options(Side::Left).delay(150));
    fx.open();

    fx.page.touch_start(fx.menu, 200.0, 100.0);
    let event = fx.page.touch_move(fx.menu, 130.0, 105.0);

    assert!(!fx.is_visible());
    assert!(event.is_default_suppressed());
    assert!(event.is_propagation_stopped());
    assert_eq!(fx.page.controller(fx.panel).unwrap().gesture().origin(), None);
    assert_eq!(fx.page.pending_timers(), 1);
}

#[test]
fn test_swipe_from_nested_element_dismisses() {
    let mut fx = fixture(swipe_options(Side::Left));
    fx.open();

    fx.page.touch_start(fx.about, 200.0, 100.0);
    fx.page.touch_move(fx.about, 100.0, 100.0);

    assert!(!fx.is_visible());
}

#[test]
fn test_swipe_right_top_bottom() {
    let cases = [
        (Side::Right, (100.0, 300.0), (170.0, 300.0)),
        (Side::Top, (100.0, 300.0), (100.0, 200.0)),
        (Side::Bottom, (100.0, 300.0), (105.0, 380.0)),
    ];

    for (side, (x0, y0), (x1, y1)) in cases {
        let mut fx = fixture(swipe_options(side));
        fx.open();

        fx.page.touch_start(fx.menu, x0, y0);
        fx.page.touch_move(fx.menu, x1, y1);

        assert!(!fx.is_visible(), "{:?} swipe should dismiss", side);
    }
}

#[test]
fn test_wrong_direction_keeps_panel() {
    let mut fx = fixture(swipe_options(Side::Left));
    fx.open();

    fx.page.touch_start(fx.menu, 100.0, 100.0);
    fx.page.touch_move(fx.menu, 200.0, 100.0);

    assert!(fx.is_visible());
}

#[test]
fn test_drifting_swipe_keeps_panel() {
    let mut fx = fixture(swipe_options(Side::Left));
    fx.open();

    fx.page.touch_start(fx.menu, 200.0, 100.0);
    fx.page.touch_move(fx.menu, 130.0, 130.0);

    assert!(fx.is_visible());
    assert!(fx.page.controller(fx.panel).unwrap().gesture().origin().is_some());
}

#[test]
fn test_side_none_never_dismisses() {
    let mut fx = fixture(swipe_options(Side::None));
    fx.open();

    for (x, y) in [(300.0, 100.0), (100.0, 100.0), (200.0, 0.0), (200.0, 200.0)] {
        fx.page.touch_start(fx.menu, 200.0, 100.0);
        fx.page.touch_move(fx.menu, x, y);
    }

    assert!(fx.is_visible());
}

#[test]
fn test_swipe_ignored_without_hide_on_swipe() {
    let mut fx = fixture(PanelOptions::new().side(Side::Left));
    fx.open();

    fx.page.touch_start(fx.menu, 200.0, 100.0);
    fx.page.touch_move(fx.menu, 100.0, 100.0);

    assert!(fx.is_visible());
}

#[test]
fn test_move_without_start_does_nothing() {
    let mut fx = fixture(swipe_options(Side::Left));
    fx.open();

    let event = fx.page.touch_move(fx.menu, 0.0, 0.0);

    assert!(fx.is_visible());
    assert!(!event.is_default_suppressed());
}

#[test]
fn test_touch_end_clears_origin() {
    let mut fx = fixture(swipe_options(Side::Left));
    fx.open();

    fx.page.touch_start(fx.menu, 200.0, 100.0);
    fx.page.touch_end(fx.menu);
    assert_eq!(fx.page.controller(fx.panel).unwrap().gesture().origin(), None);

    fx.page.touch_move(fx.menu, 100.0, 100.0);
    assert!(fx.is_visible());
}

#[test]
fn test_consumed_gesture_needs_new_start() {
    let mut fx = fixture(swipe_options(Side::Left));
    fx.open();

    fx.page.touch_start(fx.menu, 200.0, 100.0);
    fx.page.touch_move(fx.menu, 100.0, 100.0);
    assert!(!fx.is_visible());

    fx.open();
    fx.page.touch_move(fx.menu, 50.0, 100.0);
    assert!(fx.is_visible());
}

// ========================================================================
// Elastic overscroll
// ========================================================================

#[test]
fn test_pull_down_at_top_is_contained() {
    let mut fx = fixture(PanelOptions::new());
    fx.open();

    fx.page.touch_start(fx.menu, 200.0, 100.0);
    let event = fx.page.touch_move(fx.menu, 200.0, 140.0);

    assert!(event.is_default_suppressed());
    assert!(fx.is_visible());
}

#[test]
fn test_scroll_in_middle_is_allowed() {
    let mut fx = fixture(PanelOptions::new());
    fx.open();
    fx.page.document_mut().set_scroll_top(fx.menu, 200.0);

    fx.page.touch_start(fx.menu, 200.0, 100.0);
    let down = fx.page.touch_move(fx.menu, 200.0, 140.0);
    let up = fx.page.touch_move(fx.menu, 200.0, 60.0);

    assert!(!down.is_default_suppressed());
    assert!(!up.is_default_suppressed());
}

#[test]
fn test_push_up_at_bottom_is_contained() {
    let mut fx = fixture(PanelOptions::new());
    fx.open();
    fx.page.document_mut().set_scroll_top(fx.menu, 600.0);

    fx.page.touch_start(fx.menu, 200.0, 300.0);
    let up = fx.page.touch_move(fx.menu, 200.0, 250.0);
    let down = fx.page.touch_move(fx.menu, 200.0, 340.0);

    assert!(up.is_default_suppressed());
    assert!(!down.is_default_suppressed());
}
