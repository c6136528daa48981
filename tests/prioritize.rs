//! Prioritize tests: moving elements to the front and restoring them

use slidepanel::dom::{Document, ElementId, ElementSpec};
use slidepanel::prioritize::Prioritizer;

fn layout() -> (Document, [ElementId; 3]) {
    let doc = Document::from_spec(
        &ElementSpec::new("body")
            .with_child(ElementSpec::new("header").with_id("header"))
            .with_child(ElementSpec::new("nav").with_id("nav"))
            .with_child(ElementSpec::new("main").with_id("main")),
    );
    let ids = ["header", "nav", "main"].map(|id| doc.by_html_id(id).unwrap());
    (doc, ids)
}

#[test]
fn test_move_to_front_and_restore() {
    let (mut doc, [header, nav, main]) = layout();
    let body = doc.body();
    let mut prioritizer = Prioritizer::new();

    prioritizer.apply(&mut doc, &[main], true);
    assert_eq!(doc.children(body), &[main, header, nav]);
    assert!(prioritizer.is_moved(main));
    assert_eq!(prioritizer.anchor(main), Some(nav));

    prioritizer.apply(&mut doc, &[main], false);
    assert_eq!(doc.children(body), &[header, nav, main]);
    assert!(!prioritizer.is_moved(main));
}

#[test]
fn test_repeated_condition_is_stable() {
    let (mut doc, [header, nav, main]) = layout();
    let body = doc.body();
    let mut prioritizer = Prioritizer::new();

    prioritizer.apply(&mut doc, &[nav], true);
    prioritizer.apply(&mut doc, &[nav], true);

    assert_eq!(doc.children(body), &[nav, header, main]);
    assert_eq!(prioritizer.anchor(nav), Some(header));
}

#[test]
fn test_first_child_is_not_moved() {
    let (mut doc, [header, nav, main]) = layout();
    let mut prioritizer = Prioritizer::new();

    prioritizer.apply(&mut doc, &[header], true);

    assert!(!prioritizer.is_moved(header));
    assert_eq!(doc.children(doc.body()), &[header, nav, main]);
}

#[test]
fn test_restore_without_move_is_noop() {
    let (mut doc, [header, nav, main]) = layout();
    let mut prioritizer = Prioritizer::new();

    prioritizer.apply(&mut doc, &[nav, main], false);

    assert_eq!(doc.children(doc.body()), &[header, nav, main]);
}

#[test]
fn test_element_without_parent_is_skipped() {
    let (mut doc, _) = layout();
    let body = doc.body();
    let mut prioritizer = Prioritizer::new();

    prioritizer.apply(&mut doc, &[body], true);

    assert!(!prioritizer.is_moved(body));
}

#[test]
fn test_multiple_elements_restore_in_reverse_order() {
    let (mut doc, [header, nav, main]) = layout();
    let body = doc.body();
    let mut prioritizer = Prioritizer::new();

    prioritizer.apply(&mut doc, &[nav, main], true);
    assert_eq!(doc.children(body), &[main, nav, header]);
    assert_eq!(prioritizer.anchor(main), Some(header));

    prioritizer.apply(&mut doc, &[main, nav], false);
    assert_eq!(doc.children(body), &[header, nav, main]);
}
