//! Move elements to the front of their parents and back again
//!
//! The original position of a moved element is remembered as its former
//! previous sibling, kept in a side table owned by the [`Prioritizer`].

use std::collections::HashMap;

use crate::dom::{Document, ElementId};

#[derive(Debug, Default)]
pub struct Prioritizer {
    /// Moved element -> sibling it used to follow
    moved: HashMap<ElementId, ElementId>,
}

impl Prioritizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_moved(&self, element: ElementId) -> bool {
        self.moved.contains_key(&element)
    }

    /// Sibling the element will be restored after, if it was moved
    pub fn anchor(&self, element: ElementId) -> Option<ElementId> {
        self.moved.get(&element).copied()
    }

    /// With `condition`, move each element first in its parent; without it,
    /// restore previously moved elements
    pub fn apply(&mut self, doc: &mut Document, elements: &[ElementId], condition: bool) {
        for &element in elements {
            let Some(parent) = doc.parent(element) else {
                continue;
            };

            match (self.moved.get(&element).copied(), condition) {
                (None, true) => {
                    // Already first: nothing to remember
                    let Some(prev) = doc.prev_sibling(element) else {
                        continue;
                    };
                    doc.prepend_to(element, parent);
                    self.moved.insert(element, prev);
                    tracing::trace!(element = element.0, after = prev.0, "prioritized");
                }
                (Some(prev), false) => {
                    doc.insert_after(element, prev);
                    self.moved.remove(&element);
                    tracing::trace!(element = element.0, after = prev.0, "restored");
                }
                (None, false) | (Some(_), true) => {}
            }
        }
    }
}
