//! In-memory element tree
//!
//! The document is the shared UI tree the panel controller works against.
//! Class markers on elements are the single source of truth for visibility;
//! controllers never cache them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Arena index of an element inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

/// Vertical scroll metrics of a scrollable element
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top
    pub scroll_top: f64,
    /// Total height of the scrollable content
    pub scroll_height: f64,
    /// Rendered height of the element including borders
    pub outer_height: f64,
}

impl ScrollMetrics {
    /// Remaining scrollable distance plus the visible height
    pub fn remaining(&self) -> f64 {
        self.scroll_height - self.scroll_top
    }
}

/// State of a form control (input, textarea, select)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub value: String,
    pub default_value: String,
    pub checked: bool,
    pub default_checked: bool,
}

impl FormField {
    /// Create a field whose current value equals its default
    pub fn new(default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        Self {
            value: default_value.clone(),
            default_value,
            checked: false,
            default_checked: false,
        }
    }

    /// Restore the default value and checked state
    pub fn reset(&mut self) {
        self.value.clone_from(&self.default_value);
        self.checked = self.default_checked;
    }
}

/// A single node of the tree
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    /// The `id` attribute, used as fragment identifier (`#id`)
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    /// Text directly owned by this element (rendered before its children)
    pub text: String,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    pub scroll: ScrollMetrics,
    pub field: Option<FormField>,
}

impl Element {
    fn from_spec(spec: &ElementSpec) -> Self {
        let mut attrs = spec.attrs.clone();
        if let Some(href) = &spec.href {
            attrs.insert("href".to_string(), href.clone());
        }
        if let Some(target) = &spec.target {
            attrs.insert("target".to_string(), target.clone());
        }

        let field = if is_form_control(&spec.tag) {
            let default_value = spec.value.clone().unwrap_or_default();
            Some(FormField {
                value: default_value.clone(),
                default_value,
                checked: spec.checked,
                default_checked: spec.checked,
            })
        } else {
            None
        };

        Self {
            tag: spec.tag.to_ascii_lowercase(),
            id: spec.id.clone(),
            classes: spec.class.clone(),
            attrs,
            text: spec.text.clone().unwrap_or_default(),
            parent: None,
            children: Vec::new(),
            scroll: ScrollMetrics {
                scroll_top: spec.scroll_top,
                scroll_height: spec.scroll_height,
                outer_height: spec.outer_height,
            },
            field,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

fn is_form_control(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    )
}

/// Declarative description of an element subtree
///
/// Used by tests and by scenario files to build documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    #[serde(alias = "classes")]
    pub class: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub href: Option<String>,
    pub target: Option<String>,
    pub text: Option<String>,
    pub value: Option<String>,
    pub checked: bool,
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub outer_height: f64,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class.push(class.to_string());
        self
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_scroll(mut self, scroll_top: f64, scroll_height: f64, outer_height: f64) -> Self {
        self.scroll_top = scroll_top;
        self.scroll_height = scroll_height;
        self.outer_height = outer_height;
        self
    }

    pub fn with_child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// Minimal selector grammar: `#id`, `.class`, `tag`, `*`,
/// `tag[attr="value"]` and `[attr="value"]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Any,
    Id(String),
    Class(String),
    Tag(String),
    Attr {
        tag: Option<String>,
        name: String,
        value: String,
    },
}

impl Selector {
    /// Parse a selector string; `None` for anything outside the grammar
    pub fn parse(input: &str) -> Option<Selector> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if input == "*" {
            return Some(Selector::Any);
        }
        if let Some(id) = input.strip_prefix('#') {
            return (!id.is_empty()).then(|| Selector::Id(id.to_string()));
        }
        if let Some(class) = input.strip_prefix('.') {
            return (!class.is_empty()).then(|| Selector::Class(class.to_string()));
        }
        if let Some(open) = input.find('[') {
            let rest = input[open + 1..].strip_suffix(']')?;
            let (name, value) = rest.split_once('=')?;
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            let tag = &input[..open];
            return Some(Selector::Attr {
                tag: (!tag.is_empty()).then(|| tag.to_ascii_lowercase()),
                name: name.trim().to_string(),
                value: value.to_string(),
            });
        }
        if input.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Some(Selector::Tag(input.to_ascii_lowercase()));
        }
        None
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Any => true,
            Selector::Id(id) => element.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => element.has_class(class),
            Selector::Tag(tag) => element.tag == *tag,
            Selector::Attr { tag, name, value } => {
                tag.as_ref().map_or(true, |t| element.tag == *t)
                    && element.attr(name) == Some(value.as_str())
            }
        }
    }
}

/// The element tree with a distinguished `body` root
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    body: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only an empty `body`
    pub fn new() -> Self {
        Self {
            elements: vec![Element {
                tag: "body".to_string(),
                ..Default::default()
            }],
            body: ElementId(0),
        }
    }

    /// Build a document whose body is described by `spec`
    ///
    /// The spec's own tag is ignored; its attributes and children become the
    /// body's.
    pub fn from_spec(spec: &ElementSpec) -> Self {
        let mut doc = Self::new();
        let mut body = Element::from_spec(spec);
        body.tag = "body".to_string();
        doc.elements[0] = body;
        for child in &spec.children {
            doc.append(doc.body, child);
        }
        doc
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Append a subtree under `parent`, returning the id of its root
    pub fn append(&mut self, parent: ElementId, spec: &ElementSpec) -> ElementId {
        let id = ElementId(self.elements.len());
        let mut element = Element::from_spec(spec);
        element.parent = Some(parent);
        self.elements.push(element);
        if let Some(p) = self.elements.get_mut(parent.0) {
            p.children.push(id);
        }
        for child in &spec.children {
            self.append(id, child);
        }
        id
    }

    // === Identity ===

    /// First element whose `id` attribute equals `html_id`
    pub fn by_html_id(&self, html_id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.id.as_deref() == Some(html_id))
            .map(ElementId)
    }

    pub fn html_id(&self, id: ElementId) -> Option<&str> {
        self.get(id).and_then(|e| e.id.as_deref())
    }

    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(|e| e.tag.as_str())
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id).and_then(|e| e.attr(name))
    }

    // === Class marker ===

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(e) = self.get_mut(id) {
            if !e.has_class(class) {
                e.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(e) = self.get_mut(id) {
            e.classes.retain(|c| c != class);
        }
    }

    /// Flip `class` on the element, returning whether it is now present
    pub fn toggle_class(&mut self, id: ElementId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            self.has_class(id, class)
        }
    }

    // === Tree navigation ===

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|e| e.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map_or(&[], |e| e.children.as_slice())
    }

    /// The element itself followed by its ancestors up to the body
    pub fn path_to_root(&self, id: ElementId) -> Vec<ElementId> {
        let mut path = Vec::new();
        let mut current = self.get(id).map(|_| id);
        while let Some(cur) = current {
            path.push(cur);
            current = self.parent(cur);
        }
        path
    }

    /// Strict ancestors, nearest first
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut path = self.path_to_root(id);
        if !path.is_empty() {
            path.remove(0);
        }
        path
    }

    /// Whether `node` is `ancestor` or lies inside it
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        self.path_to_root(node).contains(&ancestor)
    }

    /// Strict descendants in document order
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(id).iter().rev().copied().collect();
        while let Some(cur) = stack.pop() {
            out.push(cur);
            stack.extend(self.children(cur).iter().rev().copied());
        }
        out
    }

    pub fn prev_sibling(&self, id: ElementId) -> Option<ElementId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let index = siblings.iter().position(|c| *c == id)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    /// Concatenated text of the element and its descendants
    pub fn text_content(&self, id: ElementId) -> String {
        let mut text = self.get(id).map(|e| e.text.clone()).unwrap_or_default();
        for child in self.descendants(id) {
            if let Some(e) = self.get(child) {
                text.push_str(&e.text);
            }
        }
        text
    }

    // === Selection ===

    pub fn matches(&self, id: ElementId, selector: &Selector) -> bool {
        self.get(id).is_some_and(|e| selector.matches(e))
    }

    /// All elements matching `selector`, body included, in document order
    pub fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let Some(selector) = Selector::parse(selector) else {
            tracing::trace!(selector, "unsupported selector");
            return Vec::new();
        };
        std::iter::once(self.body)
            .chain(self.descendants(self.body))
            .filter(|id| self.matches(*id, &selector))
            .collect()
    }

    /// Descendants of `root` matching `selector`, in document order
    pub fn query_within(&self, root: ElementId, selector: &Selector) -> Vec<ElementId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.matches(*id, selector))
            .collect()
    }

    // === Reordering ===

    fn detach(&mut self, id: ElementId) -> Option<ElementId> {
        let parent = self.parent(id)?;
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        Some(parent)
    }

    /// Move `id` to the first position of `parent`
    pub fn prepend_to(&mut self, id: ElementId, parent: ElementId) {
        if self.get(parent).is_none() || self.contains(id, parent) {
            return;
        }
        self.detach(id);
        if let Some(p) = self.get_mut(parent) {
            p.children.insert(0, id);
        }
        if let Some(e) = self.get_mut(id) {
            e.parent = Some(parent);
        }
    }

    /// Move `id` so it directly follows `sibling`
    pub fn insert_after(&mut self, id: ElementId, sibling: ElementId) {
        let Some(parent) = self.parent(sibling) else {
            return;
        };
        if id == sibling || self.contains(id, sibling) {
            return;
        }
        self.detach(id);
        if let Some(p) = self.get_mut(parent) {
            let index = p
                .children
                .iter()
                .position(|c| *c == sibling)
                .map_or(p.children.len(), |i| i + 1);
            p.children.insert(index, id);
        }
        if let Some(e) = self.get_mut(id) {
            e.parent = Some(parent);
        }
    }

    // === Scroll and forms ===

    pub fn scroll(&self, id: ElementId) -> ScrollMetrics {
        self.get(id).map(|e| e.scroll).unwrap_or_default()
    }

    pub fn scroll_top(&self, id: ElementId) -> f64 {
        self.scroll(id).scroll_top
    }

    pub fn set_scroll_top(&mut self, id: ElementId, scroll_top: f64) {
        if let Some(e) = self.get_mut(id) {
            e.scroll.scroll_top = scroll_top;
        }
    }

    pub fn field(&self, id: ElementId) -> Option<&FormField> {
        self.get(id).and_then(|e| e.field.as_ref())
    }

    pub fn field_mut(&mut self, id: ElementId) -> Option<&mut FormField> {
        self.get_mut(id).and_then(|e| e.field.as_mut())
    }

    /// Reset every control inside `form` to its default state
    pub fn reset_form(&mut self, form: ElementId) {
        for id in self.descendants(form) {
            if let Some(field) = self.field_mut(id) {
                field.reset();
            }
        }
    }
}
