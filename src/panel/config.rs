//! Panel configuration
//!
//! Callers supply a partial [`PanelOptions`]; binding merges it over the
//! defaults into an immutable [`PanelConfig`].

use serde::{Deserialize, Serialize};

use crate::dom::ElementId;

/// Edge of the viewport a panel is anchored to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    None,
}

/// Element carrying the visibility marker
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TargetRef {
    /// The panel element itself
    #[default]
    Panel,
    Element(ElementId),
    /// Resolved once at bind time; must match exactly one element
    Selector(String),
}

impl From<String> for TargetRef {
    fn from(selector: String) -> Self {
        TargetRef::Selector(selector)
    }
}

impl From<&str> for TargetRef {
    fn from(selector: &str) -> Self {
        TargetRef::Selector(selector.to_string())
    }
}

impl From<ElementId> for TargetRef {
    fn from(id: ElementId) -> Self {
        TargetRef::Element(id)
    }
}

fn default_visible_class() -> String {
    "visible".to_string()
}

/// Fully resolved panel configuration, immutable after binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Milliseconds between hiding and the scroll/form cleanup
    pub delay: u64,
    pub hide_on_click: bool,
    pub hide_on_escape: bool,
    pub hide_on_swipe: bool,
    pub reset_scroll: bool,
    pub reset_forms: bool,
    pub side: Side,
    pub target: TargetRef,
    pub visible_class: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            delay: 0,
            hide_on_click: false,
            hide_on_escape: false,
            hide_on_swipe: false,
            reset_scroll: false,
            reset_forms: false,
            side: Side::None,
            target: TargetRef::Panel,
            visible_class: default_visible_class(),
        }
    }
}

/// Caller-supplied overrides; `None` keeps the default
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelOptions {
    pub delay: Option<u64>,
    pub hide_on_click: Option<bool>,
    pub hide_on_escape: Option<bool>,
    pub hide_on_swipe: Option<bool>,
    pub reset_scroll: Option<bool>,
    pub reset_forms: Option<bool>,
    pub side: Option<Side>,
    pub target: Option<TargetRef>,
    pub visible_class: Option<String>,
}

impl PanelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, delay: u64) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn hide_on_click(mut self, enabled: bool) -> Self {
        self.hide_on_click = Some(enabled);
        self
    }

    pub fn hide_on_escape(mut self, enabled: bool) -> Self {
        self.hide_on_escape = Some(enabled);
        self
    }

    pub fn hide_on_swipe(mut self, enabled: bool) -> Self {
        self.hide_on_swipe = Some(enabled);
        self
    }

    pub fn reset_scroll(mut self, enabled: bool) -> Self {
        self.reset_scroll = Some(enabled);
        self
    }

    pub fn reset_forms(mut self, enabled: bool) -> Self {
        self.reset_forms = Some(enabled);
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn target(mut self, target: impl Into<TargetRef>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn visible_class(mut self, class: &str) -> Self {
        self.visible_class = Some(class.to_string());
        self
    }

    /// Fill every unset field from `base`, keeping explicit values
    pub fn or(self, base: &PanelOptions) -> PanelOptions {
        PanelOptions {
            delay: self.delay.or(base.delay),
            hide_on_click: self.hide_on_click.or(base.hide_on_click),
            hide_on_escape: self.hide_on_escape.or(base.hide_on_escape),
            hide_on_swipe: self.hide_on_swipe.or(base.hide_on_swipe),
            reset_scroll: self.reset_scroll.or(base.reset_scroll),
            reset_forms: self.reset_forms.or(base.reset_forms),
            side: self.side.or(base.side),
            target: self.target.or_else(|| base.target.clone()),
            visible_class: self.visible_class.or_else(|| base.visible_class.clone()),
        }
    }

    /// Merge these options over [`PanelConfig::default`]
    pub fn merge_over_defaults(&self) -> PanelConfig {
        let defaults = PanelConfig::default();
        PanelConfig {
            delay: self.delay.unwrap_or(defaults.delay),
            hide_on_click: self.hide_on_click.unwrap_or(defaults.hide_on_click),
            hide_on_escape: self.hide_on_escape.unwrap_or(defaults.hide_on_escape),
            hide_on_swipe: self.hide_on_swipe.unwrap_or(defaults.hide_on_swipe),
            reset_scroll: self.reset_scroll.unwrap_or(defaults.reset_scroll),
            reset_forms: self.reset_forms.unwrap_or(defaults.reset_forms),
            side: self.side.unwrap_or(defaults.side),
            target: self.target.clone().unwrap_or(defaults.target),
            visible_class: self
                .visible_class
                .clone()
                .unwrap_or(defaults.visible_class),
        }
    }
}
