//! Scripted scenarios
//!
//! A scenario describes a document, the panels bound in it and a sequence of
//! user steps. Running it replays the steps against a [`Page`] and produces a
//! serializable [`Report`].
//!
//! ```yaml
//! document:
//!   children:
//!     - { tag: a, id: open, href: "#menu" }
//!     - tag: nav
//!       id: menu
//!       children:
//!         - { tag: a, href: /about, text: About }
//! panels:
//!   - selector: "#menu"
//!     options: { hideOnClick: true, hideOnEscape: true, side: left, delay: 300 }
//! steps:
//!   - click: "#open"
//!   - touch_start: { on: "#menu", x: 200, y: 100 }
//!   - touch_move: { on: "#menu", x: 120, y: 102 }
//!   - wait: 400
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::SlidepanelConfig;
use crate::dom::{Document, ElementId, ElementSpec};
use crate::event::{DomEvent, EventControl};
use crate::panel::{PanelId, PanelOptions};
use crate::runtime::{Navigation, Page, TimelineEntry};
use crate::tracing::VisibilitySnapshot;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub document: ElementSpec,
    #[serde(default)]
    pub panels: Vec<PanelBinding>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Bind every element matching `selector` with `options`
#[derive(Debug, Clone, Deserialize)]
pub struct PanelBinding {
    pub selector: String,
    #[serde(default)]
    pub options: PanelOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TouchStep {
    pub on: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Click the first element matching the selector
    Click(String),
    TouchStart(TouchStep),
    TouchMove(TouchStep),
    TouchEnd(String),
    /// Keydown with the given key code at the window
    Key(u32),
    Escape,
    /// Advance the clock
    Wait(u64),
}

impl Step {
    fn describe(&self) -> String {
        match self {
            Step::Click(sel) => format!("click {}", sel),
            Step::TouchStart(t) => format!("touchstart {} ({}, {})", t.on, t.x, t.y),
            Step::TouchMove(t) => format!("touchmove {} ({}, {})", t.on, t.x, t.y),
            Step::TouchEnd(sel) => format!("touchend {}", sel),
            Step::Key(code) => format!("keydown {}", code),
            Step::Escape => "escape".to_string(),
            Step::Wait(ms) => format!("wait {}ms", ms),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelReport {
    pub id: PanelId,
    pub fragment: Option<String>,
    pub visible: bool,
    pub scroll_top: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: String,
    pub at_ms: u64,
    pub default_suppressed: bool,
    pub propagation_stopped: bool,
    pub changes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub elapsed_ms: u64,
    pub panels: Vec<PanelReport>,
    pub steps: Vec<StepReport>,
    pub navigations: Vec<Navigation>,
    pub timeline: Vec<TimelineEntry>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Build the page and bind the configured panels
    pub fn build_page(&self, config: &SlidepanelConfig) -> Page {
        let mut page = Page::new(Document::from_spec(&self.document));
        for binding in &self.panels {
            let options = config.options_for(&binding.options);
            let ids = page.bind(&binding.selector, &options);
            if ids.is_empty() {
                tracing::debug!(selector = %binding.selector, "binding matched no elements");
            }
        }
        page
    }

    /// Replay every step, then let `settle_ms` more pass
    pub fn run(&self, config: &SlidepanelConfig, settle_ms: u64) -> Result<Report> {
        let mut page = self.build_page(config);
        let mut steps = Vec::with_capacity(self.steps.len());

        for (index, step) in self.steps.iter().enumerate() {
            let before = VisibilitySnapshot::from_page(&page);
            let event = apply_step(&mut page, step)
                .with_context(|| format!("Step {} ({}) failed", index + 1, step.describe()))?;
            let after = VisibilitySnapshot::from_page(&page);
            let changes = before.diff(&after);

            if let Some(changes) = &changes {
                tracing::debug!(step = index + 1, %changes, "visibility changed");
            }

            steps.push(StepReport {
                step: step.describe(),
                at_ms: page.now_ms(),
                default_suppressed: event.as_ref().is_some_and(|e| e.is_default_suppressed()),
                propagation_stopped: event.as_ref().is_some_and(|e| e.is_propagation_stopped()),
                changes,
            });
        }

        page.advance(settle_ms);

        Ok(Report {
            elapsed_ms: page.now_ms(),
            panels: panel_reports(&page),
            steps,
            navigations: page.navigations().to_vec(),
            timeline: page.timeline().to_vec(),
        })
    }
}

fn resolve(page: &Page, selector: &str) -> Result<ElementId> {
    page.document()
        .query_all(selector)
        .first()
        .copied()
        .with_context(|| format!("No element matches {:?}", selector))
}

fn apply_step(page: &mut Page, step: &Step) -> Result<Option<DomEvent>> {
    let event = match step {
        Step::Click(sel) => {
            let target = resolve(page, sel)?;
            Some(page.click(target))
        }
        Step::TouchStart(t) => {
            let target = resolve(page, &t.on)?;
            Some(page.touch_start(target, t.x, t.y))
        }
        Step::TouchMove(t) => {
            let target = resolve(page, &t.on)?;
            Some(page.touch_move(target, t.x, t.y))
        }
        Step::TouchEnd(sel) => {
            let target = resolve(page, sel)?;
            Some(page.touch_end(target))
        }
        Step::Key(code) => Some(page.key_down(*code)),
        Step::Escape => Some(page.press_escape()),
        Step::Wait(ms) => {
            page.advance(*ms);
            None
        }
    };
    Ok(event)
}

fn panel_reports(page: &Page) -> Vec<PanelReport> {
    page.controllers()
        .iter()
        .map(|c| PanelReport {
            id: c.id(),
            fragment: c.fragment().map(str::to_string),
            visible: c.is_visible(page.document()),
            scroll_top: page.document().scroll_top(c.element()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r##"
document:
  children:
    - { tag: a, id: open, href: "#menu" }
    - tag: nav
      id: menu
      children:
        - { tag: a, id: about, href: /about, text: About }
panels:
  - selector: "#menu"
    options: { hideOnClick: true, delay: 300 }
steps:
  - click: "#open"
  - click: "#about"
  - wait: 310
"##;

    #[test]
    fn test_parse_and_run() {
        let scenario = Scenario::parse(SCENARIO).unwrap();
        assert_eq!(scenario.panels.len(), 1);
        assert_eq!(scenario.steps.len(), 3);

        let report = scenario.run(&SlidepanelConfig::default(), 0).unwrap();

        assert!(!report.panels[0].visible);
        assert_eq!(report.steps[0].changes.as_deref(), Some("#menu: shown"));
        assert_eq!(report.steps[1].changes.as_deref(), Some("#menu: hidden"));
        assert!(report.steps[1].default_suppressed);
        assert_eq!(report.navigations.len(), 1);
        assert_eq!(report.navigations[0].href, "/about");
        assert_eq!(report.navigations[0].at_ms, 310);
    }

    #[test]
    fn test_unknown_selector_is_an_error() {
        let scenario = Scenario::parse(
            "document: {}\nsteps:\n  - click: \"#nope\"\n",
        )
        .unwrap();
        let err = scenario.run(&SlidepanelConfig::default(), 0).unwrap_err();
        assert!(format!("{:#}", err).contains("#nope"));
    }

    #[test]
    fn test_unit_step_parses() {
        let scenario = Scenario::parse("document: {}\nsteps:\n  - escape\n  - key: 13\n").unwrap();
        assert!(matches!(scenario.steps[0], Step::Escape));
        assert!(matches!(scenario.steps[1], Step::Key(13)));
    }
}
