//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use slidepanel::dom::{Document, ElementId, ElementSpec};
use slidepanel::panel::{PanelId, PanelOptions};
use slidepanel::runtime::Page;

/// A page with one bound `#menu` panel and handles to its interesting elements
pub struct Fixture {
    pub page: Page,
    pub panel: PanelId,
    pub menu: ElementId,
    pub opener: ElementId,
    pub main: ElementId,
    pub about: ElementId,
    pub docs: ElementId,
    pub dead: ElementId,
    pub close: ElementId,
    pub bare: ElementId,
    pub query: ElementId,
    pub remember: ElementId,
}

/// The standard page layout:
///
/// ```text
/// body
///   header > a#open[href=#menu]
///   div#main
///   nav#menu
///     ul > li > a#about[href=/about]
///          li > a#docs[href=https://docs.example.com, target=_blank]
///          li > a#dead[href=#]
///          li > a#close[href=#menu]
///          li > a#bare
///     form#search > input#q, input#remember
/// ```
pub fn page_spec() -> ElementSpec {
    let item = |link: ElementSpec| ElementSpec::new("li").with_child(link);
    ElementSpec::new("body")
        .with_child(
            ElementSpec::new("header").with_child(
                ElementSpec::new("a")
                    .with_id("open")
                    .with_href("#menu")
                    .with_text("Menu"),
            ),
        )
        .with_child(ElementSpec::new("div").with_id("main").with_text("Content"))
        .with_child(
            ElementSpec::new("nav")
                .with_id("menu")
                .with_scroll(0.0, 1000.0, 400.0)
                .with_child(
                    ElementSpec::new("ul")
                        .with_child(item(
                            ElementSpec::new("a")
                                .with_id("about")
                                .with_href("/about")
                                .with_text("About"),
                        ))
                        .with_child(item(
                            ElementSpec::new("a")
                                .with_id("docs")
                                .with_href("https://docs.example.com")
                                .with_target("_blank")
                                .with_text("Docs"),
                        ))
                        .with_child(item(
                            ElementSpec::new("a")
                                .with_id("dead")
                                .with_href("#")
                                .with_text("Dead"),
                        ))
                        .with_child(item(
                            ElementSpec::new("a")
                                .with_id("close")
                                .with_href("#menu")
                                .with_text("Close"),
                        ))
                        .with_child(item(ElementSpec::new("a").with_id("bare").with_text("Bare"))),
                )
                .with_child(
                    ElementSpec::new("form")
                        .with_id("search")
                        .with_child(ElementSpec::new("input").with_id("q"))
                        .with_child(ElementSpec::new("input").with_id("remember")),
                ),
        )
}

pub fn fixture(options: PanelOptions) -> Fixture {
    let mut page = Page::new(Document::from_spec(&page_spec()));
    let ids = page.bind("#menu", &options);
    assert_eq!(ids.len(), 1, "fixture binds exactly one panel");

    let el = |id: &str| page.document().by_html_id(id).expect("fixture element");
    let (menu, opener, main, about, docs) = (el("menu"), el("open"), el("main"), el("about"), el("docs"));
    let (dead, close, bare, query, remember) = (el("dead"), el("close"), el("bare"), el("q"), el("remember"));

    Fixture {
        page,
        panel: ids[0],
        menu,
        opener,
        main,
        about,
        docs,
        dead,
        close,
        bare,
        query,
        remember,
    }
}

impl Fixture {
    /// Show the panel through its toggle link
    pub fn open(&mut self) {
        self.page.click(self.opener);
        assert!(self.is_visible(), "panel should open via its toggle link");
    }

    pub fn is_visible(&self) -> bool {
        self.page.is_visible(self.panel)
    }
}
