//! Flat, indented link list from a nested navigation
//!
//! Used to mirror a page's nav into a panel: every link becomes one record
//! whose depth is derived from the number of enclosing list items.

use serde::Serialize;

use crate::dom::{Document, ElementId, Selector};

/// One link of the flattened navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Nesting depth; top-level items are 0
    pub depth: usize,
    pub href: Option<String>,
    pub target_attr: Option<String>,
    pub text: String,
}

/// Collect every link under `root` in document order
pub fn nav_list(doc: &Document, root: ElementId) -> Vec<NavLink> {
    doc.query_within(root, &Selector::Tag("a".to_string()))
        .into_iter()
        .map(|link| {
            let list_items = doc
                .ancestors(link)
                .into_iter()
                .filter(|id| doc.tag(*id) == Some("li"))
                .count();
            NavLink {
                depth: list_items.saturating_sub(1),
                href: non_empty(doc.attr(link, "href")),
                target_attr: non_empty(doc.attr(link, "target")),
                text: doc.text_content(link),
            }
        })
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Render records as panel markup
///
/// Each record becomes
/// `<a class="link depth-N" target=".." href=".."><span class="indent-N"></span>text</a>`.
pub fn render_nav_list(links: &[NavLink]) -> String {
    let mut html = String::new();
    for link in links {
        html.push_str(&format!("<a class=\"link depth-{}\"", link.depth));
        if let Some(target) = &link.target_attr {
            html.push_str(&format!(" target=\"{}\"", escape_html(target)));
        }
        if let Some(href) = &link.href {
            html.push_str(&format!(" href=\"{}\"", escape_html(href)));
        }
        html.push_str(&format!(
            "><span class=\"indent-{}\"></span>{}</a>",
            link.depth,
            escape_html(&link.text)
        ));
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
