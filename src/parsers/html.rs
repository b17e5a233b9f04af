//! Narrow HTML query layer over the `scraper` crate.
//!
//! Parsers only see [`Document`], [`Cell`] and the text-rendering helpers
//! here, so the underlying HTML library stays swappable.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node};

pub use scraper::Selector;

static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static DATA_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));

/// A table cell (or any element) borrowed from a parsed [`Document`].
pub type Cell<'a> = ElementRef<'a>;

/// A parsed HTML document or fragment.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full page.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Parse a standalone markup snippet.
    pub fn fragment(html: &str) -> Self {
        Self {
            html: Html::parse_fragment(html),
        }
    }

    /// Data rows of every table matching `table`, as their `td` cells.
    ///
    /// The first row of each table is treated as the header and skipped.
    pub fn table_rows(&self, table: &Selector) -> Vec<Vec<Cell<'_>>> {
        let mut rows = Vec::new();
        for table in self.html.select(table) {
            for row in table.select(&ROW).skip(1) {
                rows.push(row.select(&DATA_CELL).collect());
            }
        }
        rows
    }

    /// First element matching `selector`.
    pub fn first(&self, selector: &Selector) -> Option<Cell<'_>> {
        self.html.select(selector).next()
    }

    /// All text content, concatenated in document order.
    pub fn text(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// Compile a literal CSS selector.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("literal selector")
}

/// Rules for flattening a cell into line-oriented text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRules<'a> {
    /// Elements whose whole subtree is dropped, by tag name.
    pub skip_tags: &'a [&'a str],
    /// Elements whose whole subtree is dropped, by class.
    pub skip_classes: &'a [&'a str],
    /// Elements preceded by a newline, by tag name.
    pub break_before: &'a [&'a str],
}

/// Render the text of `cell`, turning `<br>` into `\n` and applying `rules`.
pub fn render_text(cell: Cell<'_>, rules: &TextRules<'_>) -> String {
    let mut out = String::new();
    push_text(cell, rules, &mut out);
    out
}

fn push_text(element: Cell<'_>, rules: &TextRules<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                if rules.skip_tags.contains(&name)
                    || el.classes().any(|c| rules.skip_classes.contains(&c))
                {
                    continue;
                }
                if rules.break_before.contains(&name) {
                    out.push('\n');
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    push_text(child_ref, rules, out);
                }
            }
            _ => {}
        }
    }
}

/// Inner markup of a cell.
pub fn inner_html(cell: Cell<'_>) -> String {
    cell.inner_html()
}

/// Plain text of a cell, trimmed.
pub fn trimmed_text(cell: Cell<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// First non-empty value among `attrs` on `element`, in priority order.
pub fn first_attr<'a>(element: Cell<'a>, attrs: &[&str]) -> Option<&'a str> {
    attrs
        .iter()
        .filter_map(|name| element.value().attr(name))
        .find(|value| !value.is_empty())
}

/// Parse `html` as the content of a single `td` and hand the cell to `f`.
#[cfg(test)]
pub(crate) fn with_cell<R>(html: &str, f: impl FnOnce(Cell<'_>) -> R) -> R {
    let doc = Document::fragment(&format!("<table><tr><td>{html}</td></tr></table>"));
    let cell = doc.first(&DATA_CELL).expect("fixture has a td");
    f(cell)
}
