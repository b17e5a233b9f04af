//! Duration cell parsing: labeled validity windows with normalized dates.
//!
//! Wiki duration cells mix bold region headers, plain dates and client-side
//! time widgets. The widgets re-render the same timestamp, so they are
//! dropped before the cell is flattened into one line per entry.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::code::DurationEntry;
use crate::parsers::html::{self, Cell, TextRules};

/// Label used when a line carries no `label: value` separator.
pub const DEFAULT_LABEL: &str = "Info";

/// Value stored for windows without an end date.
pub const INDEFINITE: &str = "(indefinite)";

static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+ [0-9]{1,2}, [0-9]{4}").expect("date pattern"));

const DURATION_CELL_RULES: TextRules<'static> = TextRules {
    skip_tags: &["sup"],
    skip_classes: &["timeago", "local-time"],
    break_before: &["b", "strong"],
};

/// Parse a duration cell into ordered entries.
pub fn parse_duration(cell: Cell<'_>) -> Vec<DurationEntry> {
    parse_duration_text(&html::render_text(cell, &DURATION_CELL_RULES))
}

/// Parse already-flattened duration text, one entry per non-empty line.
pub fn parse_duration_text(text: &str) -> Vec<DurationEntry> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> DurationEntry {
    let (label, value) = match line.split_once(':') {
        Some((label, value)) => (label.trim(), value.trim()),
        None => (DEFAULT_LABEL, line),
    };

    DurationEntry {
        label: label.to_string(),
        value: normalize_value(value),
    }
}

/// Reduce a value to its first `Month D, YYYY` date, or the indefinite marker.
///
/// Anything else is kept verbatim.
pub fn normalize_value(value: &str) -> String {
    if let Some(date) = DATE.find(value) {
        return date.as_str().to_string();
    }
    if value.to_lowercase().contains("indefinite") {
        return INDEFINITE.to_string();
    }
    value.to_string()
}
