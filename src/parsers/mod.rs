//! Wiki table cell parsers.
//!
//! Each parser turns one loosely structured cell into typed values and never
//! fails: unexpected markup degrades to empty lists or raw-text fallbacks.

pub mod classify;
pub mod code;
pub mod duration;
pub mod html;
pub mod reward;

use crate::models::code::ScrapedCode;
use crate::parsers::code::CodeExtractor;
use crate::parsers::html::Cell;

/// Minimum cells a data row needs: code, server, rewards, duration.
pub const ROW_CELLS: usize = 4;

/// Turn one table row into scraped codes.
///
/// Rows with fewer than [`ROW_CELLS`] cells are section separators or layout
/// rows and yield nothing. A row listing several codes yields one record per
/// code, all sharing the row's server, rewards, duration and status.
pub fn parse_row(cells: &[Cell<'_>], codes: &CodeExtractor) -> Vec<ScrapedCode> {
    let [code_cell, server_cell, reward_cell, duration_cell, ..] = cells else {
        return Vec::new();
    };

    let tokens = codes.extract(*code_cell);
    if tokens.is_empty() {
        return Vec::new();
    }

    let server = html::trimmed_text(*server_cell);
    let rewards = reward::parse_rewards(*reward_cell);
    let duration = duration::parse_duration(*duration_cell);
    let status = classify::classify(&duration);

    tokens
        .into_iter()
        .map(|code| ScrapedCode {
            code,
            server: server.clone(),
            rewards: rewards.clone(),
            duration: duration.clone(),
            status,
        })
        .collect()
}
