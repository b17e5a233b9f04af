//! Reward cell parsing: one labeled item per `<br>`-separated line.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::code::RewardItem;
use crate::parsers::html::{self, selector, Cell, Document, Selector};

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("line break pattern"));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));

/// Lazy-loaded images keep the real URL in `data-src`.
const IMAGE_ATTRS: [&str; 2] = ["data-src", "src"];

/// Parse a reward cell.
pub fn parse_rewards(cell: Cell<'_>) -> Vec<RewardItem> {
    parse_rewards_html(&html::inner_html(cell))
}

/// Parse reward markup, skipping lines without visible text.
pub fn parse_rewards_html(markup: &str) -> Vec<RewardItem> {
    if markup.is_empty() {
        return Vec::new();
    }

    LINE_BREAK
        .split(markup)
        .filter_map(parse_reward_line)
        .collect()
}

fn parse_reward_line(markup: &str) -> Option<RewardItem> {
    let fragment = Document::fragment(markup);

    let label = fragment.text().trim().to_string();
    if label.is_empty() {
        return None;
    }

    let image = fragment
        .first(&IMAGE)
        .and_then(|img| html::first_attr(img, &IMAGE_ATTRS))
        .map(canonical_image_url)
        .unwrap_or_default();

    Some(RewardItem { label, image })
}

/// Strip the `/revision/...` suffix wiki CDNs append for scaled thumbnails.
pub fn canonical_image_url(url: &str) -> String {
    match url.find("/revision") {
        Some(idx) => url[..idx].to_string(),
        None => url.to_string(),
    }
}
