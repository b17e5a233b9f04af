//! Redemption code extraction from the code column of a wiki table.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsers::html::{self, Cell, TextRules};

/// Shorter tokens are stray fragments, not codes. Counted in characters,
/// so a non-ASCII token needs five scalar values regardless of encoding.
const MIN_CODE_LEN: usize = 5;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("bracket pattern"));

const CODE_CELL_RULES: TextRules<'static> = TextRules {
    skip_tags: &["sup"],
    skip_classes: &[],
    break_before: &[],
};

/// Pulls one or more codes out of a code cell.
///
/// Footnotes, bracketed notes and non-breaking spaces are stripped, along
/// with any per-wiki noise phrases (button captions rendered inside the cell).
#[derive(Debug, Clone, Default)]
pub struct CodeExtractor {
    noise: Option<Regex>,
}

impl CodeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor that also removes `phrases`, matched case-insensitively.
    pub fn with_noise(phrases: &[&str]) -> Result<Self, regex::Error> {
        if phrases.is_empty() {
            return Ok(Self::new());
        }
        let alternation = phrases
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        Ok(Self {
            noise: Some(Regex::new(&format!("(?i){alternation}"))?),
        })
    }

    /// Extract codes from a cell.
    pub fn extract(&self, cell: Cell<'_>) -> Vec<String> {
        self.extract_text(&html::render_text(cell, &CODE_CELL_RULES))
    }

    /// Extract codes from already-rendered cell text.
    pub fn extract_text(&self, text: &str) -> Vec<String> {
        let text = match &self.noise {
            Some(noise) => noise.replace_all(text, ""),
            None => text.into(),
        };
        let text = BRACKETED.replace_all(&text, "").replace('\u{00A0}', " ");

        text.split_whitespace()
            .map(str::trim)
            .filter(|token| token.chars().count() >= MIN_CODE_LEN)
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::html::with_cell;

    fn extract(markup: &str) -> Vec<String> {
        with_cell(markup, |cell| CodeExtractor::new().extract(cell))
    }

    #[test]
    fn strips_bracket_note_and_short_tokens() {
        assert_eq!(extract("ABC123[1]<br>XY"), vec!["ABC123"]);
    }

    #[test]
    fn drops_superscript_footnotes() {
        assert_eq!(
            extract(r##"<b>GENSHINGIFT</b><sup class="reference"><a href="#cite">[2]</a></sup>"##),
            vec!["GENSHINGIFT"]
        );
    }

    #[test]
    fn splits_multiple_codes() {
        assert_eq!(
            extract("<code>STARRAILGIFT</code><br><code>HSRVER10XEDLFE</code>\n  <code>LAUNCHDAY5</code>"),
            vec!["STARRAILGIFT", "HSRVER10XEDLFE", "LAUNCHDAY5"]
        );
    }

    #[test]
    fn non_breaking_space_separates_codes() {
        assert_eq!(
            extract("FIRSTCODE&nbsp;SECONDCODE"),
            vec!["FIRSTCODE", "SECONDCODE"]
        );
    }

    #[test]
    fn length_boundary_is_five_characters() {
        assert_eq!(extract("ABCD ABCDE"), vec!["ABCDE"]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(extract("ÉTÉ24 ÉTÉ2"), vec!["ÉTÉ24"]);
        assert!(extract("🎁🎁🎁🎁").is_empty());
        assert_eq!(extract("🎁🎁🎁🎁🎁"), vec!["🎁🎁🎁🎁🎁"]);
    }

    #[test]
    fn no_charset_validation() {
        assert_eq!(extract("code-with_punct!"), vec!["code-with_punct!"]);
    }

    #[test]
    fn empty_cell_yields_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("<sup>[3]</sup> — ").is_empty());
    }

    #[test]
    fn noise_phrases_removed_case_insensitively() {
        let extractor = CodeExtractor::with_noise(&["Quick Redeem"]).unwrap();
        let codes = with_cell(
            r#"<code>SPRINGSALE</code> <a class="button">QUICK REDEEM</a>"#,
            |cell| extractor.extract(cell),
        );
        assert_eq!(codes, vec!["SPRINGSALE"]);
    }

    #[test]
    fn noise_with_regex_metacharacters_is_literal() {
        let extractor = CodeExtractor::with_noise(&["(copy)"]).unwrap();
        assert_eq!(extractor.extract_text("MAGICCODE(copy)"), vec!["MAGICCODE"]);
    }
}
