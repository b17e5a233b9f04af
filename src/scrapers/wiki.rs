//! Scraper for fandom wiki code tables.
//!
//! All tracked wikis lay codes out the same way: `table.wikitable` with
//! code, server, rewards and duration columns. Only the page URL and the
//! code-cell noise differ per game.

use std::sync::LazyLock;

use async_trait::async_trait;

use crate::models::code::ScrapedCode;
use crate::parsers::code::CodeExtractor;
use crate::parsers::html::{selector, Document, Selector};
use crate::parsers::parse_row;
use crate::scrapers::games::WikiProfile;
use crate::scrapers::{GameScraper, ScrapeError};

static DATA_TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table.wikitable"));

/// Scrapes one game's wiki page.
pub struct WikiScraper {
    profile: WikiProfile,
    client: reqwest::Client,
    codes: CodeExtractor,
}

impl WikiScraper {
    pub fn new(profile: WikiProfile, client: reqwest::Client) -> Result<Self, ScrapeError> {
        Ok(Self {
            codes: CodeExtractor::with_noise(profile.noise)?,
            profile,
            client,
        })
    }

    /// Download the page body; non-success statuses are errors.
    async fn fetch(&self) -> Result<String, ScrapeError> {
        let body = self
            .client
            .get(self.profile.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }

    /// Extract every code from a downloaded page.
    pub fn parse_page(&self, html: &str) -> Vec<ScrapedCode> {
        let document = Document::parse(html);
        document
            .table_rows(&DATA_TABLE)
            .iter()
            .flat_map(|cells| parse_row(cells, &self.codes))
            .collect()
    }
}

#[async_trait]
impl GameScraper for WikiScraper {
    fn slug(&self) -> &str {
        self.profile.slug
    }

    fn name(&self) -> &str {
        self.profile.name
    }

    /// Fetch failures are logged and yield no codes, so one wiki outage
    /// never surfaces as an error.
    async fn scrape(&self) -> Result<Vec<ScrapedCode>, ScrapeError> {
        let html = match self.fetch().await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(
                    game = self.profile.slug,
                    url = self.profile.url,
                    error = %e,
                    "Failed to fetch code page"
                );
                return Ok(Vec::new());
            }
        };

        let codes = self.parse_page(&html);
        if codes.is_empty() {
            tracing::warn!(game = self.profile.slug, "No codes found on page");
        } else {
            tracing::debug!(game = self.profile.slug, count = codes.len(), "Parsed codes");
        }
        Ok(codes)
    }
}
