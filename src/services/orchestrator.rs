//! Scrape run orchestration.
//!
//! Runs every registered scraper concurrently on the current task and waits
//! for all of them. Each game is scraped and saved independently: a failed
//! fetch, parse, or save is recorded for that game only.

use futures::future::join_all;

use crate::errors::AppError;
use crate::scrapers::{GameScraper, ScrapeError};
use crate::services::codes::CodeSink;

/// Why a game's run did not complete.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("scrape failed: {0}")]
    Scrape(#[from] ScrapeError),

    #[error("save failed: {0}")]
    Persist(#[from] AppError),
}

/// Settled result of one game's scrape-and-save.
#[derive(Debug)]
pub struct GameOutcome {
    pub slug: String,
    pub name: String,
    /// Number of codes saved, or the reason the game failed.
    pub result: Result<usize, RunError>,
}

/// Per-game outcomes of a full run, in registration order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<GameOutcome>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Total codes saved across successful games.
    pub fn saved(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }
}

/// Scrape every game and forward each result list to `sink`.
pub async fn run_all(scrapers: &[Box<dyn GameScraper>], sink: &dyn CodeSink) -> RunReport {
    tracing::info!(games = scrapers.len(), "Starting scrape run");

    let runs = scrapers.iter().map(|scraper| async move {
        let result = scrape_and_save(scraper.as_ref(), sink).await;
        GameOutcome {
            slug: scraper.slug().to_string(),
            name: scraper.name().to_string(),
            result,
        }
    });
    let report = RunReport {
        outcomes: join_all(runs).await,
    };

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(count) => tracing::info!(
                game = %outcome.slug,
                count,
                "{}: Success ({count} codes)",
                outcome.name
            ),
            Err(e) => tracing::error!(
                game = %outcome.slug,
                error = %e,
                "{}: Scrape job failed",
                outcome.name
            ),
        }
    }

    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        saved = report.saved(),
        "Scrape run finished"
    );
    report
}

async fn scrape_and_save(
    scraper: &dyn GameScraper,
    sink: &dyn CodeSink,
) -> Result<usize, RunError> {
    tracing::debug!(game = scraper.slug(), "Scraping {}", scraper.name());
    let codes = scraper.scrape().await?;
    let saved = sink.save_codes(scraper.slug(), &codes).await?;
    Ok(saved)
}
