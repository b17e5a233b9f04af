//! Per-game code scrapers.
//!
//! Every game exposes the same capability through [`GameScraper`]; the
//! registry is an explicit list built by [`registry`].

pub mod games;
pub mod wiki;

use std::time::Duration;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::models::code::ScrapedCode;
use crate::models::game::Game;
use crate::scrapers::games::PROFILES;
use crate::scrapers::wiki::WikiScraper;

/// Errors raised while fetching or preparing a game's source page.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid noise pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A source of redemption codes for one game.
#[async_trait]
pub trait GameScraper: Send + Sync {
    /// Stable identifier used as the persistence key.
    fn slug(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Produce this run's codes for the game.
    async fn scrape(&self) -> Result<Vec<ScrapedCode>, ScrapeError>;
}

/// Build the HTTP client shared by all scrapers.
pub fn build_client(config: &AppConfig) -> Result<reqwest::Client, ScrapeError> {
    let client = reqwest::Client::builder()
        .user_agent(config.scrape_user_agent.as_str())
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .build()?;
    Ok(client)
}

/// Instantiate every registered game scraper.
pub fn registry(client: &reqwest::Client) -> Result<Vec<Box<dyn GameScraper>>, ScrapeError> {
    PROFILES
        .iter()
        .map(|profile| {
            WikiScraper::new(*profile, client.clone())
                .map(|scraper| Box::new(scraper) as Box<dyn GameScraper>)
        })
        .collect()
}

/// Identity of every registered game.
pub fn games() -> Vec<Game> {
    PROFILES
        .iter()
        .map(|profile| Game {
            slug: profile.slug.to_string(),
            name: profile.name.to_string(),
        })
        .collect()
}
