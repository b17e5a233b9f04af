//! Periodic scrape trigger.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::scrapers::GameScraper;
use crate::services::codes::CodeSink;
use crate::services::orchestrator;

/// Shortest accepted period; `tokio::time::interval` rejects zero.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Run the orchestrator every `period` (at least [`MIN_PERIOD`]), forever.
///
/// With `run_immediately` the first run starts right away; otherwise it
/// waits one full period. A run that overlaps the next tick delays it
/// instead of queueing a burst.
pub async fn run(
    scrapers: Vec<Box<dyn GameScraper>>,
    sink: impl CodeSink,
    period: Duration,
    run_immediately: bool,
) {
    let period = period.max(MIN_PERIOD);
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    if !run_immediately {
        ticker.tick().await;
    }

    tracing::info!(
        period_secs = period.as_secs(),
        games = scrapers.len(),
        "Scrape scheduler started"
    );

    loop {
        ticker.tick().await;
        orchestrator::run_all(&scrapers, &sink).await;
    }
}
