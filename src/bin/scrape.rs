//! One-shot scrape of every registered game, outside the server's schedule.
//!
//! Usage: `cargo run --bin scrape`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env).

use anyhow::Context;
use hoyocodes::config::AppConfig;
use hoyocodes::services::orchestrator;
use hoyocodes::{db, scrapers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    hoyocodes::init_tracing();

    let config = AppConfig::from_env().context("DATABASE_URL must be set")?;
    let pool = db::create_pool(&config.database_url, 5).await?;
    db::migrate(&pool).await?;

    let client = scrapers::build_client(&config)?;
    let registry = scrapers::registry(&client)?;
    let report = orchestrator::run_all(&registry, &pool).await;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(count) => println!("[done] {}: {count} codes", outcome.name),
            Err(e) => println!("[fail] {}: {e}", outcome.name),
        }
    }

    if report.succeeded() == 0 && !report.outcomes.is_empty() {
        anyhow::bail!("every game failed to scrape");
    }
    Ok(())
}
