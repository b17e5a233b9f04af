use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use hoyocodes::config::AppConfig;
use hoyocodes::services::scheduler;
use hoyocodes::{db, routes, scrapers, AppState};
use mimalloc::MiMalloc;

// M-MIMALLOC-APP: Use mimalloc as global allocator for improved performance.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    hoyocodes::init_tracing();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    db::migrate(&pool).await?;

    let client = scrapers::build_client(&config)?;
    let registry = scrapers::registry(&client)?;
    tokio::spawn(scheduler::run(
        registry,
        pool.clone(),
        Duration::from_secs(config.scrape_interval_secs),
        config.scrape_on_startup,
    ));

    let host: std::net::IpAddr = config.host.parse().context("Invalid BACKEND_HOST")?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(host = %addr, "Starting code API server");

    let app = routes::router(AppState {
        db: pool,
        config,
    });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}
