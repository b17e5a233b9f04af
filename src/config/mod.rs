use std::env;

/// Identifies the harvester to wiki operators.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Compatible; HoyoCodeBot/1.0)";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub scrape_interval_secs: u64,
    pub scrape_on_startup: bool,
    pub scrape_user_agent: String,
    pub fetch_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            scrape_interval_secs: positive_secs(env::var("SCRAPE_INTERVAL_SECS").ok(), 3600),
            scrape_on_startup: env::var("SCRAPE_ON_STARTUP")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            scrape_user_agent: env::var("SCRAPE_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            fetch_timeout_secs: positive_secs(env::var("FETCH_TIMEOUT_SECS").ok(), 30),
        })
    }
}

/// Parse a seconds value, falling back to `default` when missing, invalid or zero.
fn positive_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|s| s.trim().parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}
