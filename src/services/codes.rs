//! Code persistence and listing.
//!
//! Scraped codes are upserted by `(game_slug, code)` in fixed-size batches,
//! each batch in its own transaction. Rewards and duration are stored as JSON
//! text and decoded again when listed.

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::code::{GameCode, GameCodeView, ScrapedCode};
use crate::models::pagination::{PagedResult, Pagination, Sort};

/// Upserts per transaction.
pub const BATCH_SIZE: usize = 50;

/// Redemption page prefix per game; the code is appended verbatim.
const REDEMPTION_BASE_URLS: [(&str, &str); 3] = [
    ("genshin", "https://genshin.hoyoverse.com/en/gift?code="),
    ("hsr", "https://hsr.hoyoverse.com/gift?code="),
    ("zzz", "https://zenless.hoyoverse.com/redemption?code="),
];

/// Destination for a game's scraped codes.
#[async_trait]
pub trait CodeSink: Send + Sync {
    /// Persist `codes` for `game_slug`, returning how many were written.
    async fn save_codes(&self, game_slug: &str, codes: &[ScrapedCode]) -> Result<usize, AppError>;
}

#[async_trait]
impl CodeSink for PgPool {
    async fn save_codes(&self, game_slug: &str, codes: &[ScrapedCode]) -> Result<usize, AppError> {
        save_codes(self, game_slug, codes).await
    }
}

/// Direct redemption link for a code, when the game has a known redemption page.
pub fn redemption_url(game_slug: &str, code: &str) -> Option<String> {
    REDEMPTION_BASE_URLS
        .iter()
        .find(|(slug, _)| *slug == game_slug)
        .map(|(_, base)| format!("{base}{code}"))
}

/// Upsert a game's codes, refreshing every mutable column and `last_checked`.
///
/// An empty list is a no-op.
pub async fn save_codes(
    pool: &PgPool,
    game_slug: &str,
    codes: &[ScrapedCode],
) -> Result<usize, AppError> {
    if codes.is_empty() {
        return Ok(0);
    }

    for batch in codes.chunks(BATCH_SIZE) {
        let mut tx = pool.begin().await?;

        for item in batch {
            sqlx::query(
                r#"
                INSERT INTO game_codes (
                    game_slug, code, server, rewards, duration, status,
                    last_checked, redemption_url
                )
                VALUES ($1, $2, $3, $4, $5, $6, NOW(), $7)
                ON CONFLICT (game_slug, code) DO UPDATE SET
                    server = EXCLUDED.server,
                    rewards = EXCLUDED.rewards,
                    duration = EXCLUDED.duration,
                    status = EXCLUDED.status,
                    last_checked = NOW(),
                    redemption_url = EXCLUDED.redemption_url
                "#,
            )
            .bind(game_slug)
            .bind(&item.code)
            .bind(&item.server)
            .bind(serde_json::to_string(&item.rewards)?)
            .bind(serde_json::to_string(&item.duration)?)
            .bind(item.status)
            .bind(redemption_url(game_slug, &item.code))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
    }

    tracing::info!(game = game_slug, count = codes.len(), "Saved codes");
    Ok(codes.len())
}

/// Filters for listing codes.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CodeFilters {
    pub game: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl CodeFilters {
    /// Game slug filter; `all` or an empty value disables it.
    pub fn game_filter(&self) -> Option<String> {
        self.game
            .as_deref()
            .map(|g| sanitize(g, |c| c.is_ascii_alphanumeric() || c == '_' || c == '-'))
            .filter(|g| !g.is_empty() && !g.eq_ignore_ascii_case("all"))
    }

    /// Status filter; `all` or an empty value disables it.
    pub fn status_filter(&self) -> Option<String> {
        self.status
            .as_deref()
            .map(|s| sanitize(s, |c| c.is_ascii_alphabetic()))
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
    }

    /// `ILIKE` pattern for free-text search over codes and rewards.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{s}%"))
    }

    pub fn sort(&self) -> Sort {
        Sort::resolve(self.sort_by.as_deref(), self.order.as_deref())
    }

    /// WHERE clause with `$n` placeholders, and the values to bind in order.
    pub fn where_clause(&self) -> (String, Vec<String>) {
        let mut conditions: Vec<String> = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(game) = self.game_filter() {
            binds.push(game);
            conditions.push(format!("lower(game_slug) = lower(${})", binds.len()));
        }
        if let Some(status) = self.status_filter() {
            binds.push(status);
            conditions.push(format!("lower(status::text) = lower(${})", binds.len()));
        }
        if let Some(pattern) = self.search_pattern() {
            binds.push(pattern);
            let n = binds.len();
            conditions.push(format!("(code ILIKE ${n} OR rewards ILIKE ${n})"));
        }

        let clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        (clause, binds)
    }
}

fn sanitize(value: &str, keep: impl Fn(char) -> bool) -> String {
    value.chars().filter(|c| keep(*c)).collect()
}

/// List stored codes with filters, sorting, and pagination.
pub async fn list(
    pool: &PgPool,
    filters: &CodeFilters,
    pagination: &Pagination,
) -> Result<PagedResult<GameCodeView>, AppError> {
    let (where_clause, binds) = filters.where_clause();
    let sort = filters.sort();

    let count_sql = format!("SELECT COUNT(*) FROM game_codes {where_clause}");
    let data_sql = format!(
        "SELECT id, game_slug, code, server, rewards, duration, status, redemption_url, \
         last_checked, created_at \
         FROM game_codes {where_clause} {} \
         LIMIT {} OFFSET {}",
        sort.order_by_clause(),
        pagination.limit(),
        pagination.offset()
    );

    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    let mut data_query = sqlx::query_as::<_, GameCode>(&data_sql);

    for value in &binds {
        count_query = count_query.bind(value);
        data_query = data_query.bind(value);
    }

    let total = count_query.fetch_one(pool).await?;
    let rows = data_query.fetch_all(pool).await?;
    let items = rows.into_iter().map(GameCodeView::from).collect();

    Ok(PagedResult::new(items, total, pagination, sort))
}
