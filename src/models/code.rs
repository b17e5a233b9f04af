//! Redemption code model: scraped records, stored rows, and query DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// -- Enums matching PostgreSQL --

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "code_status")]
pub enum CodeStatus {
    Active,
    Expired,
}

impl std::fmt::Display for CodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

// -- Parsed sub-structures --

/// One reward line from a code's reward cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardItem {
    pub label: String,
    /// Full-resolution image URL, or empty when the line has no image.
    pub image: String,
}

/// One labeled validity statement from a code's duration cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DurationEntry {
    pub label: String,
    pub value: String,
}

// -- Scraped record --

/// A code extracted from a wiki table row, ready for persistence.
///
/// Built fresh on every scrape run; rows listing several codes produce one
/// record per code sharing the same server, rewards, duration and status.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedCode {
    pub code: String,
    pub server: String,
    pub rewards: Vec<RewardItem>,
    pub duration: Vec<DurationEntry>,
    pub status: CodeStatus,
}

// -- Stored row --

/// Row of the `game_codes` table.
///
/// `rewards` and `duration` hold the JSON text written by the persistence layer.
#[derive(Debug, Clone, FromRow)]
pub struct GameCode {
    pub id: i64,
    pub game_slug: String,
    pub code: String,
    pub server: String,
    pub rewards: String,
    pub duration: String,
    pub status: CodeStatus,
    pub redemption_url: Option<String>,
    pub last_checked: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// API representation of a stored code with its sub-structures decoded.
#[derive(Debug, Clone, Serialize)]
pub struct GameCodeView {
    pub id: i64,
    pub game_slug: String,
    pub code: String,
    pub server: String,
    pub rewards: Vec<RewardItem>,
    pub duration: Vec<DurationEntry>,
    pub status: CodeStatus,
    pub redemption_url: Option<String>,
    pub last_checked: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<GameCode> for GameCodeView {
    fn from(row: GameCode) -> Self {
        // Text that no longer decodes is surfaced as a single raw entry.
        let rewards = serde_json::from_str(&row.rewards).unwrap_or_else(|_| {
            vec![RewardItem {
                label: row.rewards.clone(),
                image: String::new(),
            }]
        });
        let duration = serde_json::from_str(&row.duration).unwrap_or_else(|_| {
            vec![DurationEntry {
                label: "Info".to_string(),
                value: row.duration.clone(),
            }]
        });

        Self {
            id: row.id,
            game_slug: row.game_slug,
            code: row.code,
            server: row.server,
            rewards,
            duration,
            status: row.status,
            redemption_url: row.redemption_url,
            last_checked: row.last_checked,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rewards: &str, duration: &str) -> GameCode {
        GameCode {
            id: 7,
            game_slug: "genshin".to_string(),
            code: "GENSHINGIFT".to_string(),
            server: "All".to_string(),
            rewards: rewards.to_string(),
            duration: duration.to_string(),
            status: CodeStatus::Active,
            redemption_url: None,
            last_checked: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn view_decodes_stored_json() {
        let view = GameCodeView::from(row(
            r#"[{"label":"Primogem ×60","image":"https://img/Primogem.png"}]"#,
            r#"[{"label":"Discovered","value":"July 2, 2025"}]"#,
        ));
        assert_eq!(view.rewards.len(), 1);
        assert_eq!(view.rewards[0].label, "Primogem ×60");
        assert_eq!(view.duration[0].value, "July 2, 2025");
    }

    #[test]
    fn view_falls_back_on_raw_rewards() {
        let view = GameCodeView::from(row("Primogem x60", "[]"));
        assert_eq!(
            view.rewards,
            vec![RewardItem {
                label: "Primogem x60".to_string(),
                image: String::new(),
            }]
        );
        assert!(view.duration.is_empty());
    }

    #[test]
    fn view_falls_back_on_raw_duration() {
        let view = GameCodeView::from(row("[]", "until further notice"));
        assert_eq!(view.duration.len(), 1);
        assert_eq!(view.duration[0].label, "Info");
        assert_eq!(view.duration[0].value, "until further notice");
    }

    #[test]
    fn status_serializes_as_variant_name() {
        assert_eq!(serde_json::to_value(CodeStatus::Expired).unwrap(), "Expired");
        assert_eq!(CodeStatus::Active.to_string(), "Active");
    }
}
