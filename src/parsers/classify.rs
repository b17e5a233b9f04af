//! Active/Expired classification of a table row.

use crate::models::code::{CodeStatus, DurationEntry};

/// Classify a row from its duration entries.
///
/// A row is expired only when a label says so; dates are not compared to
/// the current time, so a past date under a neutral label stays Active.
pub fn classify(duration: &[DurationEntry]) -> CodeStatus {
    if duration
        .iter()
        .any(|entry| entry.label.to_lowercase().contains("expired"))
    {
        CodeStatus::Expired
    } else {
        CodeStatus::Active
    }
}
