//! Game identity exposed by the game listing endpoint.

use serde::Serialize;

/// A tracked game, identified by its slug.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Game {
    pub slug: String,
    pub name: String,
}
