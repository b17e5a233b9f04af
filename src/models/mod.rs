//! Database models and DTOs for all domain entities.

pub mod code;
pub mod game;
pub mod pagination;
