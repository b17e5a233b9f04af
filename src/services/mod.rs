//! Business logic services.

pub mod codes;
pub mod orchestrator;
pub mod scheduler;
