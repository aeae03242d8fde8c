// ABOUTME: Core types and utilities for Arbiter
// ABOUTME: Foundational package providing shared enums and constants

pub mod constants;
pub mod types;

// Re-export main types
pub use constants::{arbiter_dir, database_file};
pub use types::{ContestRuleType, Difficulty, ProblemRuleType};
