// ABOUTME: Tag management for the problem catalogue
// ABOUTME: Types and storage for tags and their per-problem usage counters

pub mod storage;
pub mod types;

// Re-export main types
pub use storage::TagStorage;
pub use types::{ProblemTag, TagWithCount};
