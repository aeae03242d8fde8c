// ABOUTME: Contest records and access rules
// ABOUTME: Gates who may list contest problems and who sees full details

pub mod storage;
pub mod types;

// Re-export main types
pub use storage::ContestStorage;
pub use types::Contest;
