// ABOUTME: User and profile records for Arbiter
// ABOUTME: Profiles carry the per-rule solve-status blobs read by the catalogue

pub mod storage;
pub mod types;

// Re-export main types
pub use storage::ProfileStorage;
pub use types::{StatusBlob, StatusEntry, User, UserProfile};
