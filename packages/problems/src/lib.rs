// ABOUTME: Problem catalogue domain package
// ABOUTME: Records, catalogue/contest queries, ranking, status decoration, DbState

pub mod db;
pub mod pagination;
pub mod ranking;
pub mod status;
pub mod storage;
pub mod types;

// Re-export main types
pub use db::DbState;
pub use pagination::{Cut, PaginatedData};
pub use ranking::{rank_by_tag_affinity, ScoredProblem};
pub use status::ProblemListItem;
pub use storage::ProblemStorage;
pub use types::{Problem, ProblemFilter, ProblemSummary, Sample};
