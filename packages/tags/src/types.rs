// ABOUTME: Tag type definitions
// ABOUTME: Tags and the listing row annotated with its problem count

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemTag {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Listing row: only tags attached to at least one problem are listed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagWithCount {
    pub id: i64,
    pub name: String,
    pub problem_count: i64,
}
