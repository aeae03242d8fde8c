// ABOUTME: Problem type definitions
// ABOUTME: Full records, the safe contest summary, and listing filters

use arbiter_core::{Difficulty, ProblemRuleType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: i64,
    /// Human-facing identifier shown in URLs and listings ("A", "1001", ...)
    pub display_id: String,
    pub title: String,
    pub description: String,
    pub input_description: String,
    pub output_description: String,
    pub samples: Vec<Sample>,
    pub difficulty: Difficulty,
    pub rule_type: ProblemRuleType,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    pub visible: bool,
    pub contest_id: Option<i64>,
    pub created_by: String,
    pub submission_number: i64,
    pub accepted_number: i64,
    /// Per-status submission counts, shape owned by the judge pipeline
    pub statistic_info: serde_json::Value,
    pub create_time: DateTime<Utc>,
}

/// Safe view served when contest details permission is withheld:
/// no statement, no samples, no statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemSummary {
    pub id: i64,
    pub display_id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub rule_type: ProblemRuleType,
    pub tags: Vec<String>,
    pub contest_id: Option<i64>,
    pub create_time: DateTime<Utc>,
}

impl From<&Problem> for ProblemSummary {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id,
            display_id: problem.display_id.clone(),
            title: problem.title.clone(),
            difficulty: problem.difficulty,
            rule_type: problem.rule_type,
            tags: problem.tags.clone(),
            contest_id: problem.contest_id,
            create_time: problem.create_time,
        }
    }
}

/// Catalogue listing filters
#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    /// Case-insensitive substring over title or display_id
    pub keyword: Option<String>,
    pub difficulty: Option<Difficulty>,
}
