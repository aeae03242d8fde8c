// ABOUTME: User and profile type definitions
// ABOUTME: Solve-status blobs keyed by problem id, one blob per scoring rule

use std::collections::HashMap;

use arbiter_core::{ContestRuleType, ProblemRuleType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub is_admin: bool,
}

/// One entry per problem the user has submitted to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEntry {
    pub status: Option<i64>,
}

/// The `{"problems": {...}, "contest_problems": {...}}` blob stored per rule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusBlob {
    #[serde(default)]
    pub problems: HashMap<String, StatusEntry>,
    #[serde(default)]
    pub contest_problems: HashMap<String, StatusEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub acm_problems_status: StatusBlob,
    pub oi_problems_status: StatusBlob,
}

impl UserProfile {
    fn blob_for_problem_rule(&self, rule: ProblemRuleType) -> &StatusBlob {
        match rule {
            ProblemRuleType::Acm => &self.acm_problems_status,
            ProblemRuleType::Oi => &self.oi_problems_status,
        }
    }

    fn blob_for_contest_rule(&self, rule: ContestRuleType) -> &StatusBlob {
        match rule {
            ContestRuleType::Acm => &self.acm_problems_status,
            ContestRuleType::Oi => &self.oi_problems_status,
        }
    }

    /// Solve status of a catalogue problem under its scoring rule
    pub fn catalogue_status(&self, rule: ProblemRuleType, problem_id: i64) -> Option<i64> {
        self.blob_for_problem_rule(rule)
            .problems
            .get(&problem_id.to_string())
            .and_then(|entry| entry.status)
    }

    /// Solve status of a contest problem, keyed by the contest's rule
    pub fn contest_status(&self, rule: ContestRuleType, problem_id: i64) -> Option<i64> {
        self.blob_for_contest_rule(rule)
            .contest_problems
            .get(&problem_id.to_string())
            .and_then(|entry| entry.status)
    }
}
