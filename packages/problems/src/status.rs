// ABOUTME: Solve-status decoration for serialized problems
// ABOUTME: Reads the requester's profile blob for the matching scoring rule

use arbiter_accounts::UserProfile;
use arbiter_core::ContestRuleType;
use serde::Serialize;

use super::types::Problem;

/// A problem as served in listings and details: the record plus the
/// requester's solve status and, when tag ranking ran, the affinity score
#[derive(Debug, Clone, Serialize)]
pub struct ProblemListItem {
    #[serde(flatten)]
    pub problem: Problem,
    pub my_status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_score: Option<f64>,
}

impl ProblemListItem {
    /// Catalogue decoration: the blob is chosen by the problem's own rule
    /// type. Anonymous requesters always read as null.
    pub fn catalogue(
        profile: Option<&UserProfile>,
        problem: Problem,
        tag_score: Option<f64>,
    ) -> Self {
        let my_status = profile.and_then(|p| p.catalogue_status(problem.rule_type, problem.id));
        Self {
            problem,
            my_status,
            tag_score,
        }
    }

    /// Contest decoration: the blob is chosen by the contest's rule type
    /// and read from its contest_problems map
    pub fn contest(
        profile: Option<&UserProfile>,
        rule_type: ContestRuleType,
        problem: Problem,
    ) -> Self {
        let my_status = profile.and_then(|p| p.contest_status(rule_type, problem.id));
        Self {
            problem,
            my_status,
            tag_score: None,
        }
    }
}
