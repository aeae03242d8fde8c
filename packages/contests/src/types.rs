// ABOUTME: Contest type definitions and access rules
// ABOUTME: Problem visibility and details permission are decided here

use arbiter_core::ContestRuleType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    pub id: i64,
    pub title: String,
    pub rule_type: ContestRuleType,
    pub real_time_rank: bool,
    pub visible: bool,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: String,
}

impl Contest {
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        now >= self.start_time
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_time
    }

    /// Invisible contests read as nonexistent to everyone but their author
    pub fn hidden_from(&self, user_id: Option<&str>) -> bool {
        !self.visible && user_id != Some(self.created_by.as_str())
    }

    /// Whether a requester may list this contest's problems at all.
    /// The author can always see their own contest; everyone else waits
    /// for the start time.
    pub fn can_view_problems(&self, user_id: Option<&str>, now: DateTime<Utc>) -> bool {
        if user_id == Some(self.created_by.as_str()) {
            return true;
        }
        self.visible && self.has_started(now)
    }

    /// Whether a requester gets full problem records rather than the safe
    /// summary. OI contests hide details while running unless the contest
    /// publishes a real-time rank.
    pub fn problem_details_permission(&self, user_id: Option<&str>, now: DateTime<Utc>) -> bool {
        if user_id == Some(self.created_by.as_str()) {
            return true;
        }
        match self.rule_type {
            ContestRuleType::Acm => true,
            ContestRuleType::Oi => self.real_time_rank || self.has_ended(now),
        }
    }
}
