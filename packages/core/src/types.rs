// ABOUTME: Shared enum types for the problem catalogue
// ABOUTME: Rule types and difficulty grades stored as TEXT columns

use serde::{Deserialize, Serialize};

/// Scoring rule a problem is judged under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProblemRuleType {
    Acm,
    Oi,
}

impl ProblemRuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acm => "ACM",
            Self::Oi => "OI",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACM" => Some(Self::Acm),
            "OI" => Some(Self::Oi),
            _ => None,
        }
    }
}

/// Scoring rule a contest runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContestRuleType {
    Acm,
    Oi,
}

impl ContestRuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acm => "ACM",
            Self::Oi => "OI",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACM" => Some(Self::Acm),
            "OI" => Some(Self::Oi),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    Mid,
    High,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mid => "Mid",
            Self::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Self::Low),
            "Mid" => Some(Self::Mid),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}
