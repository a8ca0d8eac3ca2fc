//! PromptStatus - Editorial lifecycle of a prompt

use serde::{Deserialize, Serialize};

/// Lifecycle status of a prompt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PromptStatus {
    #[default]
    Draft,
    InReview,
    Approved,
    Rejected,
}

impl PromptStatus {
    /// Every status, in workflow order
    pub const ALL: [PromptStatus; 4] = [
        PromptStatus::Draft,
        PromptStatus::InReview,
        PromptStatus::Approved,
        PromptStatus::Rejected,
    ];

    /// Human-readable label for views
    pub fn label(&self) -> &'static str {
        match self {
            PromptStatus::Draft => "Draft",
            PromptStatus::InReview => "In Review",
            PromptStatus::Approved => "Approved",
            PromptStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for PromptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptStatus::Draft => write!(f, "draft"),
            PromptStatus::InReview => write!(f, "in_review"),
            PromptStatus::Approved => write!(f, "approved"),
            PromptStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for PromptStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PromptStatus::Draft),
            "in_review" | "in-review" | "review" => Ok(PromptStatus::InReview),
            "approved" => Ok(PromptStatus::Approved),
            "rejected" => Ok(PromptStatus::Rejected),
            _ => Err(format!("Unknown prompt status: {}", s)),
        }
    }
}
