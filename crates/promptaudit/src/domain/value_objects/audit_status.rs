//! AuditStatus - Workflow state of an audit

use serde::{Deserialize, Serialize};

/// Workflow status of an audit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    #[default]
    Pending,
    Completed,
    InReview,
}

impl AuditStatus {
    pub const ALL: [AuditStatus; 3] = [
        AuditStatus::Pending,
        AuditStatus::Completed,
        AuditStatus::InReview,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AuditStatus::Pending => "Pending",
            AuditStatus::Completed => "Completed",
            AuditStatus::InReview => "In Review",
        }
    }
}

impl std::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditStatus::Pending => write!(f, "pending"),
            AuditStatus::Completed => write!(f, "completed"),
            AuditStatus::InReview => write!(f, "in_review"),
        }
    }
}

impl std::str::FromStr for AuditStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(AuditStatus::Pending),
            "completed" | "done" => Ok(AuditStatus::Completed),
            "in_review" | "in-review" | "review" => Ok(AuditStatus::InReview),
            _ => Err(format!("Unknown audit status: {}", s)),
        }
    }
}
