//! AuditItem - Scored quality review of a prompt
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{require_non_empty, DomainError};
use crate::domain::{AuditStatus, Priority};

/// The five fixed review criteria
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Clarity,
    Specificity,
    Context,
    Structure,
    Effectiveness,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Clarity,
        Criterion::Specificity,
        Criterion::Context,
        Criterion::Structure,
        Criterion::Effectiveness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Clarity => "Clarity",
            Criterion::Specificity => "Specificity",
            Criterion::Context => "Context",
            Criterion::Structure => "Structure",
            Criterion::Effectiveness => "Effectiveness",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-criterion sub-scores of an audit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct AuditScores {
    pub clarity: f64,
    pub specificity: f64,
    pub context: f64,
    pub structure: f64,
    pub effectiveness: f64,
}

impl AuditScores {
    /// Score for a single criterion
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Clarity => self.clarity,
            Criterion::Specificity => self.specificity,
            Criterion::Context => self.context,
            Criterion::Structure => self.structure,
            Criterion::Effectiveness => self.effectiveness,
        }
    }

    /// Criteria and scores in display order
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// AuditItem - A quality review of exactly one prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditItem {
    pub id: Uuid,
    /// Non-owning reference; the prompt may not exist
    pub prompt_id: Uuid,
    pub auditor: String,
    pub audited_at: DateTime<Utc>,
    /// Overall score, 0-10 in practice (not enforced)
    pub score: f64,
    pub scores: AuditScores,
    pub comments: String,
    pub suggestions: Vec<String>,
    pub status: AuditStatus,
    pub priority: Priority,
}

/// Draft of an audit before id and timestamp are assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAudit {
    pub prompt_id: Uuid,
    pub auditor: String,
    pub score: f64,
    pub scores: AuditScores,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub status: AuditStatus,
    #[serde(default)]
    pub priority: Priority,
}

impl NewAudit {
    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_empty("auditor", &self.auditor)?;
        Ok(())
    }
}

impl AuditItem {
    /// Create a new audit stamped at `now`
    ///
    /// The referenced prompt is not checked here.
    pub fn create(draft: NewAudit, now: DateTime<Utc>) -> Result<Self, DomainError> {
        draft.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            prompt_id: draft.prompt_id,
            auditor: draft.auditor,
            audited_at: now,
            score: draft.score,
            scores: draft.scores,
            comments: draft.comments,
            suggestions: draft.suggestions,
            status: draft.status,
            priority: draft.priority,
        })
    }
}
