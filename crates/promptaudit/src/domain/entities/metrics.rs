//! MetricsSnapshot - Aggregate counters for the dashboard

use serde::{Deserialize, Serialize};

use crate::domain::{AuditItem, AuditStatus, Prompt, PromptStatus};

/// Average quality reported by the load-time snapshot
pub const SNAPSHOT_AVERAGE_QUALITY: f64 = 8.2;

/// Aggregate counters over the prompt and audit collections
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricsSnapshot {
    pub total_prompts: usize,
    pub approved_prompts: usize,
    /// Prompts in review
    pub pending_prompts: usize,
    /// Mean quality score, when one is known
    pub average_quality: Option<f64>,
    pub completed_audits: usize,
    pub pending_audits: usize,
}

impl MetricsSnapshot {
    /// Count over the given collections with a caller-supplied average
    pub fn from_collections(
        prompts: &[Prompt],
        audits: &[AuditItem],
        average_quality: Option<f64>,
    ) -> Self {
        let count_prompts =
            |status: PromptStatus| prompts.iter().filter(|p| p.status == status).count();
        let count_audits =
            |status: AuditStatus| audits.iter().filter(|a| a.status == status).count();

        Self {
            total_prompts: prompts.len(),
            approved_prompts: count_prompts(PromptStatus::Approved),
            pending_prompts: count_prompts(PromptStatus::InReview),
            average_quality,
            completed_audits: count_audits(AuditStatus::Completed),
            pending_audits: count_audits(AuditStatus::Pending),
        }
    }

    /// Load-time snapshot: counts plus the fixed average quality
    pub fn snapshot(prompts: &[Prompt], audits: &[AuditItem]) -> Self {
        Self::from_collections(prompts, audits, Some(SNAPSHOT_AVERAGE_QUALITY))
    }
}
