//! Derived Projections
//!
//! Read-only views computed from the live collections: metrics,
//! criterion averages, the activity feed and category options.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    AuditItem, AuditScores, AuditStatus, Category, Criterion, MetricsSnapshot, Prompt,
    PromptStatus, Selection,
};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Metrics recomputed from the current collections
///
/// Average quality is the mean overall audit score, rounded to one decimal;
/// `None` when there are no audits.
pub fn live_metrics(prompts: &[Prompt], audits: &[AuditItem]) -> MetricsSnapshot {
    let average = mean(audits.iter().map(|a| a.score)).map(round1);
    MetricsSnapshot::from_collections(prompts, audits, average)
}

/// Mean sub-score per criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionAverages {
    pub averages: AuditScores,
    pub sample_size: usize,
}

impl CriterionAverages {
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        self.averages.iter()
    }
}

/// Per-criterion averages over all audits, `None` when there are none
pub fn criterion_averages(audits: &[AuditItem]) -> Option<CriterionAverages> {
    if audits.is_empty() {
        return None;
    }
    let avg = |criterion: Criterion| {
        mean(audits.iter().map(|a| a.scores.get(criterion)))
            .map(round1)
            .unwrap_or_default()
    };
    Some(CriterionAverages {
        averages: AuditScores {
            clarity: avg(Criterion::Clarity),
            specificity: avg(Criterion::Specificity),
            context: avg(Criterion::Context),
            structure: avg(Criterion::Structure),
            effectiveness: avg(Criterion::Effectiveness),
        },
        sample_size: audits.len(),
    })
}

/// What happened in an activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    PromptCreated,
    ReviewRequested,
    PromptApproved,
    PromptRejected,
    AuditRecorded,
    AuditCompleted,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::PromptCreated => "New prompt created",
            ActivityKind::ReviewRequested => "Review requested",
            ActivityKind::PromptApproved => "Prompt approved",
            ActivityKind::PromptRejected => "Prompt rejected",
            ActivityKind::AuditRecorded => "Audit recorded",
            ActivityKind::AuditCompleted => "Audit completed",
        }
    }
}

/// One row of the recent activity feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub actor: String,
    /// Title of the prompt involved, if it still exists
    pub subject: Option<String>,
    pub at: DateTime<Utc>,
}

/// Newest events across both collections, at most `limit`
pub fn recent_activity(
    prompts: &[Prompt],
    audits: &[AuditItem],
    limit: usize,
) -> Vec<ActivityEntry> {
    let titles: HashMap<Uuid, &str> = prompts.iter().map(|p| (p.id, p.title.as_str())).collect();

    let prompt_events = prompts.iter().map(|p| {
        let (kind, at) = match p.status {
            PromptStatus::Draft => (ActivityKind::PromptCreated, p.created_at),
            PromptStatus::InReview => (ActivityKind::ReviewRequested, p.updated_at),
            PromptStatus::Approved => (ActivityKind::PromptApproved, p.updated_at),
            PromptStatus::Rejected => (ActivityKind::PromptRejected, p.updated_at),
        };
        ActivityEntry {
            kind,
            actor: p.author.clone(),
            subject: Some(p.title.clone()),
            at,
        }
    });

    let audit_events = audits.iter().map(|a| ActivityEntry {
        kind: if a.status == AuditStatus::Completed {
            ActivityKind::AuditCompleted
        } else {
            ActivityKind::AuditRecorded
        },
        actor: a.auditor.clone(),
        subject: titles.get(&a.prompt_id).map(|t| t.to_string()),
        at: a.audited_at,
    });

    let mut entries: Vec<_> = prompt_events.chain(audit_events).collect();
    entries.sort_by(|a, b| b.at.cmp(&a.at));
    entries.truncate(limit);
    entries
}

/// Category selector options: `All`, then each label in first-seen order
pub fn category_options(prompts: &[Prompt]) -> Vec<Selection<Category>> {
    let mut options = vec![Selection::All];
    for prompt in prompts {
        let option = Selection::Only(prompt.category.clone());
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options
}

/// Split comma-separated tag input, trimming and dropping empties
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use chrono::Duration;

    fn prompt(title: &str, category: &str, status: PromptStatus, at: DateTime<Utc>) -> Prompt {
        Prompt {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: String::new(),
            category: Category::new(category),
            author: "Ana Silva".to_string(),
            created_at: at,
            updated_at: at,
            status,
            version: 1,
            tags: vec![],
        }
    }

    fn audit(prompt_id: Uuid, score: f64, status: AuditStatus, at: DateTime<Utc>) -> AuditItem {
        AuditItem {
            id: Uuid::new_v4(),
            prompt_id,
            auditor: "Bruno Costa".to_string(),
            audited_at: at,
            score,
            scores: AuditScores {
                clarity: score,
                specificity: score - 1.0,
                context: score,
                structure: score,
                effectiveness: score,
            },
            comments: String::new(),
            suggestions: vec![],
            status,
            priority: Priority::High,
        }
    }

    #[test]
    fn test_metrics_count_approved() {
        let now = Utc::now();
        let statuses = [
            PromptStatus::Approved,
            PromptStatus::Draft,
            PromptStatus::Approved,
            PromptStatus::InReview,
            PromptStatus::Rejected,
            PromptStatus::Approved,
            PromptStatus::Draft,
            PromptStatus::InReview,
            PromptStatus::Draft,
            PromptStatus::Rejected,
            PromptStatus::Draft,
            PromptStatus::Draft,
        ];
        let prompts: Vec<_> = statuses
            .iter()
            .map(|s| prompt("p", "Marketing", *s, now))
            .collect();
        let metrics = MetricsSnapshot::snapshot(&prompts, &[]);
        assert_eq!(metrics.total_prompts, 12);
        assert_eq!(metrics.approved_prompts, 3);
        assert_eq!(metrics.pending_prompts, 2);
    }

    #[test]
    fn test_live_metrics_average_scores() {
        let now = Utc::now();
        let p = prompt("p", "Marketing", PromptStatus::Draft, now);
        let audits = vec![
            audit(p.id, 7.0, AuditStatus::Completed, now),
            audit(p.id, 8.5, AuditStatus::Pending, now),
            audit(p.id, 9.0, AuditStatus::Pending, now),
        ];
        let metrics = live_metrics(std::slice::from_ref(&p), &audits);
        assert_eq!(metrics.average_quality, Some(8.2));
        assert_eq!(metrics.completed_audits, 1);
        assert_eq!(metrics.pending_audits, 2);
        assert_eq!(live_metrics(&[], &[]).average_quality, None);
    }

    #[test]
    fn test_criterion_averages() {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let audits = vec![
            audit(id, 8.0, AuditStatus::Completed, now),
            audit(id, 9.0, AuditStatus::Completed, now),
        ];
        let averages = criterion_averages(&audits).unwrap();
        assert_eq!(averages.sample_size, 2);
        assert_eq!(averages.averages.clarity, 8.5);
        assert_eq!(averages.averages.specificity, 7.5);
        assert!(criterion_averages(&[]).is_none());
    }

    #[test]
    fn test_recent_activity_is_newest_first_and_limited() {
        let now = Utc::now();
        let old = prompt("Old", "Marketing", PromptStatus::Draft, now - Duration::hours(3));
        let approved = prompt("Approved", "Marketing", PromptStatus::Approved, now - Duration::hours(1));
        let audits = vec![
            audit(approved.id, 8.0, AuditStatus::Completed, now - Duration::minutes(15)),
            audit(Uuid::new_v4(), 8.0, AuditStatus::Pending, now - Duration::hours(2)),
        ];
        let feed = recent_activity(&[old, approved], &audits, 3);
        let kinds: Vec<_> = feed.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [
                ActivityKind::AuditCompleted,
                ActivityKind::PromptApproved,
                ActivityKind::AuditRecorded
            ]
        );
        assert_eq!(feed[0].subject.as_deref(), Some("Approved"));
        assert_eq!(feed[2].subject, None);
    }

    #[test]
    fn test_category_options_first_seen_order() {
        let now = Utc::now();
        let prompts = vec![
            prompt("a", "Technical", PromptStatus::Draft, now),
            prompt("b", "Marketing", PromptStatus::Draft, now),
            prompt("c", "Technical", PromptStatus::Draft, now),
        ];
        let options = category_options(&prompts);
        assert_eq!(
            options,
            vec![
                Selection::All,
                Selection::Only(Category::new("Technical")),
                Selection::Only(Category::new("Marketing")),
            ]
        );
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" AI, GPT ,, AI "), vec!["AI", "GPT", "AI"]);
        assert!(parse_tags("  ").is_empty());
    }
}
