//! Dashboard view - metric cards, recent activity and quality status

use chrono::{DateTime, Utc};
use colored::Colorize;
use std::fmt::Write;

use promptaudit::{ActivityEntry, CriterionAverages, DomainError, MetricsSnapshot};

use super::format::{relative_time, score_bar};
use crate::config::MetricsMode;
use crate::session::Store;

const ACTIVITY_LIMIT: usize = 4;

/// Everything the dashboard needs from the store
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub metrics: Option<MetricsSnapshot>,
    pub activity: Vec<ActivityEntry>,
    pub averages: Option<CriterionAverages>,
}

pub struct DashboardView {
    mode: MetricsMode,
}

impl DashboardView {
    pub fn new(mode: MetricsMode) -> Self {
        Self { mode }
    }

    pub async fn load(&self, store: &Store) -> Result<DashboardData, DomainError> {
        let metrics = match self.mode {
            MetricsMode::Snapshot => store.metrics_snapshot(),
            MetricsMode::Live => Some(store.live_metrics().await?),
        };
        Ok(DashboardData {
            metrics,
            activity: store.recent_activity(ACTIVITY_LIMIT).await?,
            averages: store.criterion_averages().await?,
        })
    }

    pub fn render(&self, loading: bool, data: &DashboardData, now: DateTime<Utc>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "Dashboard".bold());
        let _ = writeln!(out, "{}", "Overview of the prompt audit platform".dimmed());
        let _ = writeln!(out);

        let metrics = match (&data.metrics, loading) {
            (Some(metrics), false) => metrics,
            _ => {
                let _ = writeln!(out, "  {}", "Loading dashboard...".yellow());
                return out;
            }
        };

        let quality = metrics
            .average_quality
            .map(|q| format!("{:.1}/10", q))
            .unwrap_or_else(|| "-".to_string());
        let cards = [
            ("Total Prompts", metrics.total_prompts.to_string()),
            ("Approved Prompts", metrics.approved_prompts.to_string()),
            ("Pending Review", metrics.pending_prompts.to_string()),
            ("Average Quality", quality),
            ("Completed Audits", metrics.completed_audits.to_string()),
            ("Pending Audits", metrics.pending_audits.to_string()),
        ];
        for (title, value) in cards {
            let _ = writeln!(out, "  {:<18} {}", title, value.cyan().bold());
        }
        let _ = writeln!(out, "  {}", format!("({} metrics)", self.mode).dimmed());

        let _ = writeln!(out, "\n{}", "Recent Activity".bold());
        if data.activity.is_empty() {
            let _ = writeln!(out, "  {}", "No activity yet.".dimmed());
        }
        for entry in &data.activity {
            let subject = entry
                .subject
                .as_deref()
                .map(|title| format!(": {}", title))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  • {}{} {}",
                entry.kind.label(),
                subject,
                format!("by {} • {}", entry.actor, relative_time(now, entry.at)).dimmed()
            );
        }

        let _ = writeln!(out, "\n{}", "Quality Status".bold());
        match &data.averages {
            Some(averages) => {
                for (criterion, value) in averages.iter() {
                    let _ = writeln!(
                        out,
                        "  {:<14} {} {:.1}",
                        criterion.label(),
                        score_bar(value),
                        value
                    );
                }
            }
            None => {
                let _ = writeln!(out, "  {}", "No audits yet.".dimmed());
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::format::strip_ansi;
    use promptaudit::{ActivityKind, AuditScores};

    fn data() -> DashboardData {
        DashboardData {
            metrics: Some(MetricsSnapshot {
                total_prompts: 12,
                approved_prompts: 3,
                pending_prompts: 4,
                average_quality: Some(8.2),
                completed_audits: 2,
                pending_audits: 5,
            }),
            activity: vec![ActivityEntry {
                kind: ActivityKind::PromptApproved,
                actor: "Maria Costa".to_string(),
                subject: Some("Prompt 1".to_string()),
                at: Utc::now(),
            }],
            averages: Some(CriterionAverages {
                averages: AuditScores {
                    clarity: 8.5,
                    specificity: 7.8,
                    context: 8.2,
                    structure: 7.9,
                    effectiveness: 8.1,
                },
                sample_size: 8,
            }),
        }
    }

    #[test]
    fn test_loading_shows_spinner_only() {
        let view = DashboardView::new(MetricsMode::Snapshot);
        let out = strip_ansi(&view.render(true, &data(), Utc::now()));
        assert!(out.contains("Loading dashboard..."));
        assert!(!out.contains("Total Prompts"));

        let out = strip_ansi(&view.render(false, &DashboardData::default(), Utc::now()));
        assert!(out.contains("Loading dashboard..."));
    }

    #[test]
    fn test_renders_cards_activity_and_quality() {
        let view = DashboardView::new(MetricsMode::Snapshot);
        let out = strip_ansi(&view.render(false, &data(), Utc::now()));
        assert!(out.contains("Approved Prompts"));
        assert!(out.contains("8.2/10"));
        assert!(out.contains("Prompt approved: Prompt 1"));
        assert!(out.contains("by Maria Costa"));
        assert!(out.contains("Specificity"));
        assert!(out.contains("7.8"));
    }
}
