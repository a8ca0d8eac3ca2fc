//! Audit list view

use colored::Colorize;
use std::collections::HashMap;
use std::fmt::Write;
use uuid::Uuid;

use promptaudit::{AuditFilter, AuditItem, Prompt};

use super::format::{audit_status_badge, date, priority_badge, score, score_bar, truncate_string};

const COMMENT_CHARS: usize = 160;

/// Filterable audit list
#[derive(Debug, Default)]
pub struct AuditsView {
    filter: AuditFilter,
}

impl AuditsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: AuditFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &AuditFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut AuditFilter {
        &mut self.filter
    }

    pub fn visible<'a>(&self, audits: &'a [AuditItem], prompts: &[Prompt]) -> Vec<&'a AuditItem> {
        self.filter.apply(audits, prompts)
    }

    pub fn render(&self, audits: &[AuditItem], prompts: &[Prompt]) -> String {
        let titles: HashMap<Uuid, &str> =
            prompts.iter().map(|p| (p.id, p.title.as_str())).collect();
        let visible = self.visible(audits, prompts);

        let mut out = String::new();
        let _ = writeln!(out, "{}", "Audits".bold());
        let _ = writeln!(
            out,
            "{}",
            format!(
                "Showing {} of {} audits (search: '{}', status: {})",
                visible.len(),
                audits.len(),
                self.filter().query(),
                self.filter().status()
            )
            .dimmed()
        );

        if visible.is_empty() {
            let _ = writeln!(out, "\n  No audits match.");
            return out;
        }

        for audit in visible {
            let title = match titles.get(&audit.prompt_id) {
                Some(title) => title.cyan().bold(),
                None => "(unknown prompt)".dimmed(),
            };
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "  {} {} {}",
                title,
                audit_status_badge(audit.status),
                priority_badge(audit.priority)
            );
            let _ = writeln!(
                out,
                "  {}",
                format!("Audited by {} on {}", audit.auditor, date(audit.audited_at)).dimmed()
            );
            let _ = writeln!(out, "  Overall score: {}/10", score(audit.score));
            for (criterion, value) in audit.scores.iter() {
                let _ = writeln!(
                    out,
                    "    {:<14} {} {:.1}",
                    criterion.label(),
                    score_bar(value),
                    value
                );
            }
            if !audit.comments.is_empty() {
                let _ = writeln!(out, "  {}", truncate_string(&audit.comments, COMMENT_CHARS));
            }
            for suggestion in &audit.suggestions {
                let _ = writeln!(out, "    - {}", suggestion);
            }
        }

        out
    }
}
