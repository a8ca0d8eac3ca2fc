//! Prompt library view

use colored::Colorize;
use std::fmt::Write;

use promptaudit::{AuditItem, Prompt, PromptFilter};

use super::format::{audit_status_badge, date, prompt_status_badge, score, truncate_string};

const PREVIEW_CHARS: usize = 120;

/// Filterable prompt list
///
/// Filter state starts empty every time the view is created.
#[derive(Debug, Default)]
pub struct PromptsView {
    filter: PromptFilter,
}

impl PromptsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: PromptFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &PromptFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut PromptFilter {
        &mut self.filter
    }

    pub fn visible<'a>(&self, prompts: &'a [Prompt]) -> Vec<&'a Prompt> {
        self.filter.apply(prompts)
    }

    pub fn render(&self, prompts: &[Prompt]) -> String {
        let visible = self.visible(prompts);
        let mut out = String::new();
        let _ = writeln!(out, "{}", "Prompt Library".bold());
        let _ = writeln!(
            out,
            "{}",
            format!(
                "Showing {} of {} prompts (search: '{}', category: {})",
                visible.len(),
                prompts.len(),
                self.filter().query(),
                self.filter().category()
            )
            .dimmed()
        );

        if visible.is_empty() {
            let _ = writeln!(out, "\n  No prompts match.");
            return out;
        }

        for prompt in visible {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "  {} {}",
                prompt.title.cyan().bold(),
                prompt_status_badge(prompt.status)
            );
            let preview = truncate_string(&prompt.content.replace('\n', " "), PREVIEW_CHARS);
            let _ = writeln!(out, "  {}", preview);
            let _ = writeln!(
                out,
                "  {}",
                format!(
                    "by {} • {} • v{} • {}",
                    prompt.author,
                    date(prompt.created_at),
                    prompt.version,
                    prompt.category
                )
                .dimmed()
            );
            if !prompt.tags.is_empty() {
                let tags: Vec<_> = prompt.tags.iter().map(|t| format!("#{}", t)).collect();
                let _ = writeln!(out, "  {}", tags.join(" ").blue());
            }
            let _ = writeln!(out, "  {}", prompt.id.to_string().dimmed());
        }

        out
    }
}

/// Full prompt with the audits that reference it
pub fn render_prompt_detail(prompt: &Prompt, audits: &[AuditItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        prompt.title.cyan().bold(),
        prompt_status_badge(prompt.status)
    );
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{} • by {} • created {} • edited {} • v{}",
            prompt.category,
            prompt.author,
            date(prompt.created_at),
            date(prompt.updated_at),
            prompt.version
        )
        .dimmed()
    );
    if !prompt.tags.is_empty() {
        let _ = writeln!(out, "{}", prompt.tags.join(", ").blue());
    }
    let _ = writeln!(out, "\n{}\n", prompt.content);

    let _ = writeln!(out, "{} ({})", "Audits".bold(), audits.len());
    for audit in audits {
        let _ = writeln!(
            out,
            "  {} {} {} {}",
            audit_status_badge(audit.status),
            score(audit.score),
            audit.auditor,
            date(audit.audited_at).dimmed()
        );
    }
    out
}
