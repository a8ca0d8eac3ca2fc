//! Terminal formatting helpers shared by the views

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};

use promptaudit::{AuditStatus, Priority, PromptStatus};

/// Truncate string safely for UTF-8 (by char count, not bytes)
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

/// "2 min ago" style age of `at` relative to `now`
pub fn relative_time(now: DateTime<Utc>, at: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if elapsed.num_hours() < 24 {
        let hours = elapsed.num_hours();
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else {
        let days = elapsed.num_days();
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    }
}

pub fn date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

pub fn prompt_status_badge(status: PromptStatus) -> ColoredString {
    let label = format!("[{}]", status.label());
    match status {
        PromptStatus::Approved => label.green(),
        PromptStatus::InReview => label.yellow(),
        PromptStatus::Rejected => label.red(),
        PromptStatus::Draft => label.dimmed(),
    }
}

pub fn audit_status_badge(status: AuditStatus) -> ColoredString {
    let label = format!("[{}]", status.label());
    match status {
        AuditStatus::Completed => label.green(),
        AuditStatus::Pending => label.yellow(),
        AuditStatus::InReview => label.magenta(),
    }
}

pub fn priority_badge(priority: Priority) -> ColoredString {
    let label = format!("{} priority", priority);
    match priority {
        Priority::High => label.red(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.green(),
    }
}

/// Ten-cell bar for a 0-10 score
pub fn score_bar(score: f64) -> String {
    let filled = score.clamp(0.0, 10.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

pub fn score(score: f64) -> ColoredString {
    let text = format!("{:.1}", score);
    if score >= 8.0 {
        text.green()
    } else if score >= 7.0 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Drop ANSI color sequences so tests can assert on plain text
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
