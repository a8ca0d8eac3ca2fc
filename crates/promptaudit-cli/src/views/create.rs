//! Create prompt form

use colored::Colorize;
use std::fmt::Write;

use promptaudit::{parse_tags, Category, DomainError, NewPrompt, PromptStatus};

const TIPS: [&str; 4] = [
    "Be specific about the role and context",
    "State the goal clearly",
    "Include examples when needed",
    "Specify the desired output format",
];

/// Form state for a new prompt
///
/// Tags are entered as comma-separated text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub tags: String,
    pub status: PromptStatus,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statuses a new prompt may start in
    pub fn statuses() -> [PromptStatus; 3] {
        [
            PromptStatus::Draft,
            PromptStatus::InReview,
            PromptStatus::Approved,
        ]
    }

    /// Replace the content with a suggested template
    pub fn apply_suggestion(&mut self, template: &str) {
        self.content = template.to_string();
    }

    /// Validated draft ready for the store
    pub fn to_draft(&self) -> Result<NewPrompt, DomainError> {
        let draft = NewPrompt {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            category: Category::new(self.category.trim()),
            author: self.author.trim().to_string(),
            status: self.status,
            tags: parse_tags(&self.tags),
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Clear every field back to its initial value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn render_tips() -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "Tips for a good prompt:".bold());
        for tip in TIPS {
            let _ = writeln!(out, "  • {}", tip);
        }
        out
    }

    pub fn render_preview(&self) -> String {
        let mut out = String::new();
        let title = if self.title.is_empty() {
            "Prompt title"
        } else {
            self.title.as_str()
        };
        let _ = writeln!(out, "{}", title.cyan().bold());
        let _ = writeln!(
            out,
            "{}",
            format!(
                "{} • by {} • {}",
                if self.category.is_empty() { "No category" } else { self.category.as_str() },
                if self.author.is_empty() { "Author" } else { self.author.as_str() },
                self.status.label()
            )
            .dimmed()
        );
        let _ = writeln!(out);
        if self.content.is_empty() {
            let _ = writeln!(out, "{}", "The prompt content will appear here...".dimmed());
        } else {
            let _ = writeln!(out, "{}", self.content);
        }
        let tags = parse_tags(&self.tags);
        if !tags.is_empty() {
            let _ = writeln!(out, "{}", tags.join(", ").blue());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::format::strip_ansi;

    fn filled() -> CreateForm {
        CreateForm {
            title: " Marketing Assistant ".to_string(),
            content: "You are a marketer.".to_string(),
            category: "Marketing".to_string(),
            author: "Ana".to_string(),
            tags: "AI, GPT,,".to_string(),
            status: PromptStatus::InReview,
        }
    }

    #[test]
    fn test_to_draft_trims_and_parses_tags() {
        let draft = filled().to_draft().unwrap();
        assert_eq!(draft.title, "Marketing Assistant");
        assert_eq!(draft.tags, vec!["AI", "GPT"]);
        assert_eq!(draft.status, PromptStatus::InReview);
    }

    #[test]
    fn test_to_draft_requires_category() {
        let mut form = filled();
        form.category.clear();
        assert!(matches!(form.to_draft(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_reset_and_suggestion() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, CreateForm::new());
        assert_eq!(form.status, PromptStatus::Draft);
        form.apply_suggestion("As a {role}, ...");
        assert_eq!(form.content, "As a {role}, ...");
    }

    #[test]
    fn test_preview_placeholders() {
        let out = strip_ansi(&CreateForm::new().render_preview());
        assert!(out.contains("Prompt title"));
        assert!(out.contains("will appear here"));
    }
}
