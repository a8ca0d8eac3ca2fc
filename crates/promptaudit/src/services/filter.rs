//! Filter Predicates
//!
//! Pure predicates the list views apply over the store's collections.
//! Filtering keeps storage order and never mutates its input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{AuditItem, AuditStatus, Category, Prompt, Selection};

/// Prompt list filter
///
/// Keeps a prompt when its title OR content contains the query
/// (case-insensitive) AND its category passes the selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptFilter {
    query: String,
    category: Selection<Category>,
}

impl PromptFilter {
    pub fn new(query: impl Into<String>, category: Selection<Category>) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &Selection<Category> {
        &self.category
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: Selection<Category>) {
        self.category = category;
    }

    pub fn matches(&self, prompt: &Prompt) -> bool {
        let needle = self.query.to_lowercase();
        prompt.mentions(&needle) && self.category.admits(&prompt.category)
    }

    /// Matching prompts, in storage order
    pub fn apply<'a>(&self, prompts: &'a [Prompt]) -> Vec<&'a Prompt> {
        let needle = self.query.to_lowercase();
        let kept: Vec<_> = prompts
            .iter()
            .filter(|p| p.mentions(&needle) && self.category.admits(&p.category))
            .collect();
        tracing::debug!(
            query = %self.query,
            category = %self.category,
            total = prompts.len(),
            kept = kept.len(),
            "Applied prompt filter"
        );
        kept
    }
}

/// Audit list filter
///
/// Keeps an audit when the referenced prompt's title OR the auditor name
/// contains the query (case-insensitive) AND its status passes the selector.
/// A dangling prompt reference simply fails the title clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditFilter {
    query: String,
    status: Selection<AuditStatus>,
}

impl AuditFilter {
    pub fn new(query: impl Into<String>, status: Selection<AuditStatus>) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &Selection<AuditStatus> {
        &self.status
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_status(&mut self, status: Selection<AuditStatus>) {
        self.status = status;
    }

    /// Match one audit given its (possibly missing) prompt
    pub fn matches(&self, audit: &AuditItem, prompt: Option<&Prompt>) -> bool {
        let needle = self.query.to_lowercase();
        Self::text_matches(&needle, audit, prompt) && self.status.admits(&audit.status)
    }

    /// Matching audits, in storage order
    pub fn apply<'a>(&self, audits: &'a [AuditItem], prompts: &[Prompt]) -> Vec<&'a AuditItem> {
        let by_id: HashMap<Uuid, &Prompt> = prompts.iter().map(|p| (p.id, p)).collect();
        let needle = self.query.to_lowercase();
        let kept: Vec<_> = audits
            .iter()
            .filter(|a| {
                let prompt = by_id.get(&a.prompt_id).copied();
                Self::text_matches(&needle, a, prompt) && self.status.admits(&a.status)
            })
            .collect();
        tracing::debug!(
            query = %self.query,
            status = %self.status,
            total = audits.len(),
            kept = kept.len(),
            "Applied audit filter"
        );
        kept
    }

    fn text_matches(needle: &str, audit: &AuditItem, prompt: Option<&Prompt>) -> bool {
        let title_hit = prompt.is_some_and(|p| p.title.to_lowercase().contains(needle));
        title_hit || audit.auditor.to_lowercase().contains(needle)
    }
}
