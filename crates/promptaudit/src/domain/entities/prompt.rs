//! Prompt - Text templates under editorial review
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{require_non_empty, DomainError};
use crate::domain::{Category, PromptStatus};

/// Prompt - A versioned text template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prompt {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: PromptStatus,
    /// Starts at 1
    pub version: u32,
    /// Free-form, ordered, duplicates allowed
    pub tags: Vec<String>,
}

/// Draft submitted by the create form
///
/// Everything the caller controls; id, timestamps and version are assigned
/// on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPrompt {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub author: String,
    #[serde(default)]
    pub status: PromptStatus,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewPrompt {
    /// Check the required fields (title, content, category, author)
    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("content", &self.content)?;
        require_non_empty("category", self.category.as_str())?;
        require_non_empty("author", &self.author)?;
        Ok(())
    }
}

impl Prompt {
    /// Create a new prompt from a validated draft
    ///
    /// Both timestamps are set to `now` and the version starts at 1.
    pub fn create(draft: NewPrompt, now: DateTime<Utc>) -> Result<Self, DomainError> {
        draft.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            category: draft.category,
            author: draft.author,
            created_at: now,
            updated_at: now,
            status: draft.status,
            version: 1,
            tags: draft.tags,
        })
    }

    /// Case-insensitive substring match against title or content
    pub fn mentions(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.content.to_lowercase().contains(needle_lower)
    }
}
