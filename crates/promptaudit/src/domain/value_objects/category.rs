//! Category - Open label grouping prompts

use serde::{Deserialize, Serialize};

/// Default category vocabulary offered by the create form and the generator
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["Marketing", "Development", "Analysis", "Creative", "Technical"];

/// Prompt category
///
/// The set of categories is open: any non-empty label is accepted, and the
/// prompt list derives its options from the labels actually in use.
/// Comparison is exact (case-sensitive), matching how labels are selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Category must not be empty".to_string());
        }
        Ok(Category::new(trimmed))
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::new(s)
    }
}
