//! Selection - Filter selector with an "all" sentinel

use serde::{Deserialize, Serialize};

/// Sentinel text meaning "no restriction"
pub const ALL_SENTINEL: &str = "all";

/// A filter selector: either no restriction, or exactly one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selector
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => f.write_str(ALL_SENTINEL),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}

impl<T> std::str::FromStr for Selection<T>
where
    T: std::str::FromStr<Err = String>,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(Selection::All);
        }
        s.parse::<T>().map(Selection::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuditStatus, Category};

    #[test]
    fn test_parse_sentinel() {
        let sel: Selection<AuditStatus> = "ALL".parse().unwrap();
        assert!(sel.is_all());
        let sel: Selection<AuditStatus> = "pending".parse().unwrap();
        assert_eq!(sel, Selection::Only(AuditStatus::Pending));
    }

    #[test]
    fn test_admits() {
        let marketing = Category::new("Marketing");
        assert!(Selection::All.admits(&marketing));
        assert!(Selection::Only(marketing.clone()).admits(&marketing));
        assert!(!Selection::Only(Category::new("Creative")).admits(&marketing));
    }
}
