//! PromptAudit Domain Library
//!
//! Core domain types and interfaces for the PromptAudit dashboard.
//!
//! # Architecture
//!
//! The crate keeps the same layering as the rest of the workspace:
//!
//! - **Domain Layer** (`domain/`): Pure entities and value types
//!   - `entities/`: Core domain models (Prompt, AuditItem, MetricsSnapshot)
//!   - `value_objects/`: Closed enumerations and labels (PromptStatus, AuditStatus, Priority, Category, Selection)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Collection access interfaces
//!   - `services/`: Clock abstraction
//!
//! - **Services** (`services/`): Pure domain logic
//!   - `generator`: Mock dataset generation
//!   - `filter`: Prompt and audit filter predicates
//!   - `derive`: Metrics, activity feed and other derived projections
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptaudit::{Prompt, PromptFilter, Selection};
//!
//! let filter = PromptFilter::new("alpha", Selection::All);
//! let visible = filter.apply(&prompts);
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{
    AuditItem, AuditScores, AuditStatus, Category, Criterion, DomainError, MetricsSnapshot,
    NewAudit, NewPrompt, Priority, Prompt, PromptStatus, Selection, DEFAULT_CATEGORIES,
    SNAPSHOT_AVERAGE_QUALITY,
};
pub use ports::{AuditRepository, Clock, FixedClock, PromptRepository, SystemClock};
pub use services::{
    derive::{
        category_options, criterion_averages, live_metrics, parse_tags, recent_activity,
        ActivityEntry, ActivityKind, CriterionAverages,
    },
    filter::{AuditFilter, PromptFilter},
    generator::{MockDataGenerator, MockDataset, AUDIT_COUNT, PROMPT_COUNT},
};
