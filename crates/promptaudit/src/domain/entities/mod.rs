//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: Versioned text template under editorial review
//! - AuditItem: Scored quality review of one prompt
//! - MetricsSnapshot: Aggregate counters over both collections

mod audit;
mod metrics;
mod prompt;

pub use audit::*;
pub use metrics::*;
pub use prompt::*;
