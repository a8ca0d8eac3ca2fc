//! PromptAudit Store
//!
//! The session-scoped data store behind the dashboard views.
//!
//! - **Application Layer** (`application/`): `DashboardStore`, which owns the
//!   prompt and audit collections, runs the one-shot delayed load and
//!   exposes the mutation operations
//! - **Adapters** (`adapters/`): in-memory implementations of the
//!   repository ports

pub mod adapters;
pub mod application;

pub use adapters::{InMemoryAuditRepository, InMemoryPromptRepository};
pub use application::{DashboardStore, LoadState, StoreConfig};
