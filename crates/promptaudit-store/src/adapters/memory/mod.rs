//! In-Memory Repository Implementations
//!
//! Collections live for the session only; nothing is persisted.

mod audit_repository;
mod prompt_repository;

pub use audit_repository::InMemoryAuditRepository;
pub use prompt_repository::InMemoryPromptRepository;
