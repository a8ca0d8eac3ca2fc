//! Repository Ports
//!
//! Abstract interfaces for collection access.
//! Collections are ordered newest-first; repositories never reorder.

mod audit_repository;
mod prompt_repository;

pub use audit_repository::*;
pub use prompt_repository::*;
