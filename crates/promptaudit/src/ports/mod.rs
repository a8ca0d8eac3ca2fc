//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with its surroundings (collections, the clock).
//!
//! Implementations of the repository traits live in `promptaudit-store`.

pub mod repositories;
pub mod services;

// Re-exports
pub use repositories::*;
pub use services::*;
