//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod audit_status;
mod category;
mod priority;
mod prompt_status;
mod selection;

pub use audit_status::*;
pub use category::*;
pub use priority::*;
pub use prompt_status::*;
pub use selection::*;
