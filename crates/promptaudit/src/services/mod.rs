//! Domain Services
//!
//! Pure logic over the domain entities: dataset generation,
//! filter predicates and derived projections.

pub mod derive;
pub mod filter;
pub mod generator;
mod lorem;
