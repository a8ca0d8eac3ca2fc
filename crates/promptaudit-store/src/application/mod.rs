//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the repositories: the one-shot
//! initial load, mutations and derived reads.

mod store_service;

pub use store_service::{DashboardStore, LoadState, StoreConfig};
