//! Store session helpers
//!
//! Every command works on a fresh in-memory store that loads the mock
//! dataset once.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use tokio_util::sync::CancellationToken;

use promptaudit_store::{
    DashboardStore, InMemoryAuditRepository, InMemoryPromptRepository, LoadState,
};

use crate::config::Config;

/// The store type used by the CLI
pub type Store = DashboardStore<InMemoryPromptRepository, InMemoryAuditRepository>;

/// Create a store and schedule its initial load
///
/// Cancelling `cancel` abandons a load that has not completed yet.
pub fn start(config: &Config, cancel: CancellationToken) -> Store {
    let store = DashboardStore::in_memory(config.store_config());
    store.initialize(cancel);
    store
}

/// Create a store and wait until its data is loaded
pub async fn open_ready(config: &Config) -> Result<Store> {
    let store = start(config, CancellationToken::new());

    eprint!("{}", "Loading data... ".dimmed());
    let state = store.wait_ready().await.context("Failed to load data")?;
    if state != LoadState::Ready {
        eprintln!("{}", "Failed".red());
        bail!("Data did not finish loading (state: {})", state);
    }
    eprintln!("{}", "OK".green());

    Ok(store)
}
