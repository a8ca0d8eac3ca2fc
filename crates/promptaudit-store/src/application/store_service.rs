//! Dashboard Store (Use Case)
//!
//! Owns the prompt and audit collections for a session. The initial data is
//! populated once, after a fixed delay, by a background task; everything
//! else is a synchronous-from-the-caller mutation or a read.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use promptaudit::{
    criterion_averages, live_metrics, recent_activity, ActivityEntry, AuditItem,
    AuditRepository, Clock, CriterionAverages, DomainError, MetricsSnapshot, MockDataGenerator,
    NewAudit, NewPrompt, Prompt, PromptRepository, SystemClock,
};

use crate::adapters::{InMemoryAuditRepository, InMemoryPromptRepository};

/// Default delay before the initial data appears
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(1000);

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Delay before the initial load populates the collections
    pub load_delay: Duration,
    /// Generator seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            load_delay: DEFAULT_LOAD_DELAY,
            seed: None,
        }
    }
}

/// Lifecycle of the initial load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadState::Uninitialized => write!(f, "uninitialized"),
            LoadState::Loading => write!(f, "loading"),
            LoadState::Ready => write!(f, "ready"),
        }
    }
}

/// Session data store for the dashboard views
pub struct DashboardStore<P: PromptRepository, A: AuditRepository> {
    prompts: Arc<P>,
    audits: Arc<A>,
    clock: Arc<dyn Clock>,
    config: StoreConfig,
    state: Arc<watch::Sender<LoadState>>,
    snapshot: Arc<Mutex<Option<MetricsSnapshot>>>,
}

impl<P: PromptRepository, A: AuditRepository> Clone for DashboardStore<P, A> {
    fn clone(&self) -> Self {
        Self {
            prompts: Arc::clone(&self.prompts),
            audits: Arc::clone(&self.audits),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
            state: Arc::clone(&self.state),
            snapshot: Arc::clone(&self.snapshot),
        }
    }
}

impl DashboardStore<InMemoryPromptRepository, InMemoryAuditRepository> {
    /// Store over fresh in-memory collections and the wall clock
    pub fn in_memory(config: StoreConfig) -> Self {
        Self::new(
            Arc::new(InMemoryPromptRepository::new()),
            Arc::new(InMemoryAuditRepository::new()),
            Arc::new(SystemClock),
            config,
        )
    }
}

impl<P, A> DashboardStore<P, A>
where
    P: PromptRepository + 'static,
    A: AuditRepository + 'static,
{
    pub fn new(prompts: Arc<P>, audits: Arc<A>, clock: Arc<dyn Clock>, config: StoreConfig) -> Self {
        Self {
            prompts,
            audits,
            clock,
            config,
            state: Arc::new(watch::Sender::new(LoadState::Uninitialized)),
            snapshot: Arc::new(Mutex::new(None)),
        }
    }

    fn snapshot_slot(&self) -> MutexGuard<'_, Option<MetricsSnapshot>> {
        self.snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // ============================================
    // Lifecycle
    // ============================================

    /// Schedule the one-shot initial load
    ///
    /// Returns `false` without scheduling anything unless the store is
    /// `Uninitialized`. Cancelling `cancel` before the delay elapses
    /// abandons the load and returns the store to `Uninitialized`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, since the load runs on
    /// a spawned task.
    pub fn initialize(&self, cancel: CancellationToken) -> bool {
        let scheduled = self.state.send_if_modified(|state| {
            if *state != LoadState::Uninitialized {
                return false;
            }
            *state = LoadState::Loading;
            true
        });
        if !scheduled {
            tracing::debug!(state = %self.state(), "Initialize ignored");
            return false;
        }

        let store = self.clone();
        tokio::spawn(async move {
            store.run_load(cancel).await;
        });

        tracing::info!(
            delay_ms = self.config.load_delay.as_millis() as u64,
            "Initial load scheduled"
        );
        true
    }

    async fn run_load(self, cancel: CancellationToken) {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::warn!("Initial load cancelled before delay elapsed");
                self.state.send_replace(LoadState::Uninitialized);
                return;
            }
            _ = tokio::time::sleep(self.config.load_delay) => {}
        }

        let dataset = MockDataGenerator::with_seed(self.config.seed).generate(self.clock.now());
        let prompt_ids: Vec<Uuid> = dataset.prompts.iter().map(|p| p.id).collect();

        let prompts = match self.prompts.extend(dataset.prompts).await {
            Ok(added) => added,
            Err(e) => {
                tracing::error!("Initial load failed: {}", e);
                self.state.send_replace(LoadState::Uninitialized);
                return;
            }
        };

        let audits = match self.audits.extend(dataset.audits).await {
            Ok(added) => added,
            Err(e) => {
                tracing::error!("Initial load failed: {}", e);
                // Roll back the generated prompts
                if let Err(e) = self.prompts.remove(&prompt_ids).await {
                    tracing::error!("Failed to roll back generated prompts: {}", e);
                }
                self.state.send_replace(LoadState::Uninitialized);
                return;
            }
        };

        *self.snapshot_slot() = Some(dataset.metrics);
        self.state.send_replace(LoadState::Ready);
        tracing::info!(prompts, audits, "Initial load completed");
    }

    /// Wait until no load is in progress
    ///
    /// Any number of callers may wait at once. Returns `Ready`, or
    /// `Uninitialized` when no load completed.
    pub async fn wait_ready(&self) -> Result<LoadState, DomainError> {
        let mut rx = self.state.subscribe();
        let state = *rx
            .wait_for(|state| *state != LoadState::Loading)
            .await
            .map_err(|e| DomainError::Repository(format!("Load state closed: {}", e)))?;
        Ok(state)
    }

    pub fn state(&self) -> LoadState {
        *self.state.borrow()
    }

    /// True until the initial load has completed
    pub fn is_loading(&self) -> bool {
        self.state() != LoadState::Ready
    }

    // ============================================
    // Reads
    // ============================================

    /// All prompts, newest first
    pub async fn prompts(&self) -> Result<Vec<Prompt>, DomainError> {
        self.prompts.find_all().await
    }

    /// All audits, newest first
    pub async fn audits(&self) -> Result<Vec<AuditItem>, DomainError> {
        self.audits.find_all().await
    }

    /// Look up a prompt; `None` for unknown ids
    pub async fn find_prompt(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        self.prompts.find_by_id(id).await
    }

    /// Audits that reference a prompt
    pub async fn audits_for_prompt(&self, prompt_id: Uuid) -> Result<Vec<AuditItem>, DomainError> {
        self.audits.find_by_prompt(prompt_id).await
    }

    /// Metrics as computed at load time; `None` before the load completes
    ///
    /// Not updated by later mutations.
    pub fn metrics_snapshot(&self) -> Option<MetricsSnapshot> {
        *self.snapshot_slot()
    }

    /// Metrics recomputed from the current collections
    pub async fn live_metrics(&self) -> Result<MetricsSnapshot, DomainError> {
        let prompts = self.prompts.find_all().await?;
        let audits = self.audits.find_all().await?;
        Ok(live_metrics(&prompts, &audits))
    }

    pub async fn criterion_averages(&self) -> Result<Option<CriterionAverages>, DomainError> {
        let audits = self.audits.find_all().await?;
        Ok(criterion_averages(&audits))
    }

    pub async fn recent_activity(&self, limit: usize) -> Result<Vec<ActivityEntry>, DomainError> {
        let prompts = self.prompts.find_all().await?;
        let audits = self.audits.find_all().await?;
        Ok(recent_activity(&prompts, &audits, limit))
    }

    // ============================================
    // Mutations
    // ============================================

    /// Create a prompt and put it at the front of the collection
    pub async fn add_prompt(&self, draft: NewPrompt) -> Result<Prompt, DomainError> {
        let prompt = Prompt::create(draft, self.clock.now())?;
        let saved = self.prompts.prepend(&prompt).await?;

        tracing::info!("Created prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Create an audit and put it at the front of the collection
    ///
    /// The referenced prompt does not have to exist.
    pub async fn add_audit(&self, draft: NewAudit) -> Result<AuditItem, DomainError> {
        let audit = AuditItem::create(draft, self.clock.now())?;

        if self.prompts.find_by_id(audit.prompt_id).await?.is_none() {
            tracing::warn!(
                prompt_id = %audit.prompt_id,
                "Audit references unknown prompt"
            );
        }

        let saved = self.audits.prepend(&audit).await?;

        tracing::info!("Created audit by {} ({})", saved.auditor, saved.id);

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use promptaudit::{
        AuditScores, AuditStatus, Category, FixedClock, Priority, PromptStatus, AUDIT_COUNT,
        PROMPT_COUNT,
    };
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Audit storage whose next batch insert fails once
    #[derive(Default)]
    struct FlakyAuditRepository {
        inner: InMemoryAuditRepository,
        healthy: AtomicBool,
    }

    #[async_trait::async_trait]
    impl AuditRepository for FlakyAuditRepository {
        async fn find_all(&self) -> Result<Vec<AuditItem>, DomainError> {
            self.inner.find_all().await
        }

        async fn find_by_prompt(&self, prompt_id: Uuid) -> Result<Vec<AuditItem>, DomainError> {
            self.inner.find_by_prompt(prompt_id).await
        }

        async fn prepend(&self, audit: &AuditItem) -> Result<AuditItem, DomainError> {
            self.inner.prepend(audit).await
        }

        async fn extend(&self, audits: Vec<AuditItem>) -> Result<usize, DomainError> {
            if !self.healthy.swap(true, Ordering::SeqCst) {
                return Err(DomainError::Repository("audit storage unavailable".to_string()));
            }
            self.inner.extend(audits).await
        }
    }

    fn store() -> DashboardStore<InMemoryPromptRepository, InMemoryAuditRepository> {
        DashboardStore::in_memory(StoreConfig {
            load_delay: DEFAULT_LOAD_DELAY,
            seed: Some(7),
        })
    }

    fn fixed_store() -> DashboardStore<InMemoryPromptRepository, InMemoryAuditRepository> {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        DashboardStore::new(
            Arc::new(InMemoryPromptRepository::new()),
            Arc::new(InMemoryAuditRepository::new()),
            Arc::new(FixedClock(now)),
            StoreConfig {
                load_delay: Duration::from_millis(10),
                seed: Some(3),
            },
        )
    }

    fn new_prompt(title: &str) -> NewPrompt {
        NewPrompt {
            title: title.to_string(),
            content: "Y".to_string(),
            category: Category::new("Marketing"),
            author: "Z".to_string(),
            status: PromptStatus::Draft,
            tags: vec![],
        }
    }

    fn new_audit(prompt_id: Uuid, auditor: &str) -> NewAudit {
        NewAudit {
            prompt_id,
            auditor: auditor.to_string(),
            score: 9.1,
            scores: AuditScores {
                clarity: 9.0,
                specificity: 8.0,
                context: 9.5,
                structure: 8.5,
                effectiveness: 9.0,
            },
            comments: "Solid".to_string(),
            suggestions: vec!["Add an example.".to_string()],
            status: AuditStatus::Completed,
            priority: Priority::High,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_populates_after_delay() {
        let store = store();
        assert!(store.is_loading());
        assert!(store.initialize(CancellationToken::new()));
        assert_eq!(store.state(), LoadState::Loading);
        assert!(store.prompts().await.unwrap().is_empty());
        assert!(store.audits().await.unwrap().is_empty());
        assert!(store.metrics_snapshot().is_none());

        assert_eq!(store.wait_ready().await.unwrap(), LoadState::Ready);
        assert!(!store.is_loading());
        assert_eq!(store.prompts().await.unwrap().len(), PROMPT_COUNT);
        assert_eq!(store.audits().await.unwrap().len(), AUDIT_COUNT);
        let snapshot = store.metrics_snapshot().unwrap();
        assert_eq!(snapshot.total_prompts, PROMPT_COUNT);
        assert_eq!(snapshot.average_quality, Some(8.2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generated_audits_reference_loaded_prompts() {
        let store = store();
        store.initialize(CancellationToken::new());
        store.wait_ready().await.unwrap();
        let ids: HashSet<_> = store.prompts().await.unwrap().iter().map(|p| p.id).collect();
        for audit in store.audits().await.unwrap() {
            assert!(ids.contains(&audit.prompt_id));
            assert!(store.find_prompt(audit.prompt_id).await.unwrap().is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_is_guarded() {
        let store = store();
        assert!(store.initialize(CancellationToken::new()));
        assert!(!store.initialize(CancellationToken::new()));
        store.wait_ready().await.unwrap();
        assert!(!store.initialize(CancellationToken::new()));
        assert_eq!(store.prompts().await.unwrap().len(), PROMPT_COUNT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_load_leaves_store_empty() {
        let store = store();
        let cancel = CancellationToken::new();
        assert!(store.initialize(cancel.clone()));
        cancel.cancel();
        assert_eq!(store.wait_ready().await.unwrap(), LoadState::Uninitialized);
        assert!(store.prompts().await.unwrap().is_empty());
        assert!(store.metrics_snapshot().is_none());

        // A fresh lifetime may load again
        assert!(store.initialize(CancellationToken::new()));
        assert_eq!(store.wait_ready().await.unwrap(), LoadState::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_load_rolls_back_and_can_retry() {
        let store = DashboardStore::new(
            Arc::new(InMemoryPromptRepository::new()),
            Arc::new(FlakyAuditRepository::default()),
            Arc::new(SystemClock),
            StoreConfig {
                load_delay: DEFAULT_LOAD_DELAY,
                seed: Some(7),
            },
        );
        let early = store.add_prompt(new_prompt("Early")).await.unwrap();

        assert!(store.initialize(CancellationToken::new()));
        assert_eq!(store.wait_ready().await.unwrap(), LoadState::Uninitialized);
        let prompts = store.prompts().await.unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].id, early.id);
        assert!(store.metrics_snapshot().is_none());

        // Same seed, same generated ids: the retry must not conflict
        assert!(store.initialize(CancellationToken::new()));
        assert_eq!(store.wait_ready().await.unwrap(), LoadState::Ready);
        let prompts = store.prompts().await.unwrap();
        assert_eq!(prompts.len(), PROMPT_COUNT + 1);
        assert_eq!(prompts[0].id, early.id);
        assert_eq!(store.audits().await.unwrap().len(), AUDIT_COUNT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_waiters_all_see_ready() {
        let store = store();
        assert_eq!(store.wait_ready().await.unwrap(), LoadState::Uninitialized);

        store.initialize(CancellationToken::new());
        let (first, second) = tokio::join!(store.wait_ready(), store.wait_ready());
        assert_eq!(first.unwrap(), LoadState::Ready);
        assert_eq!(second.unwrap(), LoadState::Ready);
    }

    #[tokio::test]
    async fn test_add_prompt_on_empty_store() {
        let store = fixed_store();
        let prompt = store.add_prompt(new_prompt("X")).await.unwrap();
        let all = store.prompts().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, prompt.id);
        assert!(!all[0].id.is_nil());
        assert_eq!(all[0].version, 1);
        assert_eq!(all[0].created_at, all[0].updated_at);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_prompt_goes_first_and_snapshot_stays() {
        let store = fixed_store();
        store.initialize(CancellationToken::new());
        store.wait_ready().await.unwrap();

        let added = store.add_prompt(new_prompt("Fresh")).await.unwrap();
        let all = store.prompts().await.unwrap();
        assert_eq!(all[0].id, added.id);
        assert_eq!(all.len(), PROMPT_COUNT + 1);
        let ids: HashSet<_> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), all.len());

        assert_eq!(store.metrics_snapshot().unwrap().total_prompts, PROMPT_COUNT);
        assert_eq!(store.live_metrics().await.unwrap().total_prompts, PROMPT_COUNT + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_added_while_loading_stays_first() {
        let store = fixed_store();
        store.initialize(CancellationToken::new());
        let early = store.add_prompt(new_prompt("Early")).await.unwrap();
        store.wait_ready().await.unwrap();
        let all = store.prompts().await.unwrap();
        assert_eq!(all[0].id, early.id);
        assert_eq!(all.len(), PROMPT_COUNT + 1);
    }

    #[tokio::test]
    async fn test_add_prompt_rejects_blank_title() {
        let store = fixed_store();
        let err = store.add_prompt(new_prompt("  ")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.prompts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_audit_goes_first() {
        let store = fixed_store();
        let prompt = store.add_prompt(new_prompt("Target")).await.unwrap();
        store.add_audit(new_audit(prompt.id, "Ana")).await.unwrap();
        let second = store.add_audit(new_audit(prompt.id, "Bruno")).await.unwrap();

        let audits = store.audits().await.unwrap();
        assert_eq!(audits[0].id, second.id);
        assert_eq!(audits[0].audited_at, Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap());
        assert_eq!(store.audits_for_prompt(prompt.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_add_audit_allows_dangling_reference() {
        let store = fixed_store();
        let orphan = Uuid::new_v4();
        let audit = store.add_audit(new_audit(orphan, "Carla")).await.unwrap();
        assert_eq!(audit.prompt_id, orphan);
        assert!(store.find_prompt(orphan).await.unwrap().is_none());
        assert_eq!(store.audits().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_live_projections_follow_mutations() {
        let store = fixed_store();
        let prompt = store.add_prompt(new_prompt("Target")).await.unwrap();
        assert!(store.criterion_averages().await.unwrap().is_none());

        store.add_audit(new_audit(prompt.id, "Ana")).await.unwrap();
        let live = store.live_metrics().await.unwrap();
        assert_eq!(live.completed_audits, 1);
        assert_eq!(live.average_quality, Some(9.1));

        let averages = store.criterion_averages().await.unwrap().unwrap();
        assert_eq!(averages.averages.context, 9.5);

        let feed = store.recent_activity(10).await.unwrap();
        assert_eq!(feed.len(), 2);
    }
}
