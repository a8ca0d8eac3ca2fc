//! In-memory implementation of AuditRepository

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use promptaudit::{AuditItem, AuditRepository, DomainError};

/// In-memory implementation of AuditRepository
#[derive(Default)]
pub struct InMemoryAuditRepository {
    audits: RwLock<Vec<AuditItem>>,
}

impl InMemoryAuditRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn ensure_absent(audits: &[AuditItem], id: Uuid) -> Result<(), DomainError> {
    if audits.iter().any(|a| a.id == id) {
        return Err(DomainError::Conflict(format!(
            "Audit with id {} already exists",
            id
        )));
    }
    Ok(())
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn find_all(&self) -> Result<Vec<AuditItem>, DomainError> {
        Ok(self.audits.read().await.clone())
    }

    async fn find_by_prompt(&self, prompt_id: Uuid) -> Result<Vec<AuditItem>, DomainError> {
        let audits = self.audits.read().await;
        Ok(audits
            .iter()
            .filter(|a| a.prompt_id == prompt_id)
            .cloned()
            .collect())
    }

    async fn prepend(&self, audit: &AuditItem) -> Result<AuditItem, DomainError> {
        let mut audits = self.audits.write().await;
        ensure_absent(&audits, audit.id)?;
        audits.insert(0, audit.clone());
        Ok(audit.clone())
    }

    async fn extend(&self, incoming: Vec<AuditItem>) -> Result<usize, DomainError> {
        let mut audits = self.audits.write().await;
        for (i, audit) in incoming.iter().enumerate() {
            ensure_absent(&audits, audit.id)?;
            if incoming[..i].iter().any(|a| a.id == audit.id) {
                return Err(DomainError::Conflict(format!(
                    "Duplicate audit id {} in batch",
                    audit.id
                )));
            }
        }
        let added = incoming.len();
        audits.extend(incoming);
        Ok(added)
    }
}
