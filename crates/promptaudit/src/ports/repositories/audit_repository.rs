//! Audit Repository Port
//!
//! Abstract interface for the audit collection.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, AuditItem};

/// Repository interface for AuditItem entities
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// All audits in storage order
    async fn find_all(&self) -> Result<Vec<AuditItem>, DomainError>;

    /// Audits referencing the given prompt, in storage order
    async fn find_by_prompt(&self, prompt_id: Uuid) -> Result<Vec<AuditItem>, DomainError>;

    /// Insert an audit at the front of the collection
    async fn prepend(&self, audit: &AuditItem) -> Result<AuditItem, DomainError>;

    /// Append audits at the back, preserving their order
    async fn extend(&self, audits: Vec<AuditItem>) -> Result<usize, DomainError>;
}
