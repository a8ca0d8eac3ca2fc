//! Prompt Repository Port
//!
//! Abstract interface for the prompt collection.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Prompt};

/// Repository interface for Prompt entities
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// All prompts in storage order
    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError>;

    /// Find a prompt by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError>;

    /// Insert a prompt at the front of the collection
    ///
    /// Fails with `Conflict` if the id is already present.
    async fn prepend(&self, prompt: &Prompt) -> Result<Prompt, DomainError>;

    /// Append prompts at the back, preserving their order
    async fn extend(&self, prompts: Vec<Prompt>) -> Result<usize, DomainError>;

    /// Remove the prompts with the given ids, returning how many were removed
    async fn remove(&self, ids: &[Uuid]) -> Result<usize, DomainError>;
}
