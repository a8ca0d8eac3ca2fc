//! In-memory implementation of PromptRepository

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use promptaudit::{DomainError, Prompt, PromptRepository};

/// In-memory implementation of PromptRepository
///
/// Index 0 is the newest prompt.
#[derive(Default)]
pub struct InMemoryPromptRepository {
    prompts: RwLock<Vec<Prompt>>,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn ensure_absent(prompts: &[Prompt], id: Uuid) -> Result<(), DomainError> {
    if prompts.iter().any(|p| p.id == id) {
        return Err(DomainError::Conflict(format!(
            "Prompt with id {} already exists",
            id
        )));
    }
    Ok(())
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError> {
        Ok(self.prompts.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        let prompts = self.prompts.read().await;
        Ok(prompts.iter().find(|p| p.id == id).cloned())
    }

    async fn prepend(&self, prompt: &Prompt) -> Result<Prompt, DomainError> {
        let mut prompts = self.prompts.write().await;
        ensure_absent(&prompts, prompt.id)?;
        prompts.insert(0, prompt.clone());
        Ok(prompt.clone())
    }

    async fn extend(&self, incoming: Vec<Prompt>) -> Result<usize, DomainError> {
        let mut prompts = self.prompts.write().await;
        for (i, prompt) in incoming.iter().enumerate() {
            ensure_absent(&prompts, prompt.id)?;
            if incoming[..i].iter().any(|p| p.id == prompt.id) {
                return Err(DomainError::Conflict(format!(
                    "Duplicate prompt id {} in batch",
                    prompt.id
                )));
            }
        }
        let added = incoming.len();
        prompts.extend(incoming);
        Ok(added)
    }

    async fn remove(&self, ids: &[Uuid]) -> Result<usize, DomainError> {
        let mut prompts = self.prompts.write().await;
        let before = prompts.len();
        prompts.retain(|p| !ids.contains(&p.id));
        Ok(before - prompts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use promptaudit::{Category, NewPrompt, PromptStatus};

    fn prompt(title: &str) -> Prompt {
        Prompt::create(
            NewPrompt {
                title: title.to_string(),
                content: "body".to_string(),
                category: Category::new("Marketing"),
                author: "Ana".to_string(),
                status: PromptStatus::Draft,
                tags: vec![],
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_prepend_puts_newest_first() {
        let repo = InMemoryPromptRepository::new();
        repo.prepend(&prompt("first")).await.unwrap();
        repo.prepend(&prompt("second")).await.unwrap();
        let all = repo.find_all().await.unwrap();
        assert_eq!(all[0].title, "second");
        assert_eq!(all[1].title, "first");
    }

    #[tokio::test]
    async fn test_prepend_rejects_duplicate_id() {
        let repo = InMemoryPromptRepository::new();
        let p = prompt("once");
        repo.prepend(&p).await.unwrap();
        let err = repo.prepend(&p).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_extend_appends_and_rejects_duplicates_atomically() {
        let repo = InMemoryPromptRepository::new();
        repo.prepend(&prompt("user")).await.unwrap();
        let batch = vec![prompt("g1"), prompt("g2")];
        assert_eq!(repo.extend(batch).await.unwrap(), 2);
        let titles: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["user", "g1", "g2"]);

        let dup = prompt("dup");
        assert!(repo.extend(vec![dup.clone(), dup]).await.is_err());
        assert_eq!(repo.find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_remove_drops_only_listed_ids() {
        let repo = InMemoryPromptRepository::new();
        let keep = prompt("keep");
        let gone = prompt("gone");
        repo.extend(vec![keep.clone(), gone.clone()]).await.unwrap();
        assert_eq!(repo.remove(&[gone.id, Uuid::new_v4()]).await.unwrap(), 1);
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep.id);
        assert!(repo.find_by_id(gone.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = InMemoryPromptRepository::new();
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
