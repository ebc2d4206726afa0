//! In-memory agent task repository for the memory storage backend and tests

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::agent::{AgentTask, AgentTaskRepository};
use crate::domain::DomainError;

/// In-memory implementation of AgentTaskRepository
#[derive(Debug, Default)]
pub struct InMemoryAgentTaskRepository {
    tasks: RwLock<HashMap<Uuid, AgentTask>>,
}

impl InMemoryAgentTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AgentTaskRepository for InMemoryAgentTaskRepository {
    async fn get(&self, id: Uuid) -> Result<Option<AgentTask>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<AgentTask>, DomainError> {
        let tasks = self.tasks.read().await;

        let mut result: Vec<AgentTask> = tasks.values().cloned().collect();
        result.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(result)
    }

    async fn create(&self, task: AgentTask) -> Result<AgentTask, DomainError> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn update(&self, task: &AgentTask) -> Result<AgentTask, DomainError> {
        let mut tasks = self.tasks.write().await;

        if !tasks.contains_key(&task.id()) {
            return Err(DomainError::not_found(format!(
                "Agent task '{}' not found",
                task.id()
            )));
        }

        tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_task(title: &str) -> AgentTask {
        AgentTask::new(title, "coding", Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryAgentTaskRepository::new();
        let task = create_test_task("Fix flaky test");

        repo.create(task.clone()).await.unwrap();

        let retrieved = repo.get(task.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().title(), "Fix flaky test");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryAgentTaskRepository::new();
        assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryAgentTaskRepository::new();

        for i in 0..3 {
            repo.create(create_test_task(&format!("task {}", i)))
                .await
                .unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let tasks = repo.list().await.unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].title(), "task 2");

        for pair in tasks.windows(2) {
            assert!(pair[0].created_at() >= pair[1].created_at());
        }
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryAgentTaskRepository::new();
        let task = create_test_task("Orphan");

        let result = repo.update(&task).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryAgentTaskRepository::new();
        let task = create_test_task("Ephemeral");

        repo.create(task.clone()).await.unwrap();

        assert!(repo.delete(task.id()).await.unwrap());
        assert!(!repo.delete(task.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_count() {
        let repo = InMemoryAgentTaskRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.create(create_test_task("One")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
