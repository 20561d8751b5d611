use std::sync::Arc;

use thiserror::Error;

use crate::clock::Clock;
use crate::models::{InvalidTaskId, TaskId, TaskRecord, TaskView};
use crate::store::{StoreError, TaskStore};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid id")]
    InvalidIdentifier(#[from] InvalidTaskId),
    #[error("task not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct TaskList {
    pub tasks: Vec<TaskView>,
    pub today: String,
}

/// The four operations of the app. Holds no task state of its own;
/// every call goes straight to the store.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    clock: Clock,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>, clock: Clock) -> Self {
        Self { store, clock }
    }

    pub async fn list(&self) -> Result<TaskList, ServiceError> {
        let today = self.clock.today_string();
        let tasks = self
            .store
            .list()
            .await?
            .iter()
            .map(|record| record.view(&today))
            .collect();
        Ok(TaskList { tasks, today })
    }

    /// Creates a task from a raw form value. A name that trims to empty
    /// is silently dropped and `Ok(None)` is returned.
    pub async fn add(&self, name: &str) -> Result<Option<TaskRecord>, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let record = TaskRecord::new(name, self.clock.today_string());
        self.store.insert(&record).await?;
        tracing::info!(name = %record.name, "task created");
        Ok(Some(record))
    }

    /// Toggles today's completion: marks the task done for today, or
    /// unmarks it if it was already done. Past days are never touched.
    pub async fn toggle(&self, raw_id: &str) -> Result<(), ServiceError> {
        let id = TaskId::parse(raw_id)?;
        let task = self.store.find(&id).await?.ok_or(ServiceError::NotFound)?;
        let today = self.clock.today_string();
        if task.completions.iter().any(|d| d == &today) {
            self.store.pull_completion(&id, &today).await?;
        } else {
            self.store.push_completion(&id, &today).await?;
        }
        Ok(())
    }

    /// Deleting an id that matches nothing is a no-op, not an error.
    pub async fn delete(&self, raw_id: &str) -> Result<(), ServiceError> {
        let id = TaskId::parse(raw_id)?;
        self.store.delete(&id).await?;
        Ok(())
    }
}
