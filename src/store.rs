use std::sync::Mutex;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Client, Collection};
use thiserror::Error;

use crate::models::{TaskId, TaskRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Persistence seam for tasks. The service talks to this trait only;
/// the binary wires in [`MongoStore`], tests wire in [`MemoryStore`].
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks, ordered by `created_at` ascending. Ties keep the
    /// store's stable order.
    async fn list(&self) -> Result<Vec<TaskRecord>, StoreError>;

    async fn insert(&self, record: &TaskRecord) -> Result<(), StoreError>;

    async fn find(&self, id: &TaskId) -> Result<Option<TaskRecord>, StoreError>;

    /// Append `date` to the task's completions.
    async fn push_completion(&self, id: &TaskId, date: &str) -> Result<(), StoreError>;

    /// Remove every occurrence of `date` from the task's completions.
    async fn pull_completion(&self, id: &TaskId, date: &str) -> Result<(), StoreError>;

    /// Returns whether a record was actually removed.
    async fn delete(&self, id: &TaskId) -> Result<bool, StoreError>;
}

pub struct MongoStore {
    tasks: Collection<TaskRecord>,
}

impl MongoStore {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let tasks = client.database(db_name).collection("tasks");
        Ok(Self { tasks })
    }
}

#[async_trait]
impl TaskStore for MongoStore {
    async fn list(&self) -> Result<Vec<TaskRecord>, StoreError> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();
        let cursor = self.tasks.find(None, options).await?;
        let tasks: Vec<TaskRecord> = cursor.try_collect().await?;
        Ok(tasks)
    }

    async fn insert(&self, record: &TaskRecord) -> Result<(), StoreError> {
        self.tasks.insert_one(record, None).await?;
        Ok(())
    }

    async fn find(&self, id: &TaskId) -> Result<Option<TaskRecord>, StoreError> {
        Ok(self
            .tasks
            .find_one(doc! { "_id": id.as_object_id() }, None)
            .await?)
    }

    // $push/$pull are atomic on the server, which is what makes
    // concurrent toggles from two clients safe against lost updates.
    async fn push_completion(&self, id: &TaskId, date: &str) -> Result<(), StoreError> {
        self.tasks
            .update_one(
                doc! { "_id": id.as_object_id() },
                doc! { "$push": { "completions": date } },
                None,
            )
            .await?;
        Ok(())
    }

    async fn pull_completion(&self, id: &TaskId, date: &str) -> Result<(), StoreError> {
        self.tasks
            .update_one(
                doc! { "_id": id.as_object_id() },
                doc! { "$pull": { "completions": date } },
                None,
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, StoreError> {
        let result = self
            .tasks
            .delete_one(doc! { "_id": id.as_object_id() }, None)
            .await?;
        Ok(result.deleted_count > 0)
    }
}

/// In-memory store with the same contract, used by unit and
/// integration tests.
#[derive(Default)]
pub struct MemoryStore {
    tasks: Mutex<Vec<TaskRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list(&self) -> Result<Vec<TaskRecord>, StoreError> {
        let mut tasks = self.tasks.lock().unwrap().clone();
        // Stable sort keeps insertion order among equal dates.
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(tasks)
    }

    async fn insert(&self, record: &TaskRecord) -> Result<(), StoreError> {
        self.tasks.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn find(&self, id: &TaskId) -> Result<Option<TaskRecord>, StoreError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .find(|t| t.id == id.as_object_id())
            .cloned())
    }

    async fn push_completion(&self, id: &TaskId, date: &str) -> Result<(), StoreError> {
        let mut tasks = self.tasks.lock().unwrap();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id.as_object_id()) {
            task.completions.push(date.to_string());
        }
        Ok(())
    }

    async fn pull_completion(&self, id: &TaskId, date: &str) -> Result<(), StoreError> {
        let mut tasks = self.tasks.lock().unwrap();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id.as_object_id()) {
            task.completions.retain(|d| d != date);
        }
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, StoreError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id != id.as_object_id());
        Ok(tasks.len() < before)
    }
}
