use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid id")]
pub struct InvalidTaskId;

/// Identifier of a stored task. Parsing is the only way to obtain one
/// from request input, so malformed strings are rejected before any
/// store call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(ObjectId);

impl TaskId {
    pub fn parse(raw: &str) -> Result<Self, InvalidTaskId> {
        ObjectId::parse_str(raw).map(Self).map_err(|_| InvalidTaskId)
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for TaskId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

/// Persisted document shape:
/// `{ _id, name, created_at: "YYYY-MM-DD", completions: ["YYYY-MM-DD", ...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub completions: Vec<String>,
}

impl TaskRecord {
    pub fn new(name: &str, created_at: String) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.to_string(),
            created_at,
            completions: Vec::new(),
        }
    }

    pub fn view(&self, today: &str) -> TaskView {
        TaskView {
            id: self.id.to_hex(),
            name: self.name.clone(),
            created_at: self.created_at.clone(),
            completed_today: self.completions.iter().any(|d| d == today),
            total_completions: self.completions.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskView {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub completed_today: bool,
    pub total_completions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_valid_object_id() {
        let oid = ObjectId::new();
        let id = TaskId::parse(&oid.to_hex()).unwrap();
        assert_eq!(id.as_object_id(), oid);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(TaskId::parse("not-an-id").is_err());
        assert!(TaskId::parse("").is_err());
    }

    #[test]
    fn view_checks_membership_not_order() {
        let mut record = TaskRecord::new("stretch", "2026-03-01".to_string());
        record.completions = vec!["2026-03-02".to_string(), "2026-03-01".to_string()];

        let view = record.view("2026-03-01");
        assert!(view.completed_today);
        assert_eq!(view.total_completions, 2);

        let view = record.view("2026-03-03");
        assert!(!view.completed_today);
    }
}
