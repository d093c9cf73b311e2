//! Mock content store
//!
//! In-memory store used by handler and integration tests. Can be armed to
//! fail so tests can exercise the repository-failure path.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::domain::entities::{ContentDraft, StoredContent};
use crate::repository::ContentStore;
use manticore_common::{Error, Result};

/// Mock content store for testing
#[derive(Default)]
pub struct MockContentStore {
    records: Mutex<HashMap<String, StoredContent>>,
    failure: Mutex<Option<String>>,
}

impl MockContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored row
    pub fn insert(&self, record: StoredContent) {
        self.records
            .lock()
            .unwrap()
            .insert(record.id.clone(), record);
    }

    /// Make every store operation fail with the given message
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    fn check_failure(&self) -> Result<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(Error::Internal(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl ContentStore for MockContentStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<StoredContent>> {
        self.check_failure()?;
        Ok(self.records.lock().unwrap().get(id).cloned())
    }

    async fn upsert(&self, id: &str, draft: ContentDraft) -> Result<StoredContent> {
        self.check_failure()?;

        let mut records = self.records.lock().unwrap();
        let now = Utc::now();
        let created_at = records.get(id).map(|r| r.created_at).unwrap_or(now);

        let record = StoredContent {
            id: id.to_string(),
            title: draft.title,
            body: draft.body,
            metadata: draft.metadata,
            created_at,
            updated_at: now,
        };
        records.insert(id.to_string(), record.clone());
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        self.check_failure()?;
        Ok(self.records.lock().unwrap().remove(id).is_some())
    }
}
