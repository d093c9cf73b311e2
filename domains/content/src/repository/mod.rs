//! Repository layer for the Content domain
//!
//! The external database is the source of truth; this layer only defines the
//! lookup/upsert/delete contract the API consumes, plus the Postgres
//! implementation and a mock for tests.

pub mod content;
pub mod mock;

use crate::domain::entities::{ContentDraft, StoredContent};
use manticore_common::Result;

pub use content::PgContentRepository;
pub use mock::MockContentStore;

/// Content persistence contract
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch a single record; `None` when the id resolves to nothing
    async fn find_by_id(&self, id: &str) -> Result<Option<StoredContent>>;

    /// Create or replace the record at `id`
    async fn upsert(&self, id: &str, draft: ContentDraft) -> Result<StoredContent>;

    /// Delete the record; returns whether a row was removed
    async fn delete(&self, id: &str) -> Result<bool>;
}
