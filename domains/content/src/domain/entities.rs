//! Domain entities for the Content domain
//!
//! Content rows persist metadata as serialized text; the API consumes it as
//! structured JSON. Normalization happens here so every read path agrees on
//! what malformed metadata means.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Persisted content row. `metadata` is the raw text column, untouched.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StoredContent {
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub metadata: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted by the collection-level upsert
#[derive(Debug, Clone, Default)]
pub struct ContentDraft {
    pub title: Option<String>,
    pub body: Option<String>,
    /// Metadata already serialized for the text column
    pub metadata: Option<String>,
}

/// API-facing content record with structured metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalize stored metadata text into structured JSON.
///
/// Invariant: text that does not parse as JSON becomes an empty object and
/// the read still succeeds. A NULL column stays JSON null.
pub fn normalize_metadata(raw: Option<&str>) -> Value {
    match raw {
        None => Value::Null,
        Some(text) => serde_json::from_str(text).unwrap_or_else(|_| Value::Object(Map::new())),
    }
}

impl From<StoredContent> for ContentRecord {
    fn from(stored: StoredContent) -> Self {
        Self {
            metadata: normalize_metadata(stored.metadata.as_deref()),
            id: stored.id,
            title: stored.title,
            body: stored.body,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}
