//! Content read API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::api::middleware::ContentState;
use crate::domain::entities::ContentRecord;
use manticore_common::{Error, Result};

/// Response envelope for a single content record
#[derive(Debug, Serialize)]
pub struct ContentEnvelope {
    pub content: ContentRecord,
}

/// Fetch a content record by id.
///
/// Metadata is normalized on the way out. A lookup failure surfaces as 500
/// with the store's message; it is logged, never retried.
pub async fn get_content(
    State(state): State<ContentState>,
    Path(id): Path<String>,
) -> Result<Json<ContentEnvelope>> {
    let stored = state
        .store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| Error::NotFound("Content not found".to_string()))?;

    Ok(Json(ContentEnvelope {
        content: stored.into(),
    }))
}
