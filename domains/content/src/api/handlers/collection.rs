//! Collection-level content write handlers
//!
//! PUT and DELETE are defined here at the collection level; the per-id route
//! wires them in explicitly and adds no write semantics of its own.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::api::handlers::content::ContentEnvelope;
use crate::api::middleware::ContentState;
use crate::domain::entities::ContentDraft;
use manticore_common::{Error, Result, ValidatedJson};

/// Request body for creating or replacing a content record
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertContentRequest {
    #[validate(length(max = 200))]
    pub title: Option<String>,

    pub body: Option<String>,

    /// Structured metadata; serialized to the text column on write
    pub metadata: Option<Value>,
}

/// Create or replace the content record at `id`
pub async fn put_content(
    State(state): State<ContentState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpsertContentRequest>,
) -> Result<Json<ContentEnvelope>> {
    let draft = ContentDraft {
        title: req.title,
        body: req.body,
        metadata: req.metadata.map(|v| v.to_string()),
    };

    let stored = state.store.upsert(&id, draft).await?;
    Ok(Json(ContentEnvelope {
        content: stored.into(),
    }))
}

/// Delete the content record at `id`
pub async fn delete_content(
    State(state): State<ContentState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !state.store.delete(&id).await? {
        return Err(Error::NotFound("Content not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
