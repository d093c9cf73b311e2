//! Postgres content repository

use sqlx::PgPool;

use crate::domain::entities::{ContentDraft, StoredContent};
use crate::repository::ContentStore;
use manticore_common::Result;

#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ContentStore for PgContentRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<StoredContent>> {
        let row = sqlx::query_as::<_, StoredContent>(
            r#"
            SELECT id, title, body, metadata, created_at, updated_at
            FROM content
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn upsert(&self, id: &str, draft: ContentDraft) -> Result<StoredContent> {
        let row = sqlx::query_as::<_, StoredContent>(
            r#"
            INSERT INTO content (id, title, body, metadata, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                body = EXCLUDED.body,
                metadata = EXCLUDED.metadata,
                updated_at = NOW()
            RETURNING id, title, body, metadata, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.body)
        .bind(&draft.metadata)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM content WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
