//! Route definitions for Content domain API

use axum::{routing::get, Router};

use super::handlers::{collection, content};
use super::middleware::ContentState;

/// Per-id content route.
///
/// PUT and DELETE forward to the collection-level handlers; composition is
/// explicit here rather than a module re-export.
fn content_routes() -> Router<ContentState> {
    Router::new().route(
        "/api/content/{id}",
        get(content::get_content)
            .put(collection::put_content)
            .delete(collection::delete_content),
    )
}

/// Create all Content domain API routes
pub fn routes() -> Router<ContentState> {
    Router::new().merge(content_routes())
}
