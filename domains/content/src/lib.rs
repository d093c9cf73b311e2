//! Content domain: database-backed content records with metadata normalization

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{normalize_metadata, ContentDraft, ContentRecord, StoredContent};

// Re-export repository types
pub use repository::{ContentStore, MockContentStore, PgContentRepository};

// Re-export API types
pub use api::routes;
pub use api::ContentState;
