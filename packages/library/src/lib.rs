// ABOUTME: Nacscope library package - resource catalog, relationships, tags, and enrichment
// ABOUTME: Independent of the wizard; backs the library screens of the tracker

pub mod enrichment;
pub mod error;
pub mod relationships;
pub mod resources;
pub mod suggestions;
pub mod tags;
pub mod types;

pub use enrichment::{EnrichmentResult, WebEnricher};
pub use error::{LibraryError, Result};
pub use relationships::RelationshipStorage;
pub use resources::ResourceStorage;
pub use suggestions::{suggest_related, RelationshipSuggestion};
pub use tags::TagStorage;
pub use types::{
    RelationshipType, Resource, ResourceCreateInput, ResourceFilter, ResourceKind,
    ResourceRelationship, ResourceSummary, Tag, TagCreateInput, TagUpdateInput,
};

const SCHEMA: &str = include_str!("../migrations/001_library.sql");

/// Run the library schema migration; safe to call repeatedly
pub async fn init_library_schema(pool: &sqlx::SqlitePool) -> Result<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
