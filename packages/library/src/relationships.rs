// ABOUTME: Typed relationship edges between library resources
// ABOUTME: Self-links are rejected; duplicate edges collapse onto the existing row

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{LibraryError, Result};
use crate::resources::parse_timestamp;
use crate::types::{RelationshipType, ResourceRelationship};

pub struct RelationshipStorage {
    pool: SqlitePool,
}

impl RelationshipStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an edge. A duplicate (source, target, type) returns the
    /// existing edge instead of erroring.
    pub async fn create_relationship(
        &self,
        source_id: &str,
        target_id: &str,
        relationship_type: RelationshipType,
        note: Option<String>,
    ) -> Result<ResourceRelationship> {
        if source_id == target_id {
            return Err(LibraryError::SelfRelationship);
        }
        debug!(
            "Creating relationship: {} -{}-> {}",
            source_id,
            relationship_type.as_str(),
            target_id
        );

        let id = nanoid::nanoid!(8);
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO resource_relationships (id, source_id, target_id, relationship_type, note, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT(source_id, target_id, relationship_type) DO NOTHING",
        )
        .bind(&id)
        .bind(source_id)
        .bind(target_id)
        .bind(relationship_type.as_str())
        .bind(&note)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(
            "SELECT * FROM resource_relationships
             WHERE source_id = $1 AND target_id = $2 AND relationship_type = $3",
        )
        .bind(source_id)
        .bind(target_id)
        .bind(relationship_type.as_str())
        .fetch_one(&self.pool)
        .await?;

        Self::row_to_relationship(&row)
    }

    /// Every edge touching the resource, in either direction
    pub async fn list_for_resource(&self, resource_id: &str) -> Result<Vec<ResourceRelationship>> {
        let rows = sqlx::query(
            "SELECT * FROM resource_relationships
             WHERE source_id = $1 OR target_id = $1
             ORDER BY created_at DESC",
        )
        .bind(resource_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_relationship).collect()
    }

    pub async fn delete_relationship(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM resource_relationships WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(LibraryError::RelationshipNotFound(id.to_string()));
        }
        Ok(())
    }

    fn row_to_relationship(row: &sqlx::sqlite::SqliteRow) -> Result<ResourceRelationship> {
        let relationship_type: String = row.get("relationship_type");
        let created_at: String = row.get("created_at");

        Ok(ResourceRelationship {
            id: row.get("id"),
            source_id: row.get("source_id"),
            target_id: row.get("target_id"),
            relationship_type: RelationshipType::parse(&relationship_type).ok_or_else(|| {
                LibraryError::InvalidInput(format!(
                    "Bad relationship type: {}",
                    relationship_type
                ))
            })?,
            note: row.get("note"),
            created_at: parse_timestamp(&created_at, "created_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_library_schema;
    use crate::resources::ResourceStorage;
    use crate::types::{ResourceCreateInput, ResourceKind};

    async fn setup() -> (RelationshipStorage, String, String) {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        init_library_schema(&pool).await.expect("migration");

        let resources = ResourceStorage::new(pool.clone());
        let first = resources
            .create_resource(ResourceCreateInput {
                title: "802.1X rollout guide".into(),
                kind: ResourceKind::Guide,
                description: String::new(),
                url: None,
                tags: vec![],
            })
            .await
            .unwrap();
        let second = resources
            .create_resource(ResourceCreateInput {
                title: "RADIUS tool".into(),
                kind: ResourceKind::Tool,
                description: String::new(),
                url: None,
                tags: vec![],
            })
            .await
            .unwrap();

        (RelationshipStorage::new(pool), first.id, second.id)
    }

    #[tokio::test]
    async fn self_relationship_is_rejected() {
        let (storage, first, _) = setup().await;
        assert!(matches!(
            storage
                .create_relationship(&first, &first, RelationshipType::RelatedTo, None)
                .await,
            Err(LibraryError::SelfRelationship)
        ));
    }

    #[tokio::test]
    async fn duplicate_edge_collapses() {
        let (storage, first, second) = setup().await;
        let a = storage
            .create_relationship(&first, &second, RelationshipType::Requires, None)
            .await
            .unwrap();
        let b = storage
            .create_relationship(&first, &second, RelationshipType::Requires, None)
            .await
            .unwrap();
        assert_eq!(a.id, b.id);

        let edges = storage.list_for_resource(&first).await.unwrap();
        assert_eq!(edges.len(), 1);
    }

    #[tokio::test]
    async fn list_covers_both_directions() {
        let (storage, first, second) = setup().await;
        storage
            .create_relationship(&first, &second, RelationshipType::PartOf, None)
            .await
            .unwrap();

        let from_target_side = storage.list_for_resource(&second).await.unwrap();
        assert_eq!(from_target_side.len(), 1);
        assert_eq!(from_target_side[0].source_id, first);
    }

    #[tokio::test]
    async fn delete_missing_relationship_is_not_found() {
        let (storage, _, _) = setup().await;
        assert!(matches!(
            storage.delete_relationship("missing").await,
            Err(LibraryError::RelationshipNotFound(_))
        ));
    }
}
