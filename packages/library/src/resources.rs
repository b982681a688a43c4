// ABOUTME: Resource storage layer using SQLite
// ABOUTME: CRUD plus the search filter backing the relationship builder's target picker

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{LibraryError, Result};
use crate::types::{Resource, ResourceCreateInput, ResourceFilter, ResourceKind, ResourceSummary};

pub(crate) fn parse_timestamp(value: &str, column: &str) -> Result<DateTime<Utc>> {
    value
        .parse()
        .map_err(|e| LibraryError::InvalidInput(format!("Bad {} timestamp: {}", column, e)))
}

pub struct ResourceStorage {
    pool: SqlitePool,
}

impl ResourceStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_resource(&self, input: ResourceCreateInput) -> Result<Resource> {
        if input.title.trim().is_empty() {
            return Err(LibraryError::InvalidInput(
                "Resource title is required".to_string(),
            ));
        }

        let resource = Resource {
            id: nanoid::nanoid!(8),
            title: input.title,
            kind: input.kind,
            description: input.description,
            url: input.url,
            tags: input.tags,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        debug!("Creating resource: {}", resource.id);

        sqlx::query(
            "INSERT INTO resources (id, title, kind, description, url, tags, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&resource.id)
        .bind(&resource.title)
        .bind(resource.kind.as_str())
        .bind(&resource.description)
        .bind(&resource.url)
        .bind(serde_json::to_string(&resource.tags)?)
        .bind(resource.created_at.to_rfc3339())
        .bind(resource.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(resource)
    }

    pub async fn get_resource(&self, id: &str) -> Result<Resource> {
        let row = sqlx::query("SELECT * FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| LibraryError::ResourceNotFound(id.to_string()))?;

        self.row_to_resource(&row)
    }

    /// Search resources; every filter field narrows the result
    pub async fn search_resources(&self, filter: &ResourceFilter) -> Result<Vec<ResourceSummary>> {
        debug!(
            "Searching resources (query: {:?}, kind: {:?}, tag: {:?})",
            filter.query, filter.kind, filter.tag
        );

        let mut sql = String::from("SELECT * FROM resources WHERE 1=1");
        if filter.query.is_some() {
            sql.push_str(" AND (title LIKE ? OR description LIKE ?)");
        }
        if filter.kind.is_some() {
            sql.push_str(" AND kind = ?");
        }
        sql.push_str(" ORDER BY title");

        let mut query = sqlx::query(&sql);
        if let Some(ref text) = filter.query {
            let pattern = format!("%{}%", text);
            query = query.bind(pattern.clone()).bind(pattern);
        }
        if let Some(kind) = filter.kind {
            query = query.bind(kind.as_str());
        }

        let rows = query.fetch_all(&self.pool).await?;

        let mut summaries = Vec::new();
        for row in &rows {
            let resource = self.row_to_resource(row)?;
            // Tag filtering happens on the decoded list, not the JSON text
            if let Some(ref tag) = filter.tag {
                if !resource.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                    continue;
                }
            }
            summaries.push(ResourceSummary {
                id: resource.id,
                title: resource.title,
                kind: resource.kind,
                tags: resource.tags,
            });
        }
        Ok(summaries)
    }

    pub async fn list_resources(&self) -> Result<Vec<Resource>> {
        let rows = sqlx::query("SELECT * FROM resources ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(|row| self.row_to_resource(row)).collect()
    }

    pub async fn delete_resource(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(LibraryError::ResourceNotFound(id.to_string()));
        }
        Ok(())
    }

    fn row_to_resource(&self, row: &sqlx::sqlite::SqliteRow) -> Result<Resource> {
        let kind: String = row.get("kind");
        let tags: String = row.get("tags");
        let created_at: String = row.get("created_at");
        let updated_at: String = row.get("updated_at");

        Ok(Resource {
            id: row.get("id"),
            title: row.get("title"),
            kind: ResourceKind::parse(&kind)
                .ok_or_else(|| LibraryError::InvalidInput(format!("Bad resource kind: {}", kind)))?,
            description: row.get("description"),
            url: row.get("url"),
            tags: serde_json::from_str(&tags).unwrap_or_default(),
            created_at: parse_timestamp(&created_at, "created_at")?,
            updated_at: parse_timestamp(&updated_at, "updated_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_library_schema;

    async fn setup_storage() -> ResourceStorage {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        init_library_schema(&pool).await.expect("migration");
        ResourceStorage::new(pool)
    }

    fn input(title: &str, kind: ResourceKind, tags: &[&str]) -> ResourceCreateInput {
        ResourceCreateInput {
            title: title.to_string(),
            kind,
            description: String::new(),
            url: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let storage = setup_storage().await;
        let created = storage
            .create_resource(input(
                "802.1X rollout guide",
                ResourceKind::Guide,
                &["wired", "radius"],
            ))
            .await
            .unwrap();

        let fetched = storage.get_resource(&created.id).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn empty_title_is_rejected() {
        let storage = setup_storage().await;
        assert!(matches!(
            storage
                .create_resource(input("  ", ResourceKind::Article, &[]))
                .await,
            Err(LibraryError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn search_combines_filters() {
        let storage = setup_storage().await;
        storage
            .create_resource(input(
                "802.1X rollout guide",
                ResourceKind::Guide,
                &["wired"],
            ))
            .await
            .unwrap();
        storage
            .create_resource(input("Guest access guide", ResourceKind::Guide, &["guest"]))
            .await
            .unwrap();
        storage
            .create_resource(input("RADIUS tool", ResourceKind::Tool, &["wired"]))
            .await
            .unwrap();

        let by_query = storage
            .search_resources(&ResourceFilter {
                query: Some("guide".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_query.len(), 2);

        let by_kind_and_tag = storage
            .search_resources(&ResourceFilter {
                kind: Some(ResourceKind::Guide),
                tag: Some("wired".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_kind_and_tag.len(), 1);
        assert_eq!(by_kind_and_tag[0].title, "802.1X rollout guide");
    }

    #[tokio::test]
    async fn delete_missing_resource_is_not_found() {
        let storage = setup_storage().await;
        assert!(matches!(
            storage.delete_resource("missing").await,
            Err(LibraryError::ResourceNotFound(_))
        ));
    }
}
