// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Handles CRUD operations for tags with archive support

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{LibraryError, Result};
use crate::resources::parse_timestamp;
use crate::types::{Tag, TagCreateInput, TagUpdateInput};

pub struct TagStorage {
    pool: SqlitePool,
}

impl TagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all tags, optionally including archived tags
    pub async fn list_tags(&self, include_archived: bool) -> Result<Vec<Tag>> {
        debug!("Fetching tags (include_archived: {})", include_archived);

        let sql = if include_archived {
            "SELECT * FROM tags ORDER BY name"
        } else {
            "SELECT * FROM tags WHERE archived_at IS NULL ORDER BY name"
        };

        let rows = sqlx::query(sql).fetch_all(&self.pool).await?;
        rows.iter().map(Self::row_to_tag).collect()
    }

    pub async fn get_tag(&self, tag_id: &str) -> Result<Tag> {
        let row = sqlx::query("SELECT * FROM tags WHERE id = $1")
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| LibraryError::TagNotFound(tag_id.to_string()))?;

        Self::row_to_tag(&row)
    }

    pub async fn create_tag(&self, input: TagCreateInput) -> Result<Tag> {
        if input.name.trim().is_empty() {
            return Err(LibraryError::InvalidInput("Tag name is required".into()));
        }
        debug!("Creating tag: {}", input.name);

        let tag = Tag {
            id: nanoid::nanoid!(8),
            name: input.name,
            color: input.color,
            description: input.description,
            created_at: Utc::now(),
            archived_at: None,
        };

        sqlx::query(
            "INSERT INTO tags (id, name, color, description, created_at, archived_at)
             VALUES ($1, $2, $3, $4, $5, NULL)",
        )
        .bind(&tag.id)
        .bind(&tag.name)
        .bind(&tag.color)
        .bind(&tag.description)
        .bind(tag.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(tag)
    }

    pub async fn update_tag(&self, tag_id: &str, input: TagUpdateInput) -> Result<Tag> {
        let mut tag = self.get_tag(tag_id).await?;

        if let Some(name) = input.name {
            if name.trim().is_empty() {
                return Err(LibraryError::InvalidInput("Tag name cannot be empty".into()));
            }
            tag.name = name;
        }
        if let Some(color) = input.color {
            tag.color = Some(color);
        }
        if let Some(description) = input.description {
            tag.description = Some(description);
        }
        if input.archived_at.is_some() {
            tag.archived_at = input.archived_at;
        }

        sqlx::query(
            "UPDATE tags SET name = $1, color = $2, description = $3, archived_at = $4
             WHERE id = $5",
        )
        .bind(&tag.name)
        .bind(&tag.color)
        .bind(&tag.description)
        .bind(tag.archived_at.map(|ts| ts.to_rfc3339()))
        .bind(tag_id)
        .execute(&self.pool)
        .await?;

        Ok(tag)
    }

    pub async fn delete_tag(&self, tag_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(tag_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(LibraryError::TagNotFound(tag_id.to_string()));
        }
        Ok(())
    }

    fn row_to_tag(row: &sqlx::sqlite::SqliteRow) -> Result<Tag> {
        let created_at: String = row.get("created_at");
        let archived_at: Option<String> = row.get("archived_at");

        Ok(Tag {
            id: row.get("id"),
            name: row.get("name"),
            color: row.get("color"),
            description: row.get("description"),
            created_at: parse_timestamp(&created_at, "created_at")?,
            archived_at: archived_at
                .map(|ts| parse_timestamp(&ts, "archived_at"))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_library_schema;

    async fn setup_storage() -> TagStorage {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        init_library_schema(&pool).await.expect("migration");
        TagStorage::new(pool)
    }

    #[tokio::test]
    async fn archived_tags_are_hidden_by_default() {
        let storage = setup_storage().await;
        let keep = storage
            .create_tag(TagCreateInput {
                name: "wired".into(),
                color: None,
                description: None,
            })
            .await
            .unwrap();
        let archive = storage
            .create_tag(TagCreateInput {
                name: "legacy".into(),
                color: None,
                description: None,
            })
            .await
            .unwrap();

        storage
            .update_tag(
                &archive.id,
                TagUpdateInput {
                    name: None,
                    color: None,
                    description: None,
                    archived_at: Some(Utc::now()),
                },
            )
            .await
            .unwrap();

        let visible = storage.list_tags(false).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, keep.id);

        let all = storage.list_tags(true).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn update_merges_fields() {
        let storage = setup_storage().await;
        let tag = storage
            .create_tag(TagCreateInput {
                name: "guest".into(),
                color: None,
                description: None,
            })
            .await
            .unwrap();

        let updated = storage
            .update_tag(
                &tag.id,
                TagUpdateInput {
                    name: None,
                    color: Some("#2563eb".into()),
                    description: None,
                    archived_at: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "guest");
        assert_eq!(updated.color.as_deref(), Some("#2563eb"));
    }
}
