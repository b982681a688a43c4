// ABOUTME: HTTP request handlers for tag operations
// ABOUTME: Handles CRUD operations for tags with archive support

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use nacscope_library::{TagCreateInput, TagUpdateInput};
use serde::Deserialize;
use tracing::info;

use super::response::{ApiError, ApiResponse};
use super::AppState;

#[derive(Deserialize)]
pub struct ListTagsQuery {
    #[serde(default)]
    pub include_archived: bool,
}

/// List all tags
pub async fn list_tags(
    State(state): State<AppState>,
    Query(params): Query<ListTagsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let tags = state.tags.list_tags(params.include_archived).await?;
    Ok((StatusCode::OK, ResponseJson(ApiResponse::success(tags))))
}

/// Create a new tag
pub async fn create_tag(
    State(state): State<AppState>,
    Json(input): Json<TagCreateInput>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Creating tag: {}", input.name);

    let tag = state.tags.create_tag(input).await?;
    Ok((StatusCode::CREATED, ResponseJson(ApiResponse::success(tag))))
}

/// Update a tag
pub async fn update_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
    Json(input): Json<TagUpdateInput>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Updating tag: {}", tag_id);

    let tag = state.tags.update_tag(&tag_id, input).await?;
    Ok((StatusCode::OK, ResponseJson(ApiResponse::success(tag))))
}

/// Delete a tag
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Deleting tag: {}", tag_id);

    state.tags.delete_tag(&tag_id).await?;
    Ok((StatusCode::OK, ResponseJson(ApiResponse::success(()))))
}
