// ABOUTME: HTTP request handlers for library resources and relationships
// ABOUTME: Search, CRUD, typed relationship edges, and rule-based suggestions

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use nacscope_library::{
    suggest_related, RelationshipType, ResourceCreateInput, ResourceFilter, ResourceKind,
};
use serde::Deserialize;
use tracing::info;

use super::response::{ApiError, ApiResponse};
use super::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub kind: Option<String>,
    pub tag: Option<String>,
}

/// Search resources by text, kind, and tag
pub async fn search_resources(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = ResourceFilter {
        query: params.q,
        kind: params.kind.as_deref().and_then(ResourceKind::parse),
        tag: params.tag,
    };
    let summaries = state.resources.search_resources(&filter).await?;
    Ok((
        StatusCode::OK,
        ResponseJson(ApiResponse::success(summaries)),
    ))
}

/// Create a new resource
pub async fn create_resource(
    State(state): State<AppState>,
    Json(input): Json<ResourceCreateInput>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Creating resource: {}", input.title);

    let resource = state.resources.create_resource(input).await?;
    Ok((
        StatusCode::CREATED,
        ResponseJson(ApiResponse::success(resource)),
    ))
}

/// Get a single resource by ID
pub async fn get_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let resource = state.resources.get_resource(&resource_id).await?;
    Ok((
        StatusCode::OK,
        ResponseJson(ApiResponse::success(resource)),
    ))
}

/// Delete a resource by ID
pub async fn delete_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Deleting resource: {}", resource_id);

    state.resources.delete_resource(&resource_id).await?;
    Ok((StatusCode::OK, ResponseJson(ApiResponse::success(()))))
}

/// List relationships touching a resource
pub async fn list_relationships(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let edges = state.relationships.list_for_resource(&resource_id).await?;
    Ok((StatusCode::OK, ResponseJson(ApiResponse::success(edges))))
}

/// Request body for creating a relationship
#[derive(Deserialize)]
pub struct CreateRelationshipRequest {
    pub target_id: String,
    pub relationship_type: RelationshipType,
    pub note: Option<String>,
}

/// Create a relationship from this resource to a target
pub async fn create_relationship(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
    Json(request): Json<CreateRelationshipRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!(
        "Creating relationship: {} -> {}",
        resource_id, request.target_id
    );

    // Both endpoints must exist before the edge does
    state.resources.get_resource(&resource_id).await?;
    state.resources.get_resource(&request.target_id).await?;

    let edge = state
        .relationships
        .create_relationship(
            &resource_id,
            &request.target_id,
            request.relationship_type,
            request.note,
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        ResponseJson(ApiResponse::success(edge)),
    ))
}

/// Delete a relationship by ID
pub async fn delete_relationship(
    State(state): State<AppState>,
    Path(relationship_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .relationships
        .delete_relationship(&relationship_id)
        .await?;
    Ok((StatusCode::OK, ResponseJson(ApiResponse::success(()))))
}

/// Rule-based related-resource suggestions for a resource
pub async fn suggest_relationships(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let subject = state.resources.get_resource(&resource_id).await?;
    let candidates = state.resources.list_resources().await?;
    let suggestions = suggest_related(&subject, &candidates);
    Ok((
        StatusCode::OK,
        ResponseJson(ApiResponse::success(suggestions)),
    ))
}
