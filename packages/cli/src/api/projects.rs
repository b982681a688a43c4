// ABOUTME: HTTP request handlers for deployment projects
// ABOUTME: Projects are created through session completion; this exposes list/get

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};

use super::response::{ApiError, ApiResponse};
use super::AppState;

/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let projects = state.projects.list_projects().await?;
    Ok((
        StatusCode::OK,
        ResponseJson(ApiResponse::success(projects)),
    ))
}

/// Get a single project by ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state
        .projects
        .get_project(&project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project not found: {}", project_id)))?;
    Ok((
        StatusCode::OK,
        ResponseJson(ApiResponse::success(project)),
    ))
}
