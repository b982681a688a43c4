// ABOUTME: HTTP request handlers for scoping sessions
// ABOUTME: CRUD plus the analyze and complete operations of the wizard

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use chrono::Utc;
use nacscope_core::{validate_session_document, validate_session_name, ScopingSession};
use nacscope_scoping::engine;
use serde::Deserialize;
use tracing::info;

use super::response::{ApiError, ApiResponse};
use super::AppState;

/// List all sessions (summaries only)
pub async fn list_sessions(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let summaries = state.sessions.list_sessions().await?;
    Ok((
        StatusCode::OK,
        ResponseJson(ApiResponse::success(summaries)),
    ))
}

/// Request body for creating a session
#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub name: String,
}

/// Create a new scoping session with an all-defaults document
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Creating session: {}", request.name);

    let errors = validate_session_name(&request.name);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let session = ScopingSession::new(nanoid::nanoid!(8), request.name);
    state.sessions.save_session(&session).await?;
    Ok((
        StatusCode::CREATED,
        ResponseJson(ApiResponse::success(session)),
    ))
}

/// Get a full session document by ID
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .sessions
        .load_session(&session_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Session not found: {}", session_id)))?;
    Ok((StatusCode::OK, ResponseJson(ApiResponse::success(session))))
}

/// Upsert a session document; the path ID wins over the body ID
pub async fn save_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(mut session): Json<ScopingSession>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Saving session: {}", session_id);

    session.id = session_id;
    let errors = validate_session_document(&session);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    session.updated_at = Utc::now();
    state.sessions.save_session(&session).await?;
    Ok((StatusCode::OK, ResponseJson(ApiResponse::success(session))))
}

/// Delete a session by ID
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Deleting session: {}", session_id);

    state.sessions.delete_session(&session_id).await?;
    Ok((StatusCode::OK, ResponseJson(ApiResponse::success(()))))
}

/// Regenerate the analysis slice from the decision engine
pub async fn analyze_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Regenerating analysis for session: {}", session_id);

    let mut session = state
        .sessions
        .load_session(&session_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Session not found: {}", session_id)))?;

    session.ai_analysis.pain_points = engine::identify_pain_points(
        &session.business_foundation,
        &session.current_environment,
    );
    session.ai_analysis.recommendations =
        engine::run_decision_tree(&session.current_environment);
    session.ai_analysis.suggested_requirements = engine::suggest_requirements(
        &session.business_foundation,
        &session.current_environment,
    );
    session.updated_at = Utc::now();

    state.sessions.save_session(&session).await?;
    Ok((StatusCode::OK, ResponseJson(ApiResponse::success(session))))
}

/// Mark a session complete and hand it off as a deployment project
pub async fn complete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Completing session: {}", session_id);

    let mut session = state
        .sessions
        .load_session(&session_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Session not found: {}", session_id)))?;

    session.completion_percentage = 100;
    session.updated_at = Utc::now();
    state.sessions.save_session(&session).await?;

    let project = state.projects.create_project_from_session(&session).await?;
    Ok((
        StatusCode::CREATED,
        ResponseJson(ApiResponse::success(project)),
    ))
}
