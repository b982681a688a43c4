use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness check
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "name": "nacscope",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
