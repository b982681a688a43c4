// ABOUTME: Integration tests driving the API router in-process
// ABOUTME: Covers the session lifecycle through completion and the project hand-off

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use nacscope_cli::api::{create_router, AppState};
use nacscope_library::init_library_schema;
use nacscope_projects::ProjectManager;
use nacscope_scoping::SqliteSessionStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn test_router() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SqliteSessionStore::connect(dir.path().join("nacscope.db"))
        .await
        .expect("connect store");
    let pool = store.pool().clone();
    init_library_schema(&pool).await.expect("library schema");
    ProjectManager::new(pool.clone())
        .init_schema()
        .await
        .expect("projects schema");

    (create_router(AppState::new(Arc::new(store), pool)), dir)
}

async fn request_json(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn session_lifecycle_through_completion() {
    let (router, _dir) = test_router().await;

    // Create
    let (status, body) = request_json(
        &router,
        post("/api/sessions", json!({"name": "Acme rollout"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    let session_id = body["data"]["id"].as_str().expect("session id").to_string();
    assert_eq!(body["data"]["completion_percentage"], json!(0));

    // Listed
    let (status, body) = request_json(&router, get("/api/sessions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    // Analyze an empty environment: critical pain point, no recommendations
    let (status, body) = request_json(
        &router,
        post(&format!("/api/sessions/{}/analyze", session_id), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let pain_points = body["data"]["ai_analysis"]["pain_points"]
        .as_array()
        .expect("pain points");
    assert!(pain_points
        .iter()
        .any(|p| p["title"] == json!("No Network Access Control")));
    assert_eq!(
        body["data"]["ai_analysis"]["recommendations"],
        json!([])
    );

    // Complete: hands off to a project
    let (status, body) = request_json(
        &router,
        post(&format!("/api/sessions/{}/complete", session_id), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["source_session_id"], json!(session_id.clone()));
    let project_id = body["data"]["id"].as_str().expect("project id").to_string();

    let (status, body) = request_json(&router, get(&format!("/api/projects/{}", project_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("planned"));

    // The completed session persisted at 100
    let (_, body) = request_json(&router, get(&format!("/api/sessions/{}", session_id))).await;
    assert_eq!(body["data"]["completion_percentage"], json!(100));
}

#[tokio::test]
async fn invalid_session_name_is_unprocessable() {
    let (router, _dir) = test_router().await;
    let (status, body) =
        request_json(&router, post("/api/sessions", json!({"name": "   "}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn missing_session_is_not_found() {
    let (router, _dir) = test_router().await;
    let (status, _) = request_json(&router, get("/api/sessions/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resource_search_and_relationships() {
    let (router, _dir) = test_router().await;

    let (status, body) = request_json(
        &router,
        post(
            "/api/resources",
            json!({"title": "802.1X rollout guide", "kind": "guide", "tags": ["wired"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let first = body["data"]["id"].as_str().expect("resource id").to_string();

    let (_, body) = request_json(
        &router,
        post(
            "/api/resources",
            json!({"title": "RADIUS tool", "kind": "tool", "tags": ["wired"]}),
        ),
    )
    .await;
    let second = body["data"]["id"].as_str().expect("resource id").to_string();

    let (status, body) = request_json(&router, get("/api/resources?q=guide&tag=wired")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    // Self-link rejected
    let (status, _) = request_json(
        &router,
        post(
            &format!("/api/resources/{}/relationships", first),
            json!({"target_id": first, "relationship_type": "related_to"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Valid edge
    let (status, _) = request_json(
        &router,
        post(
            &format!("/api/resources/{}/relationships", first),
            json!({"target_id": second, "relationship_type": "requires"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Suggestions see the shared tag
    let (status, body) = request_json(
        &router,
        get(&format!("/api/resources/{}/suggestions", first)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let suggestions = body["data"].as_array().expect("suggestions");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["resource_id"], json!(second.clone()));
}
