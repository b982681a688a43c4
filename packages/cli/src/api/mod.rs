use axum::{
    routing::{delete, get, post, put},
    Router,
};
use nacscope_library::{RelationshipStorage, ResourceStorage, TagStorage, WebEnricher};
use nacscope_projects::ProjectManager;
use nacscope_scoping::SessionStore;
use sqlx::SqlitePool;
use std::sync::Arc;

pub mod enrichment;
pub mod health;
pub mod projects;
pub mod resources;
pub mod response;
pub mod sessions;
pub mod tags;

/// Shared handler state: one pool, one store per concern
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub resources: Arc<ResourceStorage>,
    pub relationships: Arc<RelationshipStorage>,
    pub tags: Arc<TagStorage>,
    pub projects: Arc<ProjectManager>,
    pub enricher: Arc<WebEnricher>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionStore>, pool: SqlitePool) -> Self {
        AppState {
            sessions,
            resources: Arc::new(ResourceStorage::new(pool.clone())),
            relationships: Arc::new(RelationshipStorage::new(pool.clone())),
            tags: Arc::new(TagStorage::new(pool.clone())),
            projects: Arc::new(ProjectManager::new(pool)),
            enricher: Arc::new(WebEnricher::new()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route(
            "/api/sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route(
            "/api/sessions/{id}",
            get(sessions::get_session)
                .put(sessions::save_session)
                .delete(sessions::delete_session),
        )
        .route("/api/sessions/{id}/analyze", post(sessions::analyze_session))
        .route(
            "/api/sessions/{id}/complete",
            post(sessions::complete_session),
        )
        .route(
            "/api/resources",
            get(resources::search_resources).post(resources::create_resource),
        )
        .route(
            "/api/resources/{id}",
            get(resources::get_resource).delete(resources::delete_resource),
        )
        .route(
            "/api/resources/{id}/relationships",
            get(resources::list_relationships).post(resources::create_relationship),
        )
        .route(
            "/api/resources/{id}/suggestions",
            get(resources::suggest_relationships),
        )
        .route("/api/relationships/{id}", delete(resources::delete_relationship))
        .route("/api/tags", get(tags::list_tags).post(tags::create_tag))
        .route(
            "/api/tags/{id}",
            put(tags::update_tag).delete(tags::delete_tag),
        )
        .route("/api/enrichment/crawl", post(enrichment::crawl))
        .route("/api/projects", get(projects::list_projects))
        .route("/api/projects/{id}", get(projects::get_project))
        .with_state(state)
}
