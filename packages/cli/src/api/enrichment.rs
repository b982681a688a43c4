// ABOUTME: HTTP request handler for web enrichment
// ABOUTME: Crawls a batch of URLs; each result succeeds or fails on its own

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use nacscope_library::EnrichmentResult;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::response::{ApiError, ApiResponse};
use super::AppState;

/// Request body for the crawl endpoint
#[derive(Deserialize)]
pub struct CrawlRequest {
    pub urls: Vec<String>,
    #[serde(default)]
    pub extraction_prompt: String,
}

/// Per-URL outcome returned to the caller
#[derive(Serialize)]
pub struct CrawlOutcome {
    pub url: String,
    pub result: Option<EnrichmentResult>,
    pub error: Option<String>,
}

/// Crawl each URL and extract prompt-guided content
pub async fn crawl(
    State(state): State<AppState>,
    Json(request): Json<CrawlRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Crawling {} URLs", request.urls.len());

    if request.urls.is_empty() {
        return Err(ApiError::Library(
            nacscope_library::LibraryError::InvalidInput("No URLs provided".to_string()),
        ));
    }

    let results = state
        .enricher
        .crawl_many(&request.urls, &request.extraction_prompt)
        .await;

    let outcomes: Vec<CrawlOutcome> = results
        .into_iter()
        .map(|(url, outcome)| match outcome {
            Ok(result) => CrawlOutcome {
                url,
                result: Some(result),
                error: None,
            },
            Err(e) => CrawlOutcome {
                url,
                result: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    Ok((
        StatusCode::OK,
        ResponseJson(ApiResponse::success(outcomes)),
    ))
}
