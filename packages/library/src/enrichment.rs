// ABOUTME: Web enrichment: fetch a URL and extract content relevant to a prompt
// ABOUTME: Each URL in a batch succeeds or fails on its own; no cross-URL abort

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{LibraryError, Result};

/// How many prompt-matched excerpts one result carries at most
const MAX_EXCERPTS: usize = 5;

/// What the enricher pulled out of one page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichmentResult {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub headings: Vec<String>,
    /// Paragraphs that matched the extraction prompt's keywords
    #[serde(default)]
    pub excerpts: Vec<String>,
}

pub struct WebEnricher {
    http_client: reqwest::Client,
}

impl Default for WebEnricher {
    fn default() -> Self {
        Self::new()
    }
}

impl WebEnricher {
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent("Mozilla/5.0 (compatible; NacscopeBot/1.0)")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { http_client }
    }

    /// Fetch one URL and extract content guided by the prompt
    pub async fn crawl_and_extract(
        &self,
        url: &str,
        extraction_prompt: &str,
    ) -> Result<EnrichmentResult> {
        info!("Crawling URL: {}", url);

        url::Url::parse(url).map_err(|e| LibraryError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| LibraryError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(LibraryError::Fetch {
                url: url.to_string(),
                reason: format!("HTTP status {}", response.status()),
            });
        }

        let html = response.text().await.map_err(|e| LibraryError::Fetch {
            url: url.to_string(),
            reason: format!("Failed to read response body: {}", e),
        })?;

        Ok(extract_from_html(url, extraction_prompt, &html))
    }

    /// Crawl a batch; each URL independently succeeds or fails
    pub async fn crawl_many(
        &self,
        urls: &[String],
        extraction_prompt: &str,
    ) -> Vec<(String, Result<EnrichmentResult>)> {
        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            let outcome = self.crawl_and_extract(url, extraction_prompt).await;
            if let Err(ref e) = outcome {
                debug!("Enrichment failed for {}: {}", url, e);
            }
            results.push((url.clone(), outcome));
        }
        results
    }
}

/// Keywords worth matching: lowercased prompt words longer than 3 chars
fn prompt_keywords(extraction_prompt: &str) -> Vec<String> {
    extraction_prompt
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.len() > 3)
        .map(|word| word.to_string())
        .collect()
}

/// Pure extraction over an already-fetched document
pub fn extract_from_html(url: &str, extraction_prompt: &str, html: &str) -> EnrichmentResult {
    let document = Html::parse_document(html);
    let keywords = prompt_keywords(extraction_prompt);

    let title = select_first_text(&document, "title");
    let description = select_meta_description(&document);

    let mut headings = Vec::new();
    for selector_str in ["h1", "h2"] {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                let text = element.text().collect::<Vec<_>>().join(" ");
                let text = text.trim();
                if !text.is_empty() {
                    headings.push(text.to_string());
                }
            }
        }
    }

    let mut excerpts = Vec::new();
    if let Ok(selector) = Selector::parse("p, li") {
        for element in document.select(&selector) {
            if excerpts.len() >= MAX_EXCERPTS {
                break;
            }
            let text = element.text().collect::<Vec<_>>().join(" ");
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            let lowered = text.to_lowercase();
            if keywords.is_empty() || keywords.iter().any(|word| lowered.contains(word)) {
                excerpts.push(text.to_string());
            }
        }
    }

    EnrichmentResult {
        url: url.to_string(),
        title,
        description,
        headings,
        excerpts,
    }
}

fn select_first_text(document: &Html, selector_str: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;
    document.select(&selector).next().map(|element| {
        element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    })
}

fn select_meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PAGE: &str = r#"<html>
        <head>
            <title>Zero Trust Network Access</title>
            <meta name="description" content="An overview of agentless NAC.">
        </head>
        <body>
            <h1>Why NAC</h1>
            <h2>Deployment options</h2>
            <p>Agentless discovery finds every device on the network.</p>
            <p>Pricing starts at a flat per-device rate.</p>
            <li>RADIUS is the enforcement backbone.</li>
        </body>
    </html>"#;

    #[test]
    fn extraction_matches_prompt_keywords() {
        let result = extract_from_html("https://example.com", "agentless discovery", PAGE);
        assert_eq!(result.title.as_deref(), Some("Zero Trust Network Access"));
        assert_eq!(
            result.description.as_deref(),
            Some("An overview of agentless NAC.")
        );
        assert_eq!(result.headings, vec!["Why NAC", "Deployment options"]);
        assert_eq!(result.excerpts.len(), 1);
        assert!(result.excerpts[0].contains("Agentless discovery"));
    }

    #[test]
    fn empty_prompt_keeps_all_paragraphs() {
        let result = extract_from_html("https://example.com", "", PAGE);
        assert_eq!(result.excerpts.len(), 3);
    }

    #[tokio::test]
    async fn crawl_many_is_per_url_independent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/good"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/bad"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let enricher = WebEnricher::new();
        let urls = vec![
            format!("{}/good", server.uri()),
            format!("{}/bad", server.uri()),
            "not a url".to_string(),
        ];
        let results = enricher.crawl_many(&urls, "device").await;

        assert_eq!(results.len(), 3);
        assert!(results[0].1.is_ok());
        assert!(matches!(results[1].1, Err(LibraryError::Fetch { .. })));
        assert!(matches!(results[2].1, Err(LibraryError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_before_fetch() {
        let enricher = WebEnricher::new();
        assert!(matches!(
            enricher.crawl_and_extract("::::", "anything").await,
            Err(LibraryError::InvalidUrl(_))
        ));
    }
}
