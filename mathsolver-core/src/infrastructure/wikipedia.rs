//! MediaWiki search client backing the encyclopedia lookup tool.

use crate::config::WikipediaSettings;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// MediaWiki rejects search strings longer than this.
const MAX_QUERY_LENGTH: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Error)]
pub enum EncyclopediaError {
    #[error("encyclopedia request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("encyclopedia returned an unexpected payload: {0}")]
    InvalidResponse(String),
}

/// Free-text search returning page summaries, best match first.
#[async_trait]
pub trait Encyclopedia: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<PageSummary>, EncyclopediaError>;
}

#[derive(Clone)]
pub struct WikipediaClient {
    http: Client,
    endpoint: String,
    top_k_results: usize,
}

impl WikipediaClient {
    pub fn new(endpoint: impl Into<String>, top_k_results: usize) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            top_k_results,
        }
    }

    pub fn from_settings(settings: &WikipediaSettings) -> Self {
        Self::new(settings.endpoint.clone(), settings.top_k_results)
    }

    async fn search_titles(&self, query: &str) -> Result<Vec<String>, EncyclopediaError> {
        let limit = self.top_k_results.to_string();
        let response: SearchResponse = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("format", "json"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let query = response
            .query
            .ok_or_else(|| EncyclopediaError::InvalidResponse("missing query field".into()))?;
        Ok(query.search.into_iter().map(|hit| hit.title).collect())
    }

    async fn page_summary(&self, title: &str) -> Result<Option<PageSummary>, EncyclopediaError> {
        let response: ExtractResponse = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("format", "json"),
                ("formatversion", "2"),
                ("titles", title),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let page = response
            .query
            .and_then(|query| query.pages.into_iter().next())
            .filter(|page| !page.missing);

        Ok(page.and_then(|page| {
            let summary = page.extract.unwrap_or_default().trim().to_string();
            if summary.is_empty() {
                None
            } else {
                Some(PageSummary {
                    title: page.title,
                    summary,
                })
            }
        }))
    }
}

#[async_trait]
impl Encyclopedia for WikipediaClient {
    async fn search(&self, query: &str) -> Result<Vec<PageSummary>, EncyclopediaError> {
        let query = truncate_query(query);
        info!(query, "Searching Wikipedia");

        let titles = self.search_titles(query).await?;
        debug!(hits = titles.len(), "Wikipedia search returned titles");

        let mut summaries = Vec::with_capacity(titles.len());
        for title in titles {
            if let Some(summary) = self.page_summary(&title).await? {
                summaries.push(summary);
            }
        }
        Ok(summaries)
    }
}

fn truncate_query(query: &str) -> &str {
    match query.char_indices().nth(MAX_QUERY_LENGTH) {
        Some((index, _)) => &query[..index],
        None => query,
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: Vec<ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    title: String,
    extract: Option<String>,
    #[serde(default)]
    missing: bool,
}
