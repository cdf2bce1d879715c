use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while talking to the MediaWiki API.
///
/// These never escape the client: `fetch_summary` absorbs them into a
/// placeholder string.
#[derive(Debug, Error)]
pub enum WikipediaError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("No article found for: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Encyclopedia summary client (MediaWiki action API)
///
/// Resolves the topic through a search query first, the equivalent of the
/// original auto-suggest behavior, then pulls a plain-text extract capped
/// at a fixed sentence count.
pub struct WikipediaClient {
    api_url: String,
    summary_sentences: u8,
    client: Client,
}

impl WikipediaClient {
    pub fn new(api_url: String, summary_sentences: u8) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_url,
            summary_sentences,
            client,
        }
    }

    /// Fetch a short summary for the topic, degrading on any failure.
    ///
    /// An empty topic yields an empty string; everything else yields either
    /// the extract or the not-found placeholder. This method never errors.
    pub async fn fetch_summary(&self, topic: &str) -> String {
        if topic.trim().is_empty() {
            return String::new();
        }

        match self.try_fetch(topic).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Wikipedia lookup failed for '{}': {}", topic, e);
                format!("Resumo não encontrado para '{}'.", topic)
            }
        }
    }

    async fn try_fetch(&self, topic: &str) -> Result<String, WikipediaError> {
        let title = self.resolve_title(topic).await?;

        let url = format!(
            "{}?action=query&prop=extracts&exsentences={}&explaintext=1&redirects=1&format=json&titles={}",
            self.api_url,
            self.summary_sentences,
            urlencoding::encode(&title)
        );

        tracing::debug!("Fetching extract from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(WikipediaError::Api(format!(
                "Failed to fetch extract: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let pages = json
            .get("query")
            .and_then(|q| q.get("pages"))
            .and_then(|p| p.as_object())
            .ok_or_else(|| WikipediaError::InvalidResponse("Missing pages object".into()))?;

        let extract = pages
            .values()
            .next()
            .and_then(|page| page.get("extract"))
            .and_then(|e| e.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| WikipediaError::NotFound(topic.to_string()))?;

        Ok(extract.to_string())
    }

    /// Resolve the best article title for a free-text topic
    async fn resolve_title(&self, topic: &str) -> Result<String, WikipediaError> {
        let url = format!(
            "{}?action=query&list=search&srlimit=1&format=json&srsearch={}",
            self.api_url,
            urlencoding::encode(topic)
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(WikipediaError::Api(format!(
                "Failed to search: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let title = json
            .get("query")
            .and_then(|q| q.get("search"))
            .and_then(|s| s.as_array())
            .and_then(|results| results.first())
            .and_then(|result| result.get("title"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| WikipediaError::NotFound(topic.to_string()))?;

        Ok(title.to_string())
    }
}
