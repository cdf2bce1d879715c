use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::services::generation::{GenerationError, TextGenerator};

/// OpenAI-compatible chat-completions client
///
/// Sends each pipeline instruction as a single user message and returns the
/// first choice's content. Non-streaming; one request per stage.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a new client against an OpenAI-compatible endpoint
    pub fn new(base_url: String, api_key: String, model: String, temperature: f64) -> Self {
        // Generation calls are slow; allow well beyond the lookup timeout
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            temperature,
            client,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                { "role": "user", "content": instruction }
            ],
        });

        tracing::debug!("Sending generation request ({} chars)", instruction.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(GenerationError::Api(format!(
                "Generation request failed: {} - {}",
                status, detail
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("Failed to parse completion: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::InvalidResponse("Completion has no content".into()))
    }
}
