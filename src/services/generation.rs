use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when calling the text-generation service
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// A single-shot text-generation capability.
///
/// The pipeline holds this behind an `Arc<dyn TextGenerator>` so tests can
/// substitute a scripted fake for the real provider client.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one instruction and return the raw generated text
    async fn generate(&self, instruction: &str) -> Result<String, GenerationError>;
}
