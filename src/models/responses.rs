use serde::{Deserialize, Serialize};

use crate::models::domain::{EnrichmentBundle, PipelineResult};

/// Response for the generate endpoint
///
/// Echoes the merged lookup inputs alongside the raw pipeline outputs so
/// the presentation layer can show both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    pub inputs: EnrichmentBundle,
    pub pipeline: PipelineResult,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
