//! Oráculo Estocástico - backend for an entertainment fortune generator
//!
//! Collects a handful of user facts, enriches them through Wikipedia and
//! Spotify lookups, and runs a fixed five-stage LLM prompt pipeline over
//! the merged bundle. All generated output is fictional by design.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{OraclePipeline, PipelineError};
pub use models::{
    ArtistInfo, EnrichmentBundle, GenerateRequest, GenerateResponse, PipelineResult, UserProfile,
};
pub use services::{GenerationError, TextGenerator};
