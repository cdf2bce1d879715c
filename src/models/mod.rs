// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ArtistInfo, EnrichmentBundle, PipelineResult, UserProfile};
pub use requests::GenerateRequest;
pub use responses::{ErrorResponse, GenerateResponse, HealthResponse};
