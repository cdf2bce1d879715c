// Core pipeline exports
pub mod pipeline;
pub mod prompts;

pub use pipeline::{OraclePipeline, PipelineError};
