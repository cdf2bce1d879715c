use std::sync::Arc;
use thiserror::Error;

use crate::core::prompts;
use crate::models::{EnrichmentBundle, PipelineResult};
use crate::services::{GenerationError, TextGenerator};

/// Errors that can abort a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Stage '{stage}' failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: GenerationError,
    },

    #[error("Failed to serialize pipeline inputs: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Fixed five-stage prompt pipeline
///
/// # Pipeline Stages
/// 1. Combine profile, summaries and artist record into one document
/// 2. Named-entity listing over the combined document
/// 3. Ranked keyword extraction over the combined document
/// 4. Creative classification over the combined document
/// 5. Final prediction fed with everything above plus the profile
///
/// Stage 1 gates everything. Stages 2-4 only read the combined document, so
/// they are issued together; stage 5 waits for all three. Any stage failure
/// aborts the run with no partial result, and no stage output is parsed or
/// validated anywhere.
#[derive(Clone)]
pub struct OraclePipeline {
    generator: Arc<dyn TextGenerator>,
}

impl OraclePipeline {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Run all five stages over one enrichment bundle
    pub async fn run(&self, bundle: &EnrichmentBundle) -> Result<PipelineResult, PipelineError> {
        let user_json = serde_json::to_string_pretty(&bundle.user)?;
        let artist_json = serde_json::to_string_pretty(&bundle.artist)?;

        let combined_doc = self
            .invoke(
                "combine",
                prompts::render_combine(
                    &user_json,
                    &bundle.sign_summary,
                    &bundle.team_summary,
                    &bundle.city_summary,
                    &artist_json,
                ),
            )
            .await?;

        let (ner_json, keywords_json, classification_json) = tokio::try_join!(
            self.invoke("ner", prompts::render_ner(&combined_doc)),
            self.invoke("keywords", prompts::render_keywords(&combined_doc)),
            self.invoke("classification", prompts::render_classification(&combined_doc)),
        )?;

        let prediction_json = self
            .invoke(
                "prediction",
                prompts::render_prediction(
                    &combined_doc,
                    &ner_json,
                    &keywords_json,
                    &classification_json,
                    &user_json,
                ),
            )
            .await?;

        Ok(PipelineResult {
            combined_doc,
            ner_json,
            keywords_json,
            classification_json,
            prediction_json,
            spacy_ner: None,
        })
    }

    async fn invoke(
        &self,
        stage: &'static str,
        instruction: String,
    ) -> Result<String, PipelineError> {
        tracing::debug!("Running pipeline stage: {}", stage);

        self.generator
            .generate(&instruction)
            .await
            .map_err(|source| PipelineError::Stage { stage, source })
    }
}
