// Pipeline integration tests, driven through a scripted generator

use async_trait::async_trait;
use oraculo::core::{OraclePipeline, PipelineError};
use oraculo::models::{ArtistInfo, EnrichmentBundle, UserProfile};
use oraculo::services::{GenerationError, TextGenerator};
use std::sync::{Arc, Mutex};

/// Scripted generator: recognizes the stage from the instruction prefix,
/// records every prompt, and fails on a chosen stage when asked to.
struct ScriptedGenerator {
    prompts: Mutex<Vec<String>>,
    fail_stage: Option<&'static str>,
}

impl ScriptedGenerator {
    fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail_stage: None,
        }
    }

    fn failing_on(stage: &'static str) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail_stage: Some(stage),
        }
    }

    fn recorded(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

fn stage_of(instruction: &str) -> &'static str {
    if instruction.starts_with("Você é um oráculo poético") {
        "combine"
    } else if instruction.starts_with("Extraia as ENTIDADES NOMEADAS") {
        "ner"
    } else if instruction.starts_with("Extraia as 12 palavras-chave") {
        "keywords"
    } else if instruction.starts_with("Classifique o perfil") {
        "classification"
    } else if instruction.starts_with("Você é o Oráculo Estocástico") {
        "prediction"
    } else {
        "unknown"
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(instruction.to_string());

        let stage = stage_of(instruction);
        if self.fail_stage == Some(stage) {
            return Err(GenerationError::Api("scripted failure".to_string()));
        }

        Ok(format!("resultado de {}", stage))
    }
}

fn ari_profile() -> UserProfile {
    UserProfile {
        name: "Ari".to_string(),
        age: 30,
        sign: "Leão".to_string(),
        musical_genre: "MPB".to_string(),
        favorite_artist: "Chico Buarque".to_string(),
        football_team: "Flamengo".to_string(),
        city: "Rio de Janeiro".to_string(),
    }
}

fn degraded_bundle() -> EnrichmentBundle {
    let user = ari_profile();
    EnrichmentBundle {
        sign_summary: format!("Resumo não encontrado para '{}'.", user.sign),
        team_summary: format!("Resumo não encontrado para '{}'.", user.football_team),
        city_summary: format!("Resumo não encontrado para '{}'.", user.city),
        artist: ArtistInfo::not_found(&user.favorite_artist),
        user,
    }
}

#[tokio::test]
async fn test_degraded_lookups_still_run_all_five_stages() {
    let generator = Arc::new(ScriptedGenerator::new());
    let pipeline = OraclePipeline::new(generator.clone());

    let bundle = degraded_bundle();

    // Placeholder summaries are still non-empty inputs
    assert!(!bundle.sign_summary.is_empty());
    assert!(!bundle.team_summary.is_empty());
    assert!(!bundle.city_summary.is_empty());
    assert!(!bundle.artist.found);

    let result = pipeline.run(&bundle).await.unwrap();

    assert_eq!(generator.recorded().len(), 5);
    assert!(!result.combined_doc.is_empty());
    assert!(!result.ner_json.is_empty());
    assert!(!result.keywords_json.is_empty());
    assert!(!result.classification_json.is_empty());
    assert!(!result.prediction_json.is_empty());
    assert!(result.spacy_ner.is_none());
}

#[tokio::test]
async fn test_combine_runs_first_and_prediction_last() {
    let generator = Arc::new(ScriptedGenerator::new());
    let pipeline = OraclePipeline::new(generator.clone());

    pipeline.run(&degraded_bundle()).await.unwrap();

    let prompts = generator.recorded();
    assert_eq!(prompts.len(), 5);
    assert_eq!(stage_of(&prompts[0]), "combine");
    assert_eq!(stage_of(&prompts[4]), "prediction");

    // The middle three all derive from the combined document
    for prompt in &prompts[1..4] {
        assert!(prompt.contains("resultado de combine"));
    }
}

#[tokio::test]
async fn test_prediction_prompt_carries_literal_stage_outputs() {
    let generator = Arc::new(ScriptedGenerator::new());
    let pipeline = OraclePipeline::new(generator.clone());

    pipeline.run(&degraded_bundle()).await.unwrap();

    let prompts = generator.recorded();
    let prediction_prompt = prompts.last().unwrap();

    assert!(prediction_prompt.contains("resultado de combine"));
    assert!(prediction_prompt.contains("resultado de ner"));
    assert!(prediction_prompt.contains("resultado de keywords"));
    assert!(prediction_prompt.contains("resultado de classification"));
}

#[tokio::test]
async fn test_found_artist_record_is_substituted_verbatim() {
    let generator = Arc::new(ScriptedGenerator::new());
    let pipeline = OraclePipeline::new(generator.clone());

    let mut bundle = degraded_bundle();
    bundle.artist = ArtistInfo {
        query: "Chico Buarque".to_string(),
        found: true,
        name: "Chico Buarque".to_string(),
        genres: vec!["mpb".to_string()],
        popularity: Some(60),
        followers: Some(500000),
        spotify_url: Some("https://open.spotify.com/artist/abc".to_string()),
    };

    pipeline.run(&bundle).await.unwrap();

    let prompts = generator.recorded();
    let combine_prompt = &prompts[0];

    assert!(combine_prompt.contains("\"found\": true"));
    assert!(combine_prompt.contains("\"name\": \"Chico Buarque\""));
    assert!(combine_prompt.contains("\"popularity\": 60"));
    assert!(combine_prompt.contains("https://open.spotify.com/artist/abc"));
}

#[tokio::test]
async fn test_generation_failure_propagates_as_single_error() {
    let generator = Arc::new(ScriptedGenerator::failing_on("classification"));
    let pipeline = OraclePipeline::new(generator.clone());

    let err = pipeline.run(&degraded_bundle()).await.unwrap_err();

    match err {
        PipelineError::Stage { stage, .. } => assert_eq!(stage, "classification"),
        other => panic!("unexpected error: {}", other),
    }

    // No prediction call was ever issued
    let stages: Vec<&str> = generator
        .recorded()
        .iter()
        .map(|p| stage_of(p))
        .collect();
    assert!(!stages.contains(&"prediction"));
}
