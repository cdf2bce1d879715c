use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::OraclePipeline;
use crate::models::{EnrichmentBundle, ErrorResponse, GenerateRequest, GenerateResponse, HealthResponse};
use crate::services::{SpotifyClient, WikipediaClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub wikipedia: Arc<WikipediaClient>,
    pub spotify: Arc<SpotifyClient>,
    pub pipeline: OraclePipeline,
}

/// Configure all oracle routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/generate", web::post().to(generate));
}

/// Root endpoint, a liveness message for the frontend
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Backend do Oráculo Estocástico está funcionando!",
    }))
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Generate an oracle reading
///
/// POST /api/v1/generate
///
/// Request body:
/// ```json
/// {
///   "nome": "string",
///   "idade": 30,
///   "signo": "string",
///   "genero_musical": "string",
///   "artista_favorito": "string",
///   "time_futebol": "string",
///   "cidade": "string"
/// }
/// ```
///
/// Runs the three lookups (each degrades to a placeholder on failure),
/// feeds the merged bundle through the five-stage pipeline, and returns
/// the bundle plus the raw stage outputs. A failing generation stage
/// turns into one generic 500; no partial pipeline output is exposed.
async fn generate(
    state: web::Data<AppState>,
    req: web::Json<GenerateRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for generate request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user = req.into_inner().into_profile();

    tracing::info!(
        "Generating reading for '{}' (sign: {}, team: {}, city: {})",
        user.name,
        user.sign,
        user.football_team,
        user.city
    );

    // Lookups run sequentially; each absorbs its own failures
    let sign_summary = state.wikipedia.fetch_summary(&user.sign).await;
    let team_summary = state.wikipedia.fetch_summary(&user.football_team).await;
    let city_summary = state.wikipedia.fetch_summary(&user.city).await;
    let artist = state.spotify.artist_info(&user.favorite_artist).await;

    let bundle = EnrichmentBundle {
        user,
        sign_summary,
        team_summary,
        city_summary,
        artist,
    };

    match state.pipeline.run(&bundle).await {
        Ok(result) => {
            tracing::info!("Pipeline completed for '{}'", bundle.user.name);
            HttpResponse::Ok().json(GenerateResponse {
                status: "ok".to_string(),
                inputs: bundle,
                pipeline: result,
            })
        }
        Err(e) => {
            tracing::error!("Pipeline failed for '{}': {}", bundle.user.name, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Pipeline execution failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
