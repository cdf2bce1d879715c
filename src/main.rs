mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use config::Settings;
use core::OraclePipeline;
use routes::oracle::AppState;
use services::{OpenAiClient, SpotifyClient, WikipediaClient};
use std::sync::Arc;
use tracing::{error, info, warn};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Oráculo Estocástico backend...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    if settings.generation.api_key.is_empty() {
        warn!("OPENAI_API_KEY not set. Configure your LLM provider or set OPENAI_API_KEY.");
    }
    if settings.spotify.client_id.is_none() || settings.spotify.client_secret.is_none() {
        warn!("Spotify credentials not set; artist lookups will return not-found records");
    }

    // Initialize lookup clients
    let wikipedia = Arc::new(WikipediaClient::new(
        settings.wikipedia.api_url,
        settings.wikipedia.summary_sentences,
    ));

    let spotify = Arc::new(SpotifyClient::new(
        settings.spotify.api_url,
        settings.spotify.accounts_url,
        settings.spotify.client_id,
        settings.spotify.client_secret,
    ));

    info!("Lookup clients initialized");

    // Initialize the generation client and the pipeline over it
    let generator = Arc::new(OpenAiClient::new(
        settings.generation.api_url,
        settings.generation.api_key,
        settings.generation.model.clone(),
        settings.generation.temperature,
    ));

    let pipeline = OraclePipeline::new(generator);

    info!("Pipeline initialized (model: {})", settings.generation.model);

    // Build application state
    let app_state = AppState {
        wikipedia,
        spotify,
        pipeline,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
