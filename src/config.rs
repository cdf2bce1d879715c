use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub wikipedia: WikipediaSettings,
    #[serde(default)]
    pub spotify: SpotifySettings,
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct WikipediaSettings {
    #[serde(default = "default_wikipedia_api_url")]
    pub api_url: String,
    #[serde(default = "default_summary_sentences")]
    pub summary_sentences: u8,
}

impl Default for WikipediaSettings {
    fn default() -> Self {
        Self {
            api_url: default_wikipedia_api_url(),
            summary_sentences: default_summary_sentences(),
        }
    }
}

fn default_wikipedia_api_url() -> String { "https://pt.wikipedia.org/w/api.php".to_string() }
fn default_summary_sentences() -> u8 { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifySettings {
    #[serde(default = "default_spotify_api_url")]
    pub api_url: String,
    #[serde(default = "default_spotify_accounts_url")]
    pub accounts_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Default for SpotifySettings {
    fn default() -> Self {
        Self {
            api_url: default_spotify_api_url(),
            accounts_url: default_spotify_accounts_url(),
            client_id: None,
            client_secret: None,
        }
    }
}

fn default_spotify_api_url() -> String { "https://api.spotify.com".to_string() }
fn default_spotify_accounts_url() -> String { "https://accounts.spotify.com".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "default_generation_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            api_url: default_generation_api_url(),
            api_key: String::new(),
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

fn default_generation_api_url() -> String { "https://api.openai.com/v1".to_string() }
fn default_model() -> String { "gpt-4o-mini".to_string() }
fn default_temperature() -> f64 { 0.8 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ORACULO_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ORACULO_)
            // e.g., ORACULO_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ORACULO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Fold in credentials from the conventional environment variables
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ORACULO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Pull API credentials from their conventional environment variables.
///
/// We check the plain names first (OPENAI_API_KEY, SPOTIFY_CLIENT_ID, ...),
/// then the SPOTIPY_-prefixed names the original deployment used.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let openai_api_key = env::var("OPENAI_API_KEY").ok();
    let spotify_client_id = env::var("SPOTIFY_CLIENT_ID")
        .or_else(|_| env::var("SPOTIPY_CLIENT_ID"))
        .ok();
    let spotify_client_secret = env::var("SPOTIFY_CLIENT_SECRET")
        .or_else(|_| env::var("SPOTIPY_CLIENT_SECRET"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = openai_api_key {
        builder = builder.set_override("generation.api_key", api_key)?;
    }
    if let Some(client_id) = spotify_client_id {
        builder = builder.set_override("spotify.client_id", client_id)?;
    }
    if let Some(client_secret) = spotify_client_secret {
        builder = builder.set_override("spotify.client_secret", client_secret)?;
    }

    builder.build()
}
