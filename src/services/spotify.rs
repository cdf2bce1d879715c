use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::models::ArtistInfo;

/// Errors that can occur while talking to the Spotify Web API.
///
/// These never escape the client: `artist_info` absorbs them into a
/// `found = false` record.
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("No credentials configured")]
    MissingCredentials,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Music-catalog artist lookup (Spotify Web API, client-credentials flow)
///
/// The access token is cached until shortly before expiry and refreshed
/// lazily on the next lookup. Missing credentials make every lookup degrade
/// instead of failing the request.
pub struct SpotifyClient {
    api_url: String,
    accounts_url: String,
    credentials: Option<(String, String)>,
    client: Client,
    token: Mutex<Option<CachedToken>>,
}

impl SpotifyClient {
    pub fn new(
        api_url: String,
        accounts_url: String,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_url,
            accounts_url,
            credentials: client_id.zip(client_secret),
            client,
            token: Mutex::new(None),
        }
    }

    /// Look up an artist, degrading to a `found = false` record on any failure.
    ///
    /// This method never errors.
    pub async fn artist_info(&self, artist_name: &str) -> ArtistInfo {
        match self.search_artist(artist_name).await {
            Ok(Some(artist)) => artist_from_json(artist_name, &artist),
            Ok(None) => {
                tracing::debug!("No Spotify artist found for '{}'", artist_name);
                ArtistInfo::not_found(artist_name)
            }
            Err(e) => {
                tracing::warn!("Spotify lookup failed for '{}': {}", artist_name, e);
                ArtistInfo::not_found(artist_name)
            }
        }
    }

    async fn search_artist(&self, artist_name: &str) -> Result<Option<Value>, SpotifyError> {
        let token = self.access_token().await?;

        let query = format!("artist:{}", artist_name);
        let url = format!(
            "{}/v1/search?type=artist&limit=1&q={}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(&query)
        );

        tracing::debug!("Searching Spotify: {}", url);

        let response = self.client.get(&url).bearer_auth(&token).send().await?;

        if !response.status().is_success() {
            return Err(SpotifyError::Api(format!(
                "Failed to search artist: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let item = json
            .get("artists")
            .and_then(|a| a.get("items"))
            .and_then(|i| i.as_array())
            .ok_or_else(|| SpotifyError::InvalidResponse("Missing artists.items array".into()))?
            .first()
            .cloned();

        Ok(item)
    }

    /// Return a valid access token, refreshing through the client-credentials
    /// flow when the cached one is missing or stale.
    async fn access_token(&self) -> Result<String, SpotifyError> {
        let mut guard = self.token.lock().await;

        if let Some(cached) = guard.as_ref() {
            if cached.expires_at > Utc::now() {
                return Ok(cached.access_token.clone());
            }
        }

        let (client_id, client_secret) = self
            .credentials
            .as_ref()
            .ok_or(SpotifyError::MissingCredentials)?;

        let url = format!("{}/api/token", self.accounts_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpotifyError::Api(format!(
                "Failed to fetch token: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let access_token = json
            .get("access_token")
            .and_then(|t| t.as_str())
            .ok_or_else(|| SpotifyError::InvalidResponse("Missing access_token".into()))?
            .to_string();

        let expires_in = json
            .get("expires_in")
            .and_then(|e| e.as_i64())
            .unwrap_or(3600);

        // Refresh one minute early to avoid racing the expiry
        *guard = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at: Utc::now() + ChronoDuration::seconds(expires_in - 60),
        });

        Ok(access_token)
    }
}

fn artist_from_json(query: &str, artist: &Value) -> ArtistInfo {
    ArtistInfo {
        query: query.to_string(),
        found: true,
        name: artist
            .get("name")
            .and_then(|n| n.as_str())
            .unwrap_or(query)
            .to_string(),
        genres: artist
            .get("genres")
            .and_then(|g| g.as_array())
            .map(|genres| {
                genres
                    .iter()
                    .filter_map(|g| g.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        popularity: artist
            .get("popularity")
            .and_then(|p| p.as_u64())
            .map(|p| p as u32),
        followers: artist
            .get("followers")
            .and_then(|f| f.get("total"))
            .and_then(|t| t.as_u64()),
        spotify_url: artist
            .get("external_urls")
            .and_then(|e| e.get("spotify"))
            .and_then(|u| u.as_str())
            .map(str::to_string),
    }
}
