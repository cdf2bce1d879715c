use serde::{Deserialize, Serialize};

/// User-provided facts, captured once per request and never mutated.
///
/// Wire names keep the Portuguese field names of the public API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "idade")]
    pub age: u8,
    #[serde(rename = "signo")]
    pub sign: String,
    #[serde(rename = "genero_musical")]
    pub musical_genre: String,
    #[serde(rename = "artista_favorito")]
    pub favorite_artist: String,
    #[serde(rename = "time_futebol")]
    pub football_team: String,
    #[serde(rename = "cidade")]
    pub city: String,
}

/// Result of the music-catalog artist lookup.
///
/// Every field past `query` is best-effort: a failed lookup yields
/// `found = false` with the queried name echoed back and everything
/// else empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistInfo {
    pub query: String,
    pub found: bool,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub popularity: Option<u32>,
    pub followers: Option<u64>,
    pub spotify_url: Option<String>,
}

impl ArtistInfo {
    /// Placeholder record for a lookup that found nothing
    pub fn not_found(query: &str) -> Self {
        Self {
            query: query.to_string(),
            found: false,
            name: query.to_string(),
            genres: Vec::new(),
            popularity: None,
            followers: None,
            spotify_url: None,
        }
    }
}

/// One request's merged lookup results, consumed exactly once by the
/// prompt pipeline and echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentBundle {
    pub user: UserProfile,
    #[serde(rename = "wiki_signo")]
    pub sign_summary: String,
    #[serde(rename = "wiki_time")]
    pub team_summary: String,
    #[serde(rename = "wiki_cidade")]
    pub city_summary: String,
    #[serde(rename = "artist_info")]
    pub artist: ArtistInfo,
}

/// Raw outputs of the five pipeline stages.
///
/// Each field is the generation service's text as-is. Stages are
/// instructed to emit JSON but nothing here parses or validates it;
/// the presentation layer deals with whatever came back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub combined_doc: String,
    pub ner_json: String,
    pub keywords_json: String,
    pub classification_json: String,
    pub prediction_json: String,
    /// Legacy slot for a non-LLM entity extraction pass. Nothing
    /// populates it; kept so the response schema stays stable.
    #[serde(default)]
    pub spacy_ner: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_artist_echoes_query() {
        let artist = ArtistInfo::not_found("Chico Buarque");
        assert!(!artist.found);
        assert_eq!(artist.name, "Chico Buarque");
        assert!(artist.genres.is_empty());
        assert!(artist.popularity.is_none());
        assert!(artist.followers.is_none());
        assert!(artist.spotify_url.is_none());
    }

    #[test]
    fn test_profile_wire_names() {
        let profile = UserProfile {
            name: "Ari".to_string(),
            age: 30,
            sign: "Leão".to_string(),
            musical_genre: "MPB".to_string(),
            favorite_artist: "Chico Buarque".to_string(),
            football_team: "Flamengo".to_string(),
            city: "Rio de Janeiro".to_string(),
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["nome"], "Ari");
        assert_eq!(json["idade"], 30);
        assert_eq!(json["time_futebol"], "Flamengo");
    }

    #[test]
    fn test_pipeline_result_serializes_null_spacy_ner() {
        let result = PipelineResult {
            combined_doc: "doc".to_string(),
            ner_json: "{}".to_string(),
            keywords_json: "{}".to_string(),
            classification_json: "{}".to_string(),
            prediction_json: "{}".to_string(),
            spacy_ner: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["spacy_ner"].is_null());
    }
}
