use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::UserProfile;

/// Request to generate an oracle reading
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "name", rename = "nome")]
    pub name: String,
    #[serde(alias = "age", rename = "idade")]
    pub age: u8,
    #[validate(length(min = 1))]
    #[serde(alias = "sign", rename = "signo")]
    pub sign: String,
    #[validate(length(min = 1))]
    #[serde(alias = "musical_genre", rename = "genero_musical")]
    pub musical_genre: String,
    #[validate(length(min = 1))]
    #[serde(alias = "favorite_artist", rename = "artista_favorito")]
    pub favorite_artist: String,
    #[validate(length(min = 1))]
    #[serde(alias = "football_team", rename = "time_futebol")]
    pub football_team: String,
    #[validate(length(min = 1))]
    #[serde(alias = "city", rename = "cidade")]
    pub city: String,
}

impl GenerateRequest {
    /// Build the request-scoped profile record
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            name: self.name,
            age: self.age,
            sign: self.sign,
            musical_genre: self.musical_genre,
            favorite_artist: self.favorite_artist,
            football_team: self.football_team,
            city: self.city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_rejects_empty_name() {
        let request = GenerateRequest {
            name: String::new(),
            age: 30,
            sign: "Leão".to_string(),
            musical_genre: "MPB".to_string(),
            favorite_artist: "Chico Buarque".to_string(),
            football_team: "Flamengo".to_string(),
            city: "Rio de Janeiro".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_deserializes_portuguese_wire_names() {
        let body = r#"{
            "nome": "Ari",
            "idade": 30,
            "signo": "Leão",
            "genero_musical": "MPB",
            "artista_favorito": "Chico Buarque",
            "time_futebol": "Flamengo",
            "cidade": "Rio de Janeiro"
        }"#;

        let request: GenerateRequest = serde_json::from_str(body).unwrap();
        assert!(request.validate().is_ok());

        let profile = request.into_profile();
        assert_eq!(profile.name, "Ari");
        assert_eq!(profile.football_team, "Flamengo");
    }
}
