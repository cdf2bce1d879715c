// Service exports
pub mod generation;
pub mod openai;
pub mod spotify;
pub mod wikipedia;

pub use generation::{GenerationError, TextGenerator};
pub use openai::OpenAiClient;
pub use spotify::{SpotifyClient, SpotifyError};
pub use wikipedia::{WikipediaClient, WikipediaError};
