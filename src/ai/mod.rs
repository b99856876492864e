//! Generative AI integrations
//!
//! Gemini-backed text generation for the farming chat assistant and vision
//! diagnosis of cotton plant photos, plus in-memory mocks of both.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiTextClient, GeminiVisionClient};
pub use mock::{MockDiagnosisClient, MockTextGenerator};

use crate::image::ImageInput;
use crate::models::{Diagnosis, Language};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply to `message` under the `system` instruction.
    async fn generate_text(&self, system: &str, message: &str) -> Result<String>;
}

#[async_trait]
pub trait PlantDiagnosisService: Send + Sync {
    async fn analyze_image(&self, image: &ImageInput, language: Language) -> Result<Diagnosis>;

    /// Whether a usable credential is present. Never touches the network.
    fn is_configured(&self) -> bool;

    /// Best-effort reachability check. Errors are logged, never returned.
    async fn test_connection(&self) -> bool;
}
