//! Wires the chat assistant, plant diagnosis and farm backend together.

use crate::ai::{GeminiTextClient, GeminiVisionClient, PlantDiagnosisService, TextGenerator};
use crate::assistant::{self, ChatAssistant};
use crate::backend::{FarmBackend, MockBackend};
use crate::image::ImageInput;
use crate::models::{ChatReply, Config, Diagnosis, Language, ServiceStatus};
use crate::Result;
use std::path::Path;
use tracing::info;

pub struct App {
    assistant: ChatAssistant,
    diagnosis: Box<dyn PlantDiagnosisService>,
    backend: Box<dyn FarmBackend>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub chat: Box<dyn TextGenerator>,
    pub diagnosis: Box<dyn PlantDiagnosisService>,
    pub backend: Box<dyn FarmBackend>,
}

impl App {
    pub fn with_services(services: AppServices) -> Self {
        Self {
            assistant: ChatAssistant::new(services.chat),
            diagnosis: services.diagnosis,
            backend: services.backend,
        }
    }

    /// Build the Gemini-backed services from an explicit configuration.
    pub fn from_config(config: &Config) -> Self {
        if !config.gemini.is_configured() {
            tracing::warn!("GEMINI_API_KEY is not set; AI features will report errors");
        }
        info!("AI provider: Gemini (model: {})", config.gemini.model);

        // Reuse one HTTP connection pool across provider clients.
        let http_client = reqwest::Client::new();

        Self::with_services(AppServices {
            chat: Box::new(GeminiTextClient::new_with_client(
                config.gemini.clone(),
                http_client.clone(),
            )),
            diagnosis: Box::new(GeminiVisionClient::new_with_client(
                config.gemini.clone(),
                http_client,
            )),
            backend: Box::new(MockBackend::new()),
        })
    }

    pub async fn chat(&self, message: &str, ui_language: Option<&str>) -> ChatReply {
        let language = match ui_language {
            Some(code) => Language::from_code_or_default(code),
            None => assistant::detect_language(message),
        };
        info!("Chat request (ui language {})", language);
        self.assistant.send_message(message, language.code()).await
    }

    pub async fn diagnose(&self, image_path: &Path, language: Language) -> Result<Diagnosis> {
        let image = ImageInput::from_path(image_path).await?;
        self.diagnosis.analyze_image(&image, language).await
    }

    pub async fn status(&self) -> ServiceStatus {
        let configured = self.diagnosis.is_configured();
        let reachable = configured && self.diagnosis.test_connection().await;
        ServiceStatus {
            configured,
            reachable,
        }
    }

    pub fn backend(&self) -> &dyn FarmBackend {
        self.backend.as_ref()
    }
}
