use super::client::GeminiHttpClient;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::ai::PlantDiagnosisService;
use crate::diagnosis::parse_analysis;
use crate::image::ImageInput;
use crate::models::{Diagnosis, DiagnosisMethod, GeminiConfig, Language};
use crate::{prompts, Error, Result};
use async_trait::async_trait;

const TEMPERATURE: f64 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 8192;
const TOP_P: f64 = 0.95;

/// Cotton plant diagnosis through Gemini's vision-capable model.
pub struct GeminiVisionClient {
    http: GeminiHttpClient,
}

impl GeminiVisionClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self::new_with_client(config, reqwest::Client::new())
    }

    pub fn new_with_client(config: GeminiConfig, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(config, client),
        }
    }

    fn build_request(image: &ImageInput, language: Language) -> GenerateContentRequest {
        let mime_type = image.mime_type();
        let data = image.to_base64();
        tracing::debug!(
            "Image converted to base64 ({} chars, {})",
            data.len(),
            mime_type
        );

        GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content {
                role: None,
                parts: vec![
                    Part::text(&prompts::vision_prompt(language)),
                    Part::inline_data(mime_type, data),
                ],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(TEMPERATURE),
                max_output_tokens: Some(MAX_OUTPUT_TOKENS),
                top_p: Some(TOP_P),
            }),
        }
    }
}

#[async_trait]
impl PlantDiagnosisService for GeminiVisionClient {
    async fn analyze_image(&self, image: &ImageInput, language: Language) -> Result<Diagnosis> {
        if !self.http.is_configured() {
            return Err(Error::Configuration(
                "Please add GEMINI_API_KEY to your .env file".to_string(),
            ));
        }

        tracing::info!(
            "Analyzing plant image ({} bytes, language {}) with {}",
            image.bytes().len(),
            language,
            self.http.config().model
        );

        let request = Self::build_request(image, language);
        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        let analysis = response
            .first_text()
            .filter(|text| !text.is_empty())
            .ok_or(Error::EmptyResponse)?
            .to_string();
        tracing::debug!("Analysis text length: {}", analysis.len());

        let fields = parse_analysis(&analysis);
        tracing::info!(
            "Diagnosis: disease={:?} healthy={} confidence={:.2}",
            fields.disease,
            fields.is_healthy,
            fields.confidence
        );

        Ok(Diagnosis {
            success: true,
            disease: fields.disease,
            confidence: fields.confidence,
            is_healthy: fields.is_healthy,
            full_analysis: analysis,
            method: DiagnosisMethod::GeminiVision,
        })
    }

    fn is_configured(&self) -> bool {
        self.http.is_configured()
    }

    async fn test_connection(&self) -> bool {
        if !self.is_configured() {
            tracing::debug!("Skipping Gemini connection test: API key not configured");
            return false;
        }

        match self.http.ping().await {
            Ok(reachable) => reachable,
            Err(e) => {
                tracing::error!("Gemini connection test failed: {}", e);
                false
            }
        }
    }
}
