use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, Part};
use crate::ai::TextGenerator;
use crate::models::GeminiConfig;
use crate::Result;
use async_trait::async_trait;

pub struct GeminiTextClient {
    http: GeminiHttpClient,
}

impl GeminiTextClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self::new_with_client(config, reqwest::Client::new())
    }

    pub fn new_with_client(config: GeminiConfig, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(config, client),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiTextClient {
    /// Returns an empty string when Gemini answers without any text.
    async fn generate_text(&self, system: &str, message: &str) -> Result<String> {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::system(system)),
            contents: vec![Content::user(vec![Part::text(message)])],
            generation_config: None,
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        match response.first_text() {
            Some(text) => {
                tracing::debug!("Gemini chat reply ({} chars)", text.chars().count());
                Ok(text.to_string())
            }
            None => {
                tracing::warn!("Gemini chat response contained no text");
                Ok(String::new())
            }
        }
    }
}
