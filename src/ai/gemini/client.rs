use super::types::{Content, ErrorEnvelope, GenerateContentRequest, Part};
use crate::models::GeminiConfig;
use crate::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Lightweight Gemini REST client used by the text and vision modules.
///
/// The credential travels as the `key` query parameter. No timeout is set
/// here; callers that need one wrap the future themselves.
pub struct GeminiHttpClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiHttpClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self::new_with_client(config, Client::new())
    }

    pub fn new_with_client(config: GeminiConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn api_key(&self) -> Result<&str> {
        self.config.usable_api_key().ok_or_else(|| {
            Error::Configuration("Please add GEMINI_API_KEY to your .env file".to_string())
        })
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Calls Gemini's `generateContent` endpoint.
    ///
    /// Fails with [`Error::Configuration`] before any network activity when
    /// no usable credential is set.
    pub async fn generate_content<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        request: &Req,
    ) -> Result<Resp> {
        let api_key = self.api_key()?;

        let response = self
            .client
            .post(self.generate_content_url())
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the credential.
                let e = e.without_url();
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        let status = response.status();
        tracing::debug!("Gemini API response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(Error::ApiStatus {
                status: status.as_u16(),
                message: ErrorEnvelope::message_from_body(&error_text)
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::AiProvider(format!("Failed to parse Gemini response: {}", e))
        })
    }

    /// Send a one-word request and report whether Gemini answered with a
    /// success status.
    pub async fn ping(&self) -> Result<bool> {
        let api_key = self.api_key()?;

        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content {
                role: None,
                parts: vec![Part::text("Hello")],
            }],
            generation_config: None,
        };

        let response = self
            .client
            .post(self.generate_content_url())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        tracing::debug!("Gemini connection test status: {}", response.status());
        Ok(response.status().is_success())
    }
}
