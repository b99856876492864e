use super::{PlantDiagnosisService, TextGenerator};
use crate::diagnosis::parse_analysis;
use crate::image::ImageInput;
use crate::models::{Diagnosis, DiagnosisMethod, Language};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub struct MockTextGenerator {
    responses: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
    messages: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            messages: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Every call fails with a provider error carrying `message`.
    pub fn with_failure(self, message: String) -> Self {
        *self.failure.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate_text(&self, _system: &str, message: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.messages.lock().unwrap().push(message.to_string());

        if let Some(failure) = self.failure.lock().unwrap().clone() {
            return Err(Error::AiProvider(failure));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(format!("Advice about: {}", message))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

pub struct MockDiagnosisClient {
    analyses: Arc<Mutex<Vec<String>>>,
    configured: bool,
    reachable: bool,
    call_count: Arc<Mutex<usize>>,
}

impl MockDiagnosisClient {
    pub fn new() -> Self {
        Self {
            analyses: Arc::new(Mutex::new(Vec::new())),
            configured: true,
            reachable: true,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Raw model text the mock "returns"; it is parsed like a real answer.
    pub fn with_analysis(self, analysis: String) -> Self {
        self.analyses.lock().unwrap().push(analysis);
        self
    }

    pub fn with_configured(mut self, configured: bool) -> Self {
        self.configured = configured;
        self
    }

    pub fn with_reachable(mut self, reachable: bool) -> Self {
        self.reachable = reachable;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockDiagnosisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlantDiagnosisService for MockDiagnosisClient {
    async fn analyze_image(&self, _image: &ImageInput, _language: Language) -> Result<Diagnosis> {
        if !self.configured {
            return Err(Error::Configuration("mock diagnosis client disabled".to_string()));
        }

        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let analyses = self.analyses.lock().unwrap();
        let analysis = if analyses.is_empty() {
            "Disease Status: Healthy\nSpecific Disease: None\nConfidence: 95%".to_string()
        } else {
            analyses[(*count - 1) % analyses.len()].clone()
        };

        let fields = parse_analysis(&analysis);
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
        self.configured
    }

    async fn test_connection(&self) -> bool {
        self.configured && self.reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_text_generator_default_reply() {
        let generator = MockTextGenerator::new();
        let reply = generator.generate_text("sys", "cotton pests").await.unwrap();
        assert!(reply.contains("cotton pests"));
    }

    #[tokio::test]
    async fn test_mock_text_generator_custom_responses() {
        let generator = MockTextGenerator::new()
            .with_response("First".to_string())
            .with_response("Second".to_string());

        assert_eq!(generator.generate_text("", "a").await.unwrap(), "First");
        assert_eq!(generator.generate_text("", "b").await.unwrap(), "Second");
        // Should cycle back
        assert_eq!(generator.generate_text("", "c").await.unwrap(), "First");
        assert_eq!(generator.get_call_count(), 3);
        assert_eq!(generator.get_messages(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_mock_text_generator_failure() {
        let generator = MockTextGenerator::new().with_failure("network down".to_string());
        let err = generator.generate_text("", "hi").await.unwrap_err();
        assert!(err.to_string().contains("network down"));
        assert_eq!(generator.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_diagnosis_default_is_healthy() {
        let client = MockDiagnosisClient::new();
        let image = ImageInput::from_bytes(vec![1, 2, 3]);

        let diagnosis = client.analyze_image(&image, Language::En).await.unwrap();
        assert!(diagnosis.is_healthy);
        assert_eq!(diagnosis.disease, "Healthy Cotton Plant");
        assert_eq!(diagnosis.confidence, 0.95);
        assert_eq!(client.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_diagnosis_unconfigured() {
        let client = MockDiagnosisClient::new().with_configured(false);
        let image = ImageInput::from_bytes(vec![]);

        let err = client.analyze_image(&image, Language::Hi).await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(!client.is_configured());
        assert!(!client.test_connection().await);
        assert_eq!(client.get_call_count(), 0);
    }
}
