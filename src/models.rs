//! Data models and structures
//!
//! Defines the language tags, localized values, service results, mock backend
//! payloads and configuration shared across the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Value shipped in `.env.example`; treated the same as an unset key.
pub const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key_here";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Te,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Te];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Unrecognized tags resolve to English.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| format!("Unsupported language '{}'. Expected en, hi or te", s))
    }
}

/// The same text in each supported language. Missing variants fall back to English.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hi: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub te: Option<T>,
}

pub type LocalizedText = Localized<String>;

impl<T> Localized<T> {
    pub fn new(en: T, hi: T, te: T) -> Self {
        Self {
            en,
            hi: Some(hi),
            te: Some(te),
        }
    }

    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Hi => self.hi.as_ref().unwrap_or(&self.en),
            Language::Te => self.te.as_ref().unwrap_or(&self.en),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.hi.is_some() && self.te.is_some()
    }
}

impl Localized<String> {
    pub fn text(en: &str, hi: &str, te: &str) -> Self {
        Self::new(en.to_string(), hi.to_string(), te.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisMethod {
    GeminiVision,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub success: bool,
    pub disease: String,
    pub confidence: f64,
    pub is_healthy: bool,
    pub full_analysis: String,
    pub method: DiagnosisMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub configured: bool,
    pub reachable: bool,
}

// Mock backend payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpDispatch {
    pub success: bool,
    pub message: String,
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpVerification {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseReport {
    pub id: String,
    pub name: LocalizedText,
    pub severity: Severity,
    pub confidence: u8,
    pub description: LocalizedText,
    pub cure_steps: Localized<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub temp: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temp: i32,
    pub condition: String,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Scheme,
    News,
    Price,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub image_url: String,
    pub category: NewsCategory,
    pub title: LocalizedText,
    pub summary: LocalizedText,
    pub date: DateTime<Utc>,
}

// Configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    /// `model` may be given with or without the `models/` prefix.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.strip_prefix("models/").unwrap_or(model).to_string();
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The credential, unless it is missing, blank or the placeholder value.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    pub fn is_configured(&self) -> bool {
        self.usable_api_key().is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub gemini: GeminiConfig,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY").or_else(|| lookup("VITE_GEMINI_API_KEY"));
        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        let base_url =
            lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());

        if model.trim().is_empty() {
            return Err(crate::Error::Generic("GEMINI_MODEL is empty".to_string()));
        }

        Ok(Self {
            gemini: GeminiConfig::new(api_key)
                .with_model(model.trim())
                .with_base_url(base_url),
        })
    }
}
