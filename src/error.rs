//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// No usable Gemini credential; raised before any network activity.
    #[error("Gemini API key not configured: {0}")]
    Configuration(String),

    #[error("Gemini API error: {status} - {message}")]
    ApiStatus { status: u16, message: String },

    #[error("No response from Gemini Vision API")]
    EmptyResponse,

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Image encoding error: {0}")]
    Encoding(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_status_message_includes_code() {
        let err = Error::ApiStatus {
            status: 500,
            message: "Internal error".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API error: 500 - Internal error");
    }

    #[test]
    fn test_configuration_error_is_labelled() {
        let err = Error::Configuration("set GEMINI_API_KEY".to_string());
        assert!(err.to_string().contains("not configured"));
    }
}
