pub mod chat;
pub mod client;
pub mod types;
pub mod vision;

pub use chat::GeminiTextClient;
pub use client::GeminiHttpClient;
pub use vision::GeminiVisionClient;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::GeminiConfig;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

    pub const GENERATE_CONTENT_PATH_REGEX: &str = r"^/v1beta/models/.+:generateContent$";

    pub fn post_path_regex(regex: &str) -> MockBuilder {
        Mock::given(method("POST")).and(path_regex(regex))
    }

    pub fn config(server: &MockServer, api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig::new(api_key.map(str::to_string)).with_base_url(server.uri())
    }

    pub fn text_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": text }]
                }
            }]
        }))
    }
}
