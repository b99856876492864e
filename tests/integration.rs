use kisanmitra::{
    ai::{
        GeminiTextClient, GeminiVisionClient, MockDiagnosisClient, MockTextGenerator,
        PlantDiagnosisService,
    },
    app::{App, AppServices},
    assistant::{detect_language, ChatAssistant, UNAVAILABLE_REPLY},
    backend::{FarmBackend, MockBackend},
    diagnosis::{parse_analysis, DEFAULT_CONFIDENCE, HEALTHY_PLANT_NAME},
    image::ImageInput,
    models::{GeminiConfig, Language, PLACEHOLDER_API_KEY},
    Error,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_CONTENT: &str = r"^/v1beta/models/.+:generateContent$";

fn gemini_config(server: &MockServer, api_key: Option<&str>) -> GeminiConfig {
    GeminiConfig::new(api_key.map(str::to_string)).with_base_url(server.uri())
}

fn text_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
}

#[test]
fn test_detect_language_partitions_scripts() {
    assert_eq!(detect_language("मेरी फसल"), Language::Hi);
    assert_eq!(detect_language("నా పంట"), Language::Te);
    assert_eq!(detect_language("my crop"), Language::En);
}

#[tokio::test]
async fn test_chat_network_failure_never_raises() {
    // Nothing listens on port 1, so the request fails at the transport layer.
    let config =
        GeminiConfig::new(Some("test-key".to_string())).with_base_url("http://127.0.0.1:1".into());
    let chat = ChatAssistant::new(Box::new(GeminiTextClient::new(config)));

    let reply = chat.send_message("how to grow cotton?", "en").await;
    assert!(reply.reply.starts_with(UNAVAILABLE_REPLY));
    assert!(reply.reply.len() > UNAVAILABLE_REPLY.len());
    assert!(reply.suggestions.is_empty());
}

#[tokio::test]
async fn test_transport_failures_do_not_expose_api_key() {
    let config = GeminiConfig::new(Some("SECRET-KEY-123".to_string()))
        .with_base_url("http://127.0.0.1:1".into());

    let chat = ChatAssistant::new(Box::new(GeminiTextClient::new(config.clone())));
    let reply = chat.send_message("how to grow cotton?", "en").await;
    assert!(reply.reply.starts_with(UNAVAILABLE_REPLY));
    assert!(!reply.reply.contains("SECRET-KEY-123"));

    let vision = GeminiVisionClient::new(config);
    let image = ImageInput::from_bytes(vec![0xFF, 0xD8, 0xFF]);
    let err = vision.analyze_image(&image, Language::En).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(!err.to_string().contains("SECRET-KEY-123"));
}

#[tokio::test]
async fn test_chat_against_gemini_stub() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(
            "Test the soil pH before sowing.\n\nAdd compost two weeks earlier.",
        )))
        .expect(2)
        .mount(&server)
        .await;

    let chat = ChatAssistant::new(Box::new(GeminiTextClient::new(gemini_config(
        &server,
        Some("test-key"),
    ))));

    let english = chat.send_message("soil preparation", "en").await;
    let french = chat.send_message("soil preparation", "fr").await;

    assert!(english.reply.contains("soil pH"));
    assert_eq!(english.suggestions.len(), 4);
    assert_eq!(french.suggestions, english.suggestions);
}

#[tokio::test]
async fn test_chat_provider_error_is_displayable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": { "code": 429, "message": "Resource has been exhausted" }
        })))
        .mount(&server)
        .await;

    let chat = ChatAssistant::new(Box::new(GeminiTextClient::new(gemini_config(
        &server,
        Some("test-key"),
    ))));

    let reply = chat.send_message("hello", "hi").await;
    assert!(reply.reply.contains("429"));
    assert!(reply.reply.contains("Resource has been exhausted"));
    assert!(reply.suggestions.is_empty());
}

#[test]
fn test_parse_defaults() {
    let fields = parse_analysis("Disease Status: Diseased\nSpecific Disease: None detected");
    assert_eq!(fields.confidence, DEFAULT_CONFIDENCE);
    assert_eq!(fields.confidence, 0.85);
    assert_eq!(fields.disease, HEALTHY_PLANT_NAME);
}

#[tokio::test]
async fn test_configuration_gate_makes_no_network_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let image = ImageInput::from_bytes(vec![0xFF, 0xD8, 0xFF]);
    for key in [None, Some(PLACEHOLDER_API_KEY)] {
        let client = GeminiVisionClient::new(gemini_config(&server, key));
        assert!(!client.is_configured());

        let err = client.analyze_image(&image, Language::En).await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("not configured"));
    }

    server.verify().await;
}

#[tokio::test]
async fn test_vision_server_error_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiVisionClient::new(gemini_config(&server, Some("test-key")));
    let image = ImageInput::from_bytes(vec![0x89, 0x50, 0x4E, 0x47]);

    let err = client.analyze_image(&image, Language::En).await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_vision_end_to_end_from_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT))
        .and(wiremock::matchers::body_string_contains("\"mimeType\":\"image/png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(
            "**Disease Status: Diseased**\n**Specific Disease: Grey Mildew**\n**Confidence: 81%**",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]).unwrap();

    let app = App::with_services(AppServices {
        chat: Box::new(MockTextGenerator::new()),
        diagnosis: Box::new(GeminiVisionClient::new(gemini_config(
            &server,
            Some("test-key"),
        ))),
        backend: Box::new(MockBackend::new()),
    });

    let diagnosis = app.diagnose(file.path(), Language::Te).await.unwrap();
    assert_eq!(diagnosis.disease, "Grey Mildew");
    assert_eq!(diagnosis.confidence, 0.81);
    assert!(!diagnosis.is_healthy);

    let json = serde_json::to_value(&diagnosis).unwrap();
    assert_eq!(json["method"], "gemini_vision");
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn test_connection_check_is_fail_soft() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(GENERATE_CONTENT))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = GeminiVisionClient::new(gemini_config(&server, Some("expired")));
    assert!(!client.test_connection().await);
}

#[tokio::test]
async fn test_mock_otp_flow() {
    let backend = MockBackend::new();

    let sent = backend.send_otp("+919876543210").await.unwrap();
    assert!(sent.success);

    let accepted = backend.verify_otp("+919876543210", "1234").await.unwrap();
    assert!(accepted.success);

    let rejected = backend.verify_otp("+919876543210", "0000").await.unwrap();
    assert!(!rejected.success);
    assert_eq!(rejected.message, "Invalid OTP");
}

#[tokio::test]
async fn test_app_with_mocks() {
    let app = App::with_services(AppServices {
        chat: Box::new(MockTextGenerator::new().with_failure("offline".to_string())),
        diagnosis: Box::new(MockDiagnosisClient::new()),
        backend: Box::new(MockBackend::new()),
    });

    let reply = app.chat("నా పంట", None).await;
    assert!(reply.reply.contains("offline"));
    assert!(reply.suggestions.is_empty());

    let status = app.status().await;
    assert!(status.configured);
    assert!(status.reachable);

    let news = app.backend().get_news().await.unwrap();
    assert_eq!(news.len(), 3);
    assert_eq!(news[2].title.get(Language::Hi), "मार्केट पल्स: कपास की कीमतों में वृद्धि");
}
