//! Farming chat assistant.
//!
//! Wraps a [`TextGenerator`] and never fails: provider errors become a
//! displayable apology with no suggestions, so callers handle one shape.

use crate::ai::TextGenerator;
use crate::models::{ChatReply, Language};
use crate::prompts;

pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't generate a response.";
pub const UNAVAILABLE_REPLY: &str = "Sorry, the AI service is currently unavailable. ";

const SUGGESTIONS_EN: [&str; 4] = [
    "🌾 How to prepare soil?",
    "🌱 Best seeds",
    "🛡️ Pest control",
    "☁️ Weather",
];
const SUGGESTIONS_HI: [&str; 4] = [
    "🌾 मिट्टी कैसे तैयार करें?",
    "🌱 बेहतर बीज",
    "🛡️ कीट नियंत्रण",
    "☁️ मौसम",
];
const SUGGESTIONS_TE: [&str; 4] = [
    "🌾 మట్టిని ఎలా సిద్ధం చేయాలి?",
    "🌱 ఉత్తమ విత్తనాలు",
    "🛡️ తెగులు నివారణ",
    "☁️ మార్పులు",
];

pub struct ChatAssistant {
    generator: Box<dyn TextGenerator>,
}

impl ChatAssistant {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask the assistant. `ui_language` selects the follow-up suggestions;
    /// unknown tags get the English set.
    pub async fn send_message(&self, message: &str, ui_language: &str) -> ChatReply {
        match self
            .generator
            .generate_text(prompts::CHAT_SYSTEM, message)
            .await
        {
            Ok(text) => {
                tracing::debug!("Chat reply received ({} chars)", text.chars().count());
                let reply = if text.is_empty() {
                    EMPTY_REPLY.to_string()
                } else {
                    text
                };
                let language = Language::from_code_or_default(ui_language);

                ChatReply {
                    reply,
                    suggestions: suggestions_for(language)
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                }
            }
            Err(e) => {
                tracing::error!("Chat generation failed: {}", e);
                ChatReply {
                    reply: format!("{}{}", UNAVAILABLE_REPLY, e),
                    suggestions: Vec::new(),
                }
            }
        }
    }
}

pub fn suggestions_for(language: Language) -> &'static [&'static str; 4] {
    match language {
        Language::En => &SUGGESTIONS_EN,
        Language::Hi => &SUGGESTIONS_HI,
        Language::Te => &SUGGESTIONS_TE,
    }
}

/// Devanagari wins over Telugu; anything else is English.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c)) {
        Language::Hi
    } else if text.chars().any(|c| ('\u{0C00}'..='\u{0C7F}').contains(&c)) {
        Language::Te
    } else {
        Language::En
    }
}
