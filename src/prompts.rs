use crate::models::Language;

pub const CHAT_SYSTEM: &str = include_str!("../data/prompts/chat_system.txt");
pub const VISION_ANALYSIS: &str = include_str!("../data/prompts/vision_analysis.txt");
pub const VISION_SUFFIX_HI: &str = include_str!("../data/prompts/vision_suffix_hi.txt");
pub const VISION_SUFFIX_TE: &str = include_str!("../data/prompts/vision_suffix_te.txt");

/// Build the plant analysis prompt, asking for the answer in `language`.
pub fn vision_prompt(language: Language) -> String {
    let base = VISION_ANALYSIS.trim_end();
    let suffix = match language {
        Language::En => return base.to_string(),
        Language::Hi => VISION_SUFFIX_HI,
        Language::Te => VISION_SUFFIX_TE,
    };
    format!("{}\n\n{}", base, suffix.trim_end())
}
