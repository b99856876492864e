//! Best-effort extraction of the structured fields from a free-text plant
//! analysis.
//!
//! Each field is extracted independently. A missing or malformed field only
//! selects that field's default; it never fails the analysis as a whole.

pub const STATUS_LABEL: &str = "Disease Status";
pub const DISEASE_LABEL: &str = "Specific Disease";
pub const CONFIDENCE_LABEL: &str = "Confidence";

pub const HEALTHY_PLANT_NAME: &str = "Healthy Cotton Plant";
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisFields {
    pub disease: String,
    pub confidence: f64,
    pub is_healthy: bool,
}

pub fn parse_analysis(text: &str) -> AnalysisFields {
    AnalysisFields {
        disease: extract_disease_name(text).unwrap_or_default(),
        confidence: extract_confidence(text).unwrap_or(DEFAULT_CONFIDENCE),
        is_healthy: extract_health_status(text).unwrap_or(false),
    }
}

/// `Some(true)` when the status value mentions "healthy".
pub fn extract_health_status(text: &str) -> Option<bool> {
    labeled_value(text, STATUS_LABEL).map(|value| value.to_lowercase().contains("healthy"))
}

pub fn extract_disease_name(text: &str) -> Option<String> {
    let value = labeled_value(text, DISEASE_LABEL)?;
    let lowered = value.to_lowercase();
    if lowered.contains("none") || lowered.contains("healthy") {
        return Some(HEALTHY_PLANT_NAME.to_string());
    }
    Some(value.to_string())
}

/// Integer percentage converted to a fraction in `[0, 1]`. Labelled values
/// that don't start with digits are skipped in favour of later ones.
pub fn extract_confidence(text: &str) -> Option<f64> {
    labeled_values(text, CONFIDENCE_LABEL).find_map(parse_percent)
}

/// Leading integer percentage as a fraction; anything above 100 saturates to 1.0.
fn parse_percent(value: &str) -> Option<f64> {
    let digits_end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let digits = &value[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() > 3 {
        return Some(1.0);
    }
    let percent: u32 = significant.parse().unwrap_or(0);
    Some((f64::from(percent) / 100.0).min(1.0))
}

fn labeled_value<'a>(text: &'a str, label: &'static str) -> Option<&'a str> {
    labeled_values(text, label).next()
}

/// Every `label:` occurrence (ASCII case-insensitive, anywhere in a line),
/// yielding the trimmed value after it up to the next `*` or end of line.
/// Markdown bold markers around the label or value are tolerated.
fn labeled_values<'a>(text: &'a str, label: &'static str) -> impl Iterator<Item = &'a str> {
    let label = label.to_ascii_lowercase();

    text.lines().flat_map(move |line| {
        // ASCII lowercasing keeps byte offsets aligned with `line`.
        let lowered = line.to_ascii_lowercase();
        let mut values = Vec::new();
        let mut search_from = 0;

        while let Some(pos) = lowered[search_from..].find(&label) {
            let after_label = search_from + pos + label.len();
            search_from = after_label;

            let rest = line[after_label..].trim_start_matches(is_marker);
            let Some(rest) = rest.strip_prefix(':') else {
                continue;
            };
            let rest = rest.trim_start_matches(is_marker);
            let value = rest.split('*').next().unwrap_or_default().trim();
            if !value.is_empty() {
                values.push(value);
            }
        }
        values
    })
}

fn is_marker(c: char) -> bool {
    c == '*' || c.is_whitespace()
}
