//! Explanation rendering

use super::types::Label;

/// Format a score with two decimals, rounding ties away from zero.
///
/// `format!("{:.2}")` rounds ties to even, so the value is rounded with
/// `f64::round` first.
pub fn format_score(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}

/// Build the natural-language explanation for a classified score
pub fn explanation(label: Label, polarity: f64, subjectivity: f64) -> String {
    format!(
        "The sentiment of the text is {label}. \
         It generally expresses a {label} opinion or emotion. \
         The polarity score is {polarity}, where a higher value indicates a stronger sentiment. \
         The subjectivity score is {subjectivity}, where a higher value indicates more subjective content.",
        label = label.as_lowercase(),
        polarity = format_score(polarity),
        subjectivity = format_score(subjectivity),
    )
}
