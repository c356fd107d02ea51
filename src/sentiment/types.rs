//! Value types produced by the classifier

use super::explain::format_score;
use std::fmt;

/// Raw output of a scorer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Score {
    /// Sentiment direction and strength, -1.0 to 1.0
    pub polarity: f64,
    /// How opinion-based the text is, 0.0 to 1.0
    pub subjectivity: f64,
}

impl Score {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }
}

/// Categorical sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    /// Derive the label from the sign of the polarity.
    ///
    /// Any nonzero value is decisive; there is no deadband around zero.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Label::Positive
        } else if polarity < 0.0 {
            Label::Negative
        } else {
            Label::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
        }
    }

    pub fn as_lowercase(&self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
            Label::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one analysis, handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    pub label: Label,
    pub polarity: f64,
    pub subjectivity: f64,
    pub explanation: String,
}

impl SentimentResult {
    /// The full message shown in the result panel
    pub fn display_message(&self) -> String {
        format!(
            "Sentiment: {}\nPolarity: {}\nSubjectivity: {}\n\nExplanation: {}",
            self.label,
            format_score(self.polarity),
            format_score(self.subjectivity),
            self.explanation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_sign_rule() {
        assert_eq!(Label::from_polarity(0.5), Label::Positive);
        assert_eq!(Label::from_polarity(-0.5), Label::Negative);
        assert_eq!(Label::from_polarity(0.0), Label::Neutral);
        assert_eq!(Label::from_polarity(-0.0), Label::Neutral);
    }

    #[test]
    fn test_label_tiny_values_are_decisive() {
        assert_eq!(Label::from_polarity(1e-12), Label::Positive);
        assert_eq!(Label::from_polarity(-1e-12), Label::Negative);
    }

    #[test]
    fn test_display_message_layout() {
        let result = SentimentResult {
            label: Label::Negative,
            polarity: -0.8,
            subjectivity: 0.9,
            explanation: "because".to_string(),
        };
        assert_eq!(
            result.display_message(),
            "Sentiment: Negative\nPolarity: -0.80\nSubjectivity: 0.90\n\nExplanation: because"
        );
    }
}
