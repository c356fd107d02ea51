//! Sentiment error types

use std::path::PathBuf;

/// Errors surfaced by the classifier
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SentimentError {
    /// The scorer could not be initialized or invoked
    #[error("scoring unavailable: {0}")]
    ScoringUnavailable(String),
}

/// Errors raised while loading a lexicon
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon: {0}")]
    Csv(#[from] csv::Error),

    #[error("lexicon entry '{word}' is out of range: {reason}")]
    OutOfRange { word: String, reason: &'static str },

    #[error("lexicon contains no entries")]
    Empty,
}

impl From<LexiconError> for SentimentError {
    fn from(err: LexiconError) -> Self {
        SentimentError::ScoringUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_error_maps_to_scoring_unavailable() {
        let err: SentimentError = LexiconError::Empty.into();
        assert_eq!(
            err,
            SentimentError::ScoringUnavailable("lexicon contains no entries".to_string())
        );
        assert_eq!(
            err.to_string(),
            "scoring unavailable: lexicon contains no entries"
        );
    }
}
