//! Scorer capability
//!
//! The classifier depends on this trait only, so any backend that can turn
//! text into a polarity/subjectivity pair can be plugged in.

use super::error::SentimentError;
use super::types::Score;

/// A backend that scores text
pub trait Scorer: Send + Sync {
    /// Score the given text.
    ///
    /// Returns `SentimentError::ScoringUnavailable` when the backend's
    /// resources cannot be loaded or the backend cannot run.
    fn score(&self, text: &str) -> Result<Score, SentimentError>;
}
