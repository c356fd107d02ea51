//! Sentiment classification
//!
//! This module contains everything between raw text and a displayable result:
//! - `Scorer` - the narrow capability that turns text into (polarity, subjectivity)
//! - `LexiconScorer` - the bundled scorer backed by a CSV word lexicon
//! - `SentimentAnalyzer` - derives the label and explanation from a score
//!
//! The presentation layer only ever sees `SentimentResult` values.

pub mod analyzer;
pub mod error;
pub mod explain;
pub mod lexicon;
pub mod scorer;
pub mod types;

pub use analyzer::SentimentAnalyzer;
pub use lexicon::{LexiconScorer, LexiconSource};
pub use types::{Label, SentimentResult};
