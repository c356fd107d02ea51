//! Sentiment classifier/explainer

use super::error::SentimentError;
use super::explain::explanation;
use super::scorer::Scorer;
use super::types::{Label, SentimentResult};
use tracing::{debug, warn};

/// Classifies text using an injected scorer
///
/// The analyzer holds no state of its own beyond the scorer, so analyzing
/// the same text twice against an unchanged scorer yields the same result.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer<S> {
    scorer: S,
}

impl<S: Scorer> SentimentAnalyzer<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score `text`, derive its label and render the explanation.
    ///
    /// Scorer failures are returned as-is; no partial result is produced.
    pub fn analyze(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let score = self.scorer.score(text).inspect_err(|err| {
            warn!(error = %err, "scorer failed");
        })?;

        if !score.polarity.is_finite() || !score.subjectivity.is_finite() {
            warn!(?score, "scorer returned a non-finite score");
            return Err(SentimentError::ScoringUnavailable(
                "scorer returned a non-finite score".to_string(),
            ));
        }

        let polarity = score.polarity.clamp(-1.0, 1.0);
        let subjectivity = score.subjectivity.clamp(0.0, 1.0);
        let label = Label::from_polarity(polarity);

        debug!(
            %label,
            polarity,
            subjectivity,
            input_len = text.len(),
            "analyzed text"
        );

        Ok(SentimentResult {
            label,
            polarity,
            subjectivity,
            explanation: explanation(label, polarity, subjectivity),
        })
    }
}
