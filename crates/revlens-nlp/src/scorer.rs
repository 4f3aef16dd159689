//! Common sentiment contract shared by the lexicon and model backends.

use revlens_core::SentimentLabel;

use crate::classifier::ClassifierClient;
use crate::error::NlpError;
use crate::lexicon::LexiconScorer;

/// One scored text: a signed polarity in `[-1.0, 1.0]` and its three-way
/// label. The label is always a deterministic function of the score under
/// the producing backend's thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f32,
}

/// Pluggable sentiment backend.
///
/// Both variants are pure functions of input text; swapping one for the
/// other changes scores, never the shape or order of the output.
#[derive(Debug)]
pub enum SentimentBackend {
    /// Self-contained word-list scorer; the deterministic fallback.
    Lexicon(LexiconScorer),
    /// Delegates to the external pretrained binary classifier.
    Model(ClassifierClient),
}

impl SentimentBackend {
    /// Score a batch of texts, one result per input, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::Classifier`] if the model backend's collaborator
    /// fails for a batch. The lexicon backend never fails.
    pub async fn score_batch(&self, texts: &[&str]) -> Result<Vec<Sentiment>, NlpError> {
        match self {
            SentimentBackend::Lexicon(scorer) => {
                Ok(texts.iter().map(|t| scorer.score(t)).collect())
            }
            SentimentBackend::Model(client) => client.score_batch(texts).await,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SentimentBackend::Lexicon(_) => "lexicon",
            SentimentBackend::Model(_) => "model",
        }
    }
}
