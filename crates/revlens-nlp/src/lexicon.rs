//! Word-list sentiment scorer: the self-contained, deterministic backend.

use std::collections::HashSet;

use revlens_core::SentimentLabel;

use crate::normalize::tokenize;
use crate::scorer::Sentiment;

/// Default positive polarity words.
const DEFAULT_POSITIVE: &[&str] = &[
    "good", "great", "excellent", "love", "liked", "fast", "easy", "helpful", "amazing", "best",
];

/// Default negative polarity words.
const DEFAULT_NEGATIVE: &[&str] = &[
    "bad",
    "terrible",
    "slow",
    "hate",
    "worst",
    "crash",
    "crashes",
    "error",
    "failed",
    "lag",
    "disappointing",
];

/// Label boundary: scores strictly above `+threshold` are positive, strictly
/// below `-threshold` negative. A policy constant, not derived; kept
/// configurable so deployments can widen or narrow the neutral band.
const DEFAULT_THRESHOLD: f32 = 0.05;

/// Lexicon-based scorer.
///
/// Counts positive and negative word hits in the tokenized text and scores
/// `(pos - neg) / (pos + neg)`, which is `0.0` (neutral) when there are no
/// hits at all. The word sets and the label threshold are injectable so
/// tests and deployments can substitute their own lists.
#[derive(Debug)]
pub struct LexiconScorer {
    positive: HashSet<String>,
    negative: HashSet<String>,
    threshold: f32,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(
            DEFAULT_POSITIVE.iter().map(ToString::to_string),
            DEFAULT_NEGATIVE.iter().map(ToString::to_string),
            DEFAULT_THRESHOLD,
        )
    }
}

impl LexiconScorer {
    /// Build a scorer from explicit word sets and a label threshold.
    ///
    /// Words are matched lowercased and whole-token.
    #[must_use]
    pub fn new(
        positive: impl IntoIterator<Item = String>,
        negative: impl IntoIterator<Item = String>,
        threshold: f32,
    ) -> Self {
        Self {
            positive: positive.into_iter().map(|w| w.to_lowercase()).collect(),
            negative: negative.into_iter().map(|w| w.to_lowercase()).collect(),
            threshold,
        }
    }

    /// Default word sets with a custom label threshold.
    #[must_use]
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Score a single text. Always in `[-1.0, 1.0]`; exactly `0.0` iff the
    /// text contains no lexicon hits.
    #[must_use]
    pub fn score(&self, text: &str) -> Sentiment {
        let tokens = tokenize(text);

        let mut pos = 0u32;
        let mut neg = 0u32;
        for token in &tokens {
            if self.positive.contains(token) {
                pos += 1;
            } else if self.negative.contains(token) {
                neg += 1;
            }
        }

        let hits = pos + neg;
        #[allow(clippy::cast_precision_loss)]
        let score = if hits == 0 {
            0.0
        } else {
            (i64::from(pos) - i64::from(neg)) as f32 / hits as f32
        };

        Sentiment {
            label: self.label_for(score),
            score,
        }
    }

    fn label_for(&self, score: f32) -> SentimentLabel {
        if score > self.threshold {
            SentimentLabel::Positive
        } else if score < -self.threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}
