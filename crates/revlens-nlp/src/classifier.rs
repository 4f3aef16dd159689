//! HTTP client for the external pretrained binary sentiment classifier.

use revlens_core::SentimentLabel;
use serde::{Deserialize, Serialize};

use crate::error::NlpError;
use crate::scorer::Sentiment;

/// Default number of texts per /classify call.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default neutral dead-zone.
///
/// The upstream classifier is binary; any signed score with magnitude below
/// this band is relabeled neutral regardless of the binary label. A policy
/// constant with a configurable override, same as the lexicon threshold.
pub const DEFAULT_NEUTRAL_BAND: f32 = 0.55;

/// Classifier HTTP client.
///
/// Service contract: `POST {url}/classify` with `{"inputs": [texts]}`
/// returns `[{"label": "POSITIVE"|"NEGATIVE", "score": c}]` with
/// `c ∈ [0, 1]`, same length and order as the input.
#[derive(Debug)]
pub struct ClassifierClient {
    client: reqwest::Client,
    url: String,
    batch_size: usize,
    neutral_band: f32,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a [&'a str],
}

#[derive(Deserialize)]
struct Classification {
    label: String,
    score: f32,
}

impl ClassifierClient {
    /// Create a client with the default batch size and neutral band.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_options(base_url, DEFAULT_BATCH_SIZE, DEFAULT_NEUTRAL_BAND)
    }

    /// Create a client with explicit batch size and neutral band.
    #[must_use]
    pub fn with_options(base_url: &str, batch_size: usize, neutral_band: f32) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/classify", base_url.trim_end_matches('/')),
            batch_size: batch_size.max(1),
            neutral_band,
        }
    }

    /// Score a batch of texts via the classifier service.
    ///
    /// Texts are chunked into requests of at most `batch_size`; results come
    /// back one per input, in input order. A POSITIVE confidence `c` maps to
    /// `+c`, a NEGATIVE confidence to `-c`, and any score with
    /// `|score| < neutral_band` is relabeled neutral.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::Classifier`] if a request fails, the service
    /// returns a non-success status, or a response's length does not match
    /// its request chunk. The whole affected batch fails; results are never
    /// silently defaulted or reordered.
    pub async fn score_batch(&self, texts: &[&str]) -> Result<Vec<Sentiment>, NlpError> {
        let mut results = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(self.batch_size) {
            let request = ClassifyRequest { inputs: chunk };
            let response = self
                .client
                .post(&self.url)
                .json(&request)
                .send()
                .await
                .map_err(|e| NlpError::Classifier(format!("classifier request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(NlpError::Classifier(format!(
                    "classifier returned status {}",
                    response.status()
                )));
            }

            let classifications: Vec<Classification> = response.json().await.map_err(|e| {
                NlpError::Classifier(format!("classifier response parse error: {e}"))
            })?;

            if classifications.len() != chunk.len() {
                return Err(NlpError::Classifier(format!(
                    "classifier returned {} results for {} inputs",
                    classifications.len(),
                    chunk.len()
                )));
            }

            results.extend(classifications.into_iter().map(|c| self.to_sentiment(&c)));
        }

        Ok(results)
    }

    fn to_sentiment(&self, classification: &Classification) -> Sentiment {
        let positive = classification
            .label
            .to_ascii_uppercase()
            .starts_with("POS");
        let score = if positive {
            classification.score
        } else {
            -classification.score
        };

        let label = if score.abs() < self.neutral_band {
            SentimentLabel::Neutral
        } else if score > 0.0 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        };

        Sentiment { label, score }
    }
}
