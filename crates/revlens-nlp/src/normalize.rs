//! Text normalization for the keyword-extraction path.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::NlpError;
use crate::lemma::LemmaClient;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Minimum token length kept on the keyword path. Shorter tokens are noise
/// ("ok", "to", "a") and are dropped before vectorization.
const MIN_TOKEN_CHARS: usize = 3;

/// Common English stop-words filtered from keyword candidates.
///
/// Deliberately compact; the TF-IDF idf term already downweights ubiquitous
/// words, so this list only needs to catch the worst offenders.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "has", "have", "was",
    "were", "this", "that", "with", "they", "them", "their", "there", "what", "when", "which",
    "will", "would", "could", "should", "from", "your", "its", "our", "out", "about", "been",
    "being", "also", "than", "then", "very", "just", "only", "into", "over", "after",
    "before", "because", "does", "doing", "did", "don", "while", "some", "such", "more", "most",
    "other", "any", "each", "how", "too", "who", "why", "where", "again", "once", "here", "these",
    "those", "now", "get", "got",
];

/// Lowercase a text and split it into word-character tokens.
///
/// Never fails: empty or whitespace-only input yields an empty sequence.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Normalizer feeding the keyword extractor: lowercased tokens, short tokens
/// and stop-words dropped, each token reduced to its lemma via an external
/// lemmatizer service.
///
/// Without a configured lemmatizer the normalizer degrades to the local
/// steps only (lowercase, length and stop-word filters); the degradation is
/// announced once at construction, not silently per call.
pub struct TextNormalizer {
    stopwords: HashSet<String>,
    lemmatizer: Option<LemmaClient>,
}

impl TextNormalizer {
    #[must_use]
    pub fn new(lemmatizer: Option<LemmaClient>) -> Self {
        if lemmatizer.is_none() {
            tracing::info!(
                "no lemmatizer configured; keyword normalization degrades to lowercase tokens"
            );
        }
        Self {
            stopwords: STOPWORDS.iter().map(ToString::to_string).collect(),
            lemmatizer,
        }
    }

    /// Replace the built-in stop-word set.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: impl IntoIterator<Item = String>) -> Self {
        self.stopwords = stopwords.into_iter().map(|w| w.to_lowercase()).collect();
        self
    }

    /// Normalize a batch of texts, one token sequence per input, in input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::Lemmatizer`] if a configured lemmatizer call
    /// fails. Empty input text is not an error and yields an empty sequence.
    pub async fn normalize_batch(&self, texts: &[&str]) -> Result<Vec<Vec<String>>, NlpError> {
        let token_docs = match &self.lemmatizer {
            Some(client) => client.lemmatize(texts).await?,
            None => texts.iter().map(|t| tokenize(t)).collect(),
        };

        Ok(token_docs
            .into_iter()
            .map(|tokens| self.filter_tokens(tokens))
            .collect())
    }

    /// Normalize a single text.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::Lemmatizer`] if a configured lemmatizer call fails.
    pub async fn normalize(&self, text: &str) -> Result<Vec<String>, NlpError> {
        let mut docs = self.normalize_batch(&[text]).await?;
        Ok(docs.pop().unwrap_or_default())
    }

    fn filter_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|t| t.to_lowercase())
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|t| !self.stopwords.contains(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits_on_word_runs() {
        assert_eq!(
            tokenize("Great App, LOVE it!"),
            vec!["great", "app", "love", "it"]
        );
    }

    #[test]
    fn tokenize_empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("!!! ... ???").is_empty());
    }

    #[test]
    fn tokenize_keeps_digits_as_word_characters() {
        assert_eq!(tokenize("otp 2fa code"), vec!["otp", "2fa", "code"]);
    }

    #[tokio::test]
    async fn normalize_without_lemmatizer_filters_short_and_stop_words() {
        let normalizer = TextNormalizer::new(None);
        let tokens = normalizer
            .normalize("The transfer was slow and it failed")
            .await
            .unwrap();
        // "the"/"was"/"and" are stop-words, "it" is too short.
        assert_eq!(tokens, vec!["transfer", "slow", "failed"]);
    }

    #[tokio::test]
    async fn normalize_empty_text_is_not_an_error() {
        let normalizer = TextNormalizer::new(None);
        let tokens = normalizer.normalize("").await.unwrap();
        assert!(tokens.is_empty());
    }

    #[tokio::test]
    async fn normalize_is_reproducible() {
        let normalizer = TextNormalizer::new(None);
        let first = normalizer.normalize("App keeps crashing badly").await.unwrap();
        let second = normalizer.normalize("App keeps crashing badly").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn normalize_batch_preserves_input_order() {
        let normalizer = TextNormalizer::new(None);
        let docs = normalizer
            .normalize_batch(&["transfer failed", "", "login broken"])
            .await
            .unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0], vec!["transfer", "failed"]);
        assert!(docs[1].is_empty());
        assert_eq!(docs[2], vec!["login", "broken"]);
    }

    #[tokio::test]
    async fn custom_stopwords_replace_the_default_set() {
        let normalizer =
            TextNormalizer::new(None).with_stopwords(vec!["transfer".to_string()]);
        let tokens = normalizer.normalize("the transfer failed").await.unwrap();
        // "the" is no longer filtered as a stop-word (custom set replaced it),
        // but it is dropped by the length filter.
        assert_eq!(tokens, vec!["failed"]);
    }
}
