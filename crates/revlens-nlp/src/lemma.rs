//! HTTP client for the external lemmatizer service.

use serde::Serialize;

use crate::error::NlpError;

/// Maximum number of texts per /lemmatize call.
const BATCH_SIZE: usize = 64;

/// Lemmatizer HTTP client.
///
/// The service contract: `POST {url}/lemmatize` with `{"inputs": [texts]}`
/// returns one array of lemma tokens per input text, same length and order.
pub struct LemmaClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct LemmatizeRequest<'a> {
    inputs: &'a [&'a str],
}

impl LemmaClient {
    /// Create a new `LemmaClient` for the given service base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/lemmatize", base_url.trim_end_matches('/')),
        }
    }

    /// Lemmatize a batch of texts.
    ///
    /// Texts are batched into groups of [`BATCH_SIZE`] per request. Returns
    /// one token sequence per input text, in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::Lemmatizer`] if a request fails, the service
    /// returns a non-success status, or the response length does not match
    /// the input length.
    pub async fn lemmatize(&self, texts: &[&str]) -> Result<Vec<Vec<String>>, NlpError> {
        let mut all_docs = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            let request = LemmatizeRequest { inputs: chunk };
            let response = self
                .client
                .post(&self.url)
                .json(&request)
                .send()
                .await
                .map_err(|e| NlpError::Lemmatizer(format!("lemmatizer request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(NlpError::Lemmatizer(format!(
                    "lemmatizer returned status {}",
                    response.status()
                )));
            }

            let docs: Vec<Vec<String>> = response.json().await.map_err(|e| {
                NlpError::Lemmatizer(format!("lemmatizer response parse error: {e}"))
            })?;

            if docs.len() != chunk.len() {
                return Err(NlpError::Lemmatizer(format!(
                    "lemmatizer returned {} documents for {} inputs",
                    docs.len(),
                    chunk.len()
                )));
            }

            all_docs.extend(docs);
        }

        Ok(all_docs)
    }
}
