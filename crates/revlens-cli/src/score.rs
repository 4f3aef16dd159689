//! `score` command: fill in sentiment columns for a review CSV.

use std::path::Path;

use revlens_core::AppConfig;
use revlens_nlp::{score_reviews, ClassifierClient, LexiconScorer, SentimentBackend};

use crate::io;
use crate::Backend;

pub(crate) async fn run_score(
    config: &AppConfig,
    input: &Path,
    output: &Path,
    backend: Backend,
) -> anyhow::Result<()> {
    let records = io::read_reviews(input)?;
    tracing::info!(reviews = records.len(), "loaded review table");

    let backend = build_backend(config, backend)?;
    let scored = score_reviews(&backend, records).await?;
    io::write_reviews(output, &scored)?;

    println!(
        "scored {} reviews with the {} backend -> {}",
        scored.len(),
        backend.name(),
        output.display()
    );
    Ok(())
}

fn build_backend(config: &AppConfig, backend: Backend) -> anyhow::Result<SentimentBackend> {
    match backend {
        Backend::Lexicon => Ok(SentimentBackend::Lexicon(LexiconScorer::with_threshold(
            config.lexicon_threshold,
        ))),
        Backend::Model => {
            let url = config.classifier_url.as_deref().ok_or_else(|| {
                anyhow::anyhow!("the model backend needs REVLENS_CLASSIFIER_URL to be set")
            })?;
            Ok(SentimentBackend::Model(ClassifierClient::with_options(
                url,
                config.classifier_batch_size,
                config.sentiment_neutral_band,
            )))
        }
    }
}
