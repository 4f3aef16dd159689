//! Review pipeline orchestration.

use std::collections::BTreeMap;

use revlens_core::ReviewRecord;

use crate::aggregate::{count_themes, ThemeCount};
use crate::error::NlpError;
use crate::keywords::{KeywordExtractor, RankedTerm};
use crate::normalize::TextNormalizer;
use crate::scorer::SentimentBackend;
use crate::tagger::ThemeTagger;

/// Fully processed batch: per-review derived fields plus the theme rollup.
pub struct PipelineOutput {
    pub reviews: Vec<ReviewRecord>,
    pub theme_counts: Vec<ThemeCount>,
}

/// Score every review with the chosen backend and fill in
/// `sentiment_label`/`sentiment_score`.
///
/// Scores are zipped back onto the records positionally, so backends must
/// (and do) return exactly one result per input in input order.
///
/// # Errors
///
/// Returns [`NlpError::Classifier`] if the model backend fails for a batch.
/// Nothing is partially scored: the affected batch fails as a whole.
pub async fn score_reviews(
    backend: &SentimentBackend,
    mut records: Vec<ReviewRecord>,
) -> Result<Vec<ReviewRecord>, NlpError> {
    let texts: Vec<&str> = records.iter().map(|r| r.review_text.as_str()).collect();
    let sentiments = backend.score_batch(&texts).await?;

    if sentiments.len() != records.len() {
        return Err(NlpError::Classifier(format!(
            "backend returned {} results for {} reviews",
            sentiments.len(),
            records.len()
        )));
    }

    for (record, sentiment) in records.iter_mut().zip(sentiments) {
        record.sentiment_label = Some(sentiment.label);
        record.sentiment_score = Some(sentiment.score);
    }

    tracing::info!(
        backend = backend.name(),
        reviews = records.len(),
        "sentiment scoring complete"
    );
    Ok(records)
}

/// Assign themes to every review, filling in `themes`.
#[must_use]
pub fn tag_reviews(tagger: &ThemeTagger, mut records: Vec<ReviewRecord>) -> Vec<ReviewRecord> {
    for record in &mut records {
        record.themes = Some(tagger.assign(&record.review_text));
    }
    tracing::info!(reviews = records.len(), "theme tagging complete");
    records
}

/// Run the full pipeline: score, tag, and aggregate theme counts per bank.
///
/// # Errors
///
/// Returns [`NlpError`] if the scoring backend's collaborator fails.
pub async fn run_review_pipeline(
    backend: &SentimentBackend,
    tagger: &ThemeTagger,
    records: Vec<ReviewRecord>,
) -> Result<PipelineOutput, NlpError> {
    let scored = score_reviews(backend, records).await?;
    let tagged = tag_reviews(tagger, scored);
    let theme_counts = count_themes(&tagged);

    tracing::info!(
        reviews = tagged.len(),
        theme_rows = theme_counts.len(),
        "pipeline complete"
    );
    Ok(PipelineOutput {
        reviews: tagged,
        theme_counts,
    })
}

/// Normalize review texts and rank each bank's keywords.
///
/// Normalization runs over the whole batch (one lemmatizer round-trip per
/// chunk); ranking then happens per bank with group-scoped statistics.
///
/// # Errors
///
/// Returns [`NlpError::Lemmatizer`] if a configured lemmatizer call fails.
pub async fn extract_bank_keywords(
    normalizer: &TextNormalizer,
    extractor: &KeywordExtractor,
    records: &[ReviewRecord],
    top_n: usize,
) -> Result<BTreeMap<String, Vec<RankedTerm>>, NlpError> {
    let texts: Vec<&str> = records.iter().map(|r| r.review_text.as_str()).collect();
    let token_docs = normalizer.normalize_batch(&texts).await?;

    let documents = records
        .iter()
        .zip(token_docs)
        .map(|(record, tokens)| (record.bank_name.clone(), tokens));

    let rankings = extractor.extract(documents, top_n);
    tracing::info!(banks = rankings.len(), top_n, "keyword extraction complete");
    Ok(rankings)
}
