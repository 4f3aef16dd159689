//! `keywords` command: per-bank TF-IDF term rankings.

use std::path::Path;

use revlens_core::AppConfig;
use revlens_nlp::{extract_bank_keywords, KeywordExtractor, LemmaClient, TextNormalizer};

use crate::io;

pub(crate) async fn run_keywords(
    config: &AppConfig,
    input: &Path,
    out_dir: &Path,
    top_n: Option<usize>,
) -> anyhow::Result<()> {
    let records = io::read_reviews(input)?;
    tracing::info!(reviews = records.len(), "loaded review table");

    let lemmatizer = config.lemmatizer_url.as_deref().map(LemmaClient::new);
    let normalizer = TextNormalizer::new(lemmatizer);
    let extractor = KeywordExtractor::default();
    let top_n = top_n.unwrap_or(config.keyword_top_n);

    let rankings = extract_bank_keywords(&normalizer, &extractor, &records, top_n).await?;

    std::fs::create_dir_all(out_dir)?;
    for (bank_name, terms) in &rankings {
        let path = out_dir.join(format!("{}_tfidf_terms.csv", io::file_stem_for(bank_name)));
        io::write_terms(&path, terms)?;
        tracing::info!(bank = %bank_name, terms = terms.len(), file = %path.display(), "wrote term table");
    }

    println!(
        "ranked keywords for {} banks -> {}",
        rankings.len(),
        out_dir.display()
    );
    Ok(())
}
