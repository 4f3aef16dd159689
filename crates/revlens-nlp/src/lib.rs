//! Text-scoring and tagging pipeline for bank customer reviews.
//!
//! Turns raw review text into structured signals: a sentiment polarity per
//! review (lexicon or external-model backend), per-bank ranked keywords
//! (per-group TF-IDF over unigrams and bigrams), multi-label themes from
//! configurable keyword rules, and per-(bank, theme) counts.

pub mod aggregate;
pub mod error;
pub mod keywords;
pub mod lexicon;
pub mod normalize;
pub mod pipeline;
pub mod scorer;
pub mod tagger;

mod classifier;
mod lemma;

pub use aggregate::{count_themes, ThemeCount};
pub use classifier::ClassifierClient;
pub use error::NlpError;
pub use keywords::{KeywordExtractor, RankedTerm};
pub use lemma::LemmaClient;
pub use lexicon::LexiconScorer;
pub use normalize::TextNormalizer;
pub use pipeline::{
    extract_bank_keywords, run_review_pipeline, score_reviews, tag_reviews, PipelineOutput,
};
pub use scorer::{Sentiment, SentimentBackend};
pub use tagger::ThemeTagger;
