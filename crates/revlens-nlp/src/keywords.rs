//! Per-group term-importance ranking (TF-IDF over unigrams and bigrams).

use std::collections::{BTreeMap, HashMap};

/// Default vocabulary cap per group.
const DEFAULT_MAX_FEATURES: usize = 1000;

/// One ranked term and its summed TF-IDF weight across a group's documents.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankedTerm {
    pub term: String,
    pub score: f64,
}

/// TF-IDF keyword extractor.
///
/// Statistics are scoped to one group at a time: each bank's ranking is
/// computed from that bank's documents only, so the output reflects the
/// group's own distinctive vocabulary rather than corpus-global weights.
///
/// Conventions follow the usual vectorizer defaults so rankings are
/// comparable across runs: raw term counts, smooth idf
/// (`ln((1+n)/(1+df)) + 1`), per-document L2 normalization, and a
/// vocabulary capped at `max_features` terms kept by highest corpus
/// frequency (lexicographic tie-break). Final ranking ties also break
/// lexicographically, which keeps output deterministic.
pub struct KeywordExtractor {
    max_features: usize,
    ngram_max: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            ngram_max: 2,
        }
    }
}

impl KeywordExtractor {
    /// Extractor with an explicit vocabulary cap and maximum n-gram length.
    #[must_use]
    pub fn new(max_features: usize, ngram_max: usize) -> Self {
        Self {
            max_features: max_features.max(1),
            ngram_max: ngram_max.max(1),
        }
    }

    /// Rank terms for every group of normalized documents.
    ///
    /// Returns one ranking per group key, each sorted by descending score
    /// (ties lexicographic) and truncated to `top_n`. Groups whose documents
    /// are all empty map to an empty ranking, never an error.
    #[must_use]
    pub fn extract(
        &self,
        documents: impl IntoIterator<Item = (String, Vec<String>)>,
        top_n: usize,
    ) -> BTreeMap<String, Vec<RankedTerm>> {
        let mut groups: BTreeMap<String, Vec<Vec<String>>> = BTreeMap::new();
        for (group_key, tokens) in documents {
            groups.entry(group_key).or_default().push(tokens);
        }

        groups
            .into_iter()
            .map(|(group_key, docs)| {
                let ranking = self.rank_terms(&docs, top_n);
                (group_key, ranking)
            })
            .collect()
    }

    /// Rank terms for a single group of normalized documents.
    #[must_use]
    pub fn rank_terms(&self, docs: &[Vec<String>], top_n: usize) -> Vec<RankedTerm> {
        let doc_counts: Vec<HashMap<String, usize>> = docs
            .iter()
            .map(|tokens| self.ngram_counts(tokens))
            .collect();

        // Corpus frequency per term, for the vocabulary cap.
        let mut totals: HashMap<&str, usize> = HashMap::new();
        for counts in &doc_counts {
            for (term, count) in counts {
                *totals.entry(term).or_insert(0) += count;
            }
        }

        if totals.is_empty() {
            return Vec::new();
        }

        let vocab = self.select_vocabulary(&totals);

        // Document frequency per vocabulary term.
        let mut df: HashMap<&str, usize> = HashMap::new();
        for counts in &doc_counts {
            for term in counts.keys() {
                if vocab.contains_key(term.as_str()) {
                    *df.entry(term).or_insert(0) += 1;
                }
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let n_docs = docs.len() as f64;
        let idf: HashMap<&str, f64> = df
            .iter()
            .map(|(&term, &freq)| {
                #[allow(clippy::cast_precision_loss)]
                let idf = ((1.0 + n_docs) / (1.0 + freq as f64)).ln() + 1.0;
                (term, idf)
            })
            .collect();

        // Summed, per-document L2-normalized TF-IDF weights.
        let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
        for counts in &doc_counts {
            let weights: Vec<(&str, f64)> = counts
                .iter()
                .filter(|(term, _)| vocab.contains_key(term.as_str()))
                .map(|(term, &count)| {
                    #[allow(clippy::cast_precision_loss)]
                    let tf = count as f64;
                    (term.as_str(), tf * idf[term.as_str()])
                })
                .collect();

            let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (term, weight) in weights {
                    *sums.entry(term).or_insert(0.0) += weight / norm;
                }
            }
        }

        let mut ranking: Vec<RankedTerm> = sums
            .into_iter()
            .map(|(term, score)| RankedTerm {
                term: term.to_string(),
                score,
            })
            .collect();
        ranking.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        ranking.truncate(top_n);
        ranking
    }

    fn ngram_counts(&self, tokens: &[String]) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for n in 1..=self.ngram_max {
            if tokens.len() < n {
                break;
            }
            for window in tokens.windows(n) {
                let term = window.join(" ");
                *counts.entry(term).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Cap the vocabulary at `max_features` terms, kept by highest corpus
    /// frequency with lexicographic tie-break.
    fn select_vocabulary<'a>(&self, totals: &HashMap<&'a str, usize>) -> HashMap<&'a str, usize> {
        if totals.len() <= self.max_features {
            return totals.clone();
        }

        let mut by_frequency: Vec<(&str, usize)> =
            totals.iter().map(|(&term, &count)| (term, count)).collect();
        by_frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        by_frequency.truncate(self.max_features);
        by_frequency.into_iter().collect()
    }
}
