//! Per-(bank, theme) review counting.

use std::collections::BTreeMap;

use revlens_core::ReviewRecord;

/// One aggregated row: how many reviews of a bank carry a theme.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ThemeCount {
    pub bank_name: String,
    pub theme: String,
    pub n_reviews: i64,
}

/// Explode each review across its theme labels and count exact
/// (bank, theme) occurrences.
///
/// A review with two themes contributes one count to each of its two rows.
/// Untagged reviews count under the `Other` fallback. Rows come back sorted
/// by (bank, theme) so output is deterministic.
#[must_use]
pub fn count_themes(records: &[ReviewRecord]) -> Vec<ThemeCount> {
    let mut counts: BTreeMap<(String, String), i64> = BTreeMap::new();

    for record in records {
        for theme in record.themes_or_fallback() {
            *counts
                .entry((record.bank_name.clone(), theme))
                .or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|((bank_name, theme), n_reviews)| ThemeCount {
            bank_name,
            theme,
            n_reviews,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(bank: &str, themes: Option<Vec<&str>>) -> ReviewRecord {
        ReviewRecord {
            bank_name: bank.to_string(),
            bank_code: String::new(),
            review_text: String::new(),
            rating: 3,
            review_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            review_year: 2024,
            review_month: 1,
            user_name: String::new(),
            thumbs_up: 0,
            text_length: 0,
            source: String::new(),
            sentiment_label: None,
            sentiment_score: None,
            themes: themes.map(|t| t.into_iter().map(ToString::to_string).collect()),
        }
    }

    #[test]
    fn multi_theme_review_counts_once_per_theme() {
        let records = vec![record("A", Some(vec!["Customer Support", "Card & Payments"]))];
        let counts = count_themes(&records);
        assert_eq!(
            counts,
            vec![
                ThemeCount {
                    bank_name: "A".to_string(),
                    theme: "Card & Payments".to_string(),
                    n_reviews: 1,
                },
                ThemeCount {
                    bank_name: "A".to_string(),
                    theme: "Customer Support".to_string(),
                    n_reviews: 1,
                },
            ]
        );
    }

    #[test]
    fn untagged_review_counts_as_other() {
        let records = vec![record("A", None)];
        let counts = count_themes(&records);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].theme, "Other");
        assert_eq!(counts[0].n_reviews, 1);
    }

    #[test]
    fn counts_sum_to_exploded_review_theme_pairs() {
        let records = vec![
            record("A", Some(vec!["Customer Support"])),
            record("A", Some(vec!["Customer Support", "Card & Payments"])),
            record("B", Some(vec!["Other"])),
        ];
        let counts = count_themes(&records);

        let total: i64 = counts.iter().map(|c| c.n_reviews).sum();
        // 1 + 2 + 1 exploded pairs, >= the 3 reviews.
        assert_eq!(total, 4);

        let bank_a_total: i64 = counts
            .iter()
            .filter(|c| c.bank_name == "A")
            .map(|c| c.n_reviews)
            .sum();
        assert_eq!(bank_a_total, 3);
    }

    #[test]
    fn rows_are_sorted_by_bank_then_theme() {
        let records = vec![
            record("B", Some(vec!["Zeta"])),
            record("A", Some(vec!["Beta"])),
            record("A", Some(vec!["Alpha"])),
        ];
        let counts = count_themes(&records);
        let keys: Vec<(&str, &str)> = counts
            .iter()
            .map(|c| (c.bank_name.as_str(), c.theme.as_str()))
            .collect();
        assert_eq!(keys, vec![("A", "Alpha"), ("A", "Beta"), ("B", "Zeta")]);
    }

    #[test]
    fn same_theme_accumulates_across_reviews() {
        let records = vec![
            record("A", Some(vec!["Customer Support"])),
            record("A", Some(vec!["Customer Support"])),
        ];
        let counts = count_themes(&records);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].n_reviews, 2);
    }
}
