//! `ingest` command: load banks and reviews into Postgres.

use std::path::Path;

use chrono::Utc;

use revlens_core::{AppConfig, ReviewRecord};
use revlens_nlp::count_themes;

use crate::db;
use crate::io;

pub(crate) async fn run_ingest(config: &AppConfig, input: &Path) -> anyhow::Result<()> {
    let records = io::read_reviews(input)?;
    tracing::info!(reviews = records.len(), "loaded review table");

    if records.is_empty() {
        println!("no reviews to ingest");
        return Ok(());
    }

    let pool = db::connect(config).await?;

    let banks = unique_banks(&records);
    let banks_upserted = revlens_db::upsert_banks(&pool, &banks).await?;
    let bank_ids = revlens_db::bank_id_map(&pool).await?;
    let reviews_inserted = revlens_db::insert_reviews(&pool, &bank_ids, &records).await?;

    tracing::info!(
        banks = banks.len(),
        banks_upserted,
        reviews = reviews_inserted,
        "ingest complete"
    );

    // Reviews that went through the themes command carry a rollup worth
    // snapshotting alongside them.
    let mut theme_rows_inserted = 0usize;
    if records.iter().any(|r| r.themes.is_some()) {
        let rows: Vec<(String, String, i64)> = count_themes(&records)
            .into_iter()
            .map(|c| (c.bank_name, c.theme, c.n_reviews))
            .collect();
        theme_rows_inserted = revlens_db::insert_theme_counts(&pool, Utc::now(), &rows).await?;
    }

    println!(
        "ingested {} reviews across {} banks ({} theme rows)",
        reviews_inserted,
        banks.len(),
        theme_rows_inserted
    );
    Ok(())
}

/// Collect the distinct (bank_name, bank_code) pairs, first occurrence wins,
/// in input order.
fn unique_banks(records: &[ReviewRecord]) -> Vec<(String, String)> {
    let mut seen = std::collections::HashSet::new();
    let mut banks = Vec::new();

    for record in records {
        if seen.insert(record.bank_name.as_str()) {
            banks.push((record.bank_name.clone(), record.bank_code.clone()));
        }
    }

    banks
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn review(bank: &str, code: &str) -> ReviewRecord {
        ReviewRecord {
            bank_name: bank.to_string(),
            bank_code: code.to_string(),
            review_text: "fine".to_string(),
            rating: 3,
            review_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            review_year: 2024,
            review_month: 1,
            user_name: String::new(),
            thumbs_up: 0,
            text_length: 4,
            source: String::new(),
            sentiment_label: None,
            sentiment_score: None,
            themes: None,
        }
    }

    #[test]
    fn unique_banks_dedupes_by_name_keeping_first_code() {
        let records = vec![
            review("Bank A", "BOA"),
            review("Bank B", "BOB"),
            review("Bank A", "OTHER"),
        ];
        let banks = unique_banks(&records);
        assert_eq!(
            banks,
            vec![
                ("Bank A".to_string(), "BOA".to_string()),
                ("Bank B".to_string(), "BOB".to_string()),
            ]
        );
    }

    #[test]
    fn unique_banks_of_empty_input_is_empty() {
        assert!(unique_banks(&[]).is_empty());
    }
}
