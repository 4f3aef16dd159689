//! Database operations for the `reviews` table.

use std::collections::HashMap;

use rust_decimal::prelude::*;
use sqlx::PgPool;

use revlens_core::ReviewRecord;

use crate::DbError;

/// Insert a batch of reviews inside one transaction, resolving each bank
/// name through the supplied `bank_name -> bank_id` map.
///
/// Inserts are append-only. `sentiment_score` is stored as `NUMERIC(6,3)`;
/// values outside [-1, 1] never occur upstream.
///
/// A review whose bank name is absent from the map fails the whole batch
/// with [`DbError::UnknownBank`]: an unresolvable name means banks were not
/// ingested first, which is an ordering bug worth surfacing, not skipping.
///
/// # Errors
///
/// Returns [`DbError::UnknownBank`] for an unresolvable bank name, or
/// [`DbError::Sqlx`] if any insert fails.
pub async fn insert_reviews(
    pool: &PgPool,
    bank_ids: &HashMap<String, i64>,
    records: &[ReviewRecord],
) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for record in records {
        let bank_id = *bank_ids
            .get(&record.bank_name)
            .ok_or_else(|| DbError::UnknownBank(record.bank_name.clone()))?;

        let sentiment_label = record.sentiment_label.map(|l| l.to_string());
        let sentiment_score = record
            .sentiment_score
            .and_then(Decimal::from_f32)
            .map(|d| d.round_dp(3));

        sqlx::query(
            "INSERT INTO reviews \
                 (bank_id, review_text, rating, review_date, review_year, review_month, \
                  user_name, thumbs_up, text_length, source, sentiment_label, sentiment_score, themes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(bank_id)
        .bind(&record.review_text)
        .bind(record.rating)
        .bind(record.review_date)
        .bind(record.review_year)
        .bind(i32::try_from(record.review_month).unwrap_or(0))
        .bind(&record.user_name)
        .bind(record.thumbs_up)
        .bind(record.text_length)
        .bind(&record.source)
        .bind(sentiment_label)
        .bind(sentiment_score)
        .bind(record.themes.as_deref())
        .execute(&mut *tx)
        .await?;

        count += 1;
    }

    tx.commit().await?;
    Ok(count)
}
