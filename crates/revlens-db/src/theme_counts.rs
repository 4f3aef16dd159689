//! Database operations for the `theme_counts` rollup table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `theme_counts` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ThemeCountRow {
    pub id: i64,
    pub bank_name: String,
    pub theme: String,
    pub n_reviews: i64,
    pub captured_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert one aggregation run's (bank, theme, count) rows in a single
/// transaction, all sharing the same `captured_at` timestamp.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any insert fails; the batch rolls back.
pub async fn insert_theme_counts(
    pool: &PgPool,
    captured_at: DateTime<Utc>,
    rows: &[(String, String, i64)],
) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for (bank_name, theme, n_reviews) in rows {
        sqlx::query(
            "INSERT INTO theme_counts (bank_name, theme, n_reviews, captured_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(bank_name)
        .bind(theme)
        .bind(n_reviews)
        .bind(captured_at)
        .execute(&mut *tx)
        .await?;
        count += 1;
    }

    tx.commit().await?;
    Ok(count)
}

/// List stored theme counts, optionally filtered by bank, newest run first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_theme_counts(
    pool: &PgPool,
    bank_name: Option<&str>,
    limit: i64,
) -> Result<Vec<ThemeCountRow>, DbError> {
    let rows = match bank_name {
        Some(name) => {
            sqlx::query_as::<_, ThemeCountRow>(
                "SELECT id, bank_name, theme, n_reviews, captured_at \
                 FROM theme_counts \
                 WHERE bank_name = $1 \
                 ORDER BY captured_at DESC, theme ASC \
                 LIMIT $2",
            )
            .bind(name)
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, ThemeCountRow>(
                "SELECT id, bank_name, theme, n_reviews, captured_at \
                 FROM theme_counts \
                 ORDER BY captured_at DESC, bank_name ASC, theme ASC \
                 LIMIT $1",
            )
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows)
}
