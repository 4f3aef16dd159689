//! Database operations for the `banks` table.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::DbError;

/// Upsert a batch of (name, code) pairs inside one transaction.
///
/// Keyed by `bank_name`: a conflicting existing name is a no-op and the
/// existing row keeps its code. Returns the number of pairs processed. If
/// any statement fails the whole batch is rolled back.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn upsert_banks(pool: &PgPool, banks: &[(String, String)]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for (bank_name, bank_code) in banks {
        sqlx::query(
            "INSERT INTO banks (bank_name, bank_code) \
             VALUES ($1, $2) \
             ON CONFLICT (bank_name) DO NOTHING",
        )
        .bind(bank_name)
        .bind(bank_code)
        .execute(&mut *tx)
        .await?;
        count += 1;
    }

    tx.commit().await?;
    Ok(count)
}

/// Returns the full `bank_name -> bank_id` mapping.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn bank_id_map(pool: &PgPool) -> Result<HashMap<String, i64>, DbError> {
    let rows: Vec<(i64, String)> = sqlx::query_as("SELECT bank_id, bank_name FROM banks")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|(id, name)| (name, id)).collect())
}
