//! `db` maintenance commands and the shared pool constructor.

use revlens_core::AppConfig;
use revlens_db::PoolConfig;
use sqlx::PgPool;

/// Open a pool from the loaded configuration.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is unset or the connection fails.
pub(crate) async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("this command needs DATABASE_URL to be set"))?;

    let pool_config = PoolConfig {
        max_connections: config.db_max_connections,
        min_connections: config.db_min_connections,
        acquire_timeout_secs: config.db_acquire_timeout_secs,
    };

    Ok(revlens_db::connect_pool(url, pool_config).await?)
}

pub(crate) async fn run_ping(config: &AppConfig) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    revlens_db::ping(&pool).await?;
    println!("database is reachable");
    Ok(())
}

pub(crate) async fn run_migrate(config: &AppConfig) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    revlens_db::run_migrations(&pool).await?;
    println!("migrations are up to date");
    Ok(())
}

pub(crate) async fn run_themes(
    config: &AppConfig,
    bank: Option<&str>,
    limit: i64,
) -> anyhow::Result<()> {
    let pool = connect(config).await?;
    let rows = revlens_db::list_theme_counts(&pool, bank, limit).await?;

    if rows.is_empty() {
        println!("no stored theme counts");
        return Ok(());
    }

    for row in rows {
        println!(
            "{}\t{}\t{}\t{}",
            row.captured_at.format("%Y-%m-%d %H:%M"),
            row.bank_name,
            row.theme,
            row.n_reviews
        );
    }
    Ok(())
}
