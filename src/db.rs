use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use sqlx_migrator::{Migrate, Plan};
use std::str::FromStr;
use tracing::log::LevelFilter;

/// WAL journal, busy timeout and in-memory temp tables for every connection.
async fn configure_pragmas(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA temp_store = memory")
        .execute(pool)
        .await?;

    Ok(())
}

/// Opens a pool on `database_url`, creating the database file when missing.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .log_statements(LevelFilter::Debug);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    configure_pragmas(&pool).await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Applies every pending key-value store migration.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    folio_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_shared::KeyValueStore;

    #[tokio::test]
    async fn test_create_pool_applies_pragmas() {
        let pool = create_pool(":memory:", 1).await.unwrap();

        let journal_mode: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(journal_mode.0, "memory"); // WAL doesn't apply to :memory:

        let temp_store: (i32,) = sqlx::query_as("PRAGMA temp_store")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(temp_store.0, 2);
    }

    #[tokio::test]
    async fn test_migrate_creates_store_table() {
        let dir = temp_dir::TempDir::new().unwrap();
        let url = format!("sqlite:{}", dir.child("folio.db").display());
        let pool = create_pool(&url, 1).await.unwrap();

        migrate(&pool).await.unwrap();
        // applying twice is a no-op
        migrate(&pool).await.unwrap();

        let store = folio_db::SqliteStore::new(pool);
        store.set("portfolio-theme", "dark").await.unwrap();
        assert_eq!(
            store.get("portfolio-theme").await.unwrap().as_deref(),
            Some("dark")
        );
    }
}
