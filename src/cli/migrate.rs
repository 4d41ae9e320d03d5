use anyhow::Result;

use crate::config::Config;

pub async fn migrate(config: Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}
