use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    folio_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}
