use async_trait::async_trait;
use folio_shared::{KeyValueStore, StoreError};
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::table::KvStore;

/// [`KeyValueStore`] persisted in the `kv_store` table.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => StoreError::Unavailable,
        err => StoreError::Backend(err.to_string()),
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let statement = Query::select()
            .column(KvStore::Value)
            .from(KvStore::Table)
            .and_where(Expr::col(KvStore::Key).eq(key))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let statement = Query::insert()
            .into_table(KvStore::Table)
            .columns([KvStore::Key, KvStore::Value, KvStore::UpdatedAt])
            .values_panic([key.into(), value.into(), now.into()])
            .on_conflict(
                OnConflict::column(KvStore::Key)
                    .update_columns([KvStore::Value, KvStore::UpdatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let statement = Query::delete()
            .from_table(KvStore::Table)
            .and_where(Expr::col(KvStore::Key).eq(key))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        Ok(())
    }
}
