// region:    --- Imports
use super::Storage;
use crate::error::StoreResult;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- Queries
const GET_ITEM: &str = "SELECT value FROM kv_store WHERE key = $1";

const SET_ITEM: &str = r#"
    INSERT INTO kv_store (key, value, updated_at)
    VALUES ($1, $2, $3)
    ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
"#;

const REMOVE_ITEM: &str = "DELETE FROM kv_store WHERE key = $1";

// endregion: --- Queries

// region:    --- Sqlite Storage
/// SQLite 기반 영속 저장소
#[derive(Clone)]
pub struct SqliteStorage {
    pool: Arc<SqlitePool>,
}

impl SqliteStorage {
    /// 저장소 생성
    /// 메모리 DB는 연결마다 따로 생기므로 연결 하나만 유지한다.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let in_memory = database_url.contains(":memory:");

        let pool = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        info!("{:<12} --> SQLite 연결: {}", "Storage", database_url);
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// 연결 후 스키마까지 초기화
    pub async fn open(database_url: &str) -> StoreResult<Self> {
        let storage = Self::connect(database_url).await?;
        storage.initialize_database().await?;
        Ok(storage)
    }

    /// 데이터베이스 풀 가져오기
    pub fn get_pool(&self) -> Arc<SqlitePool> {
        Arc::clone(&self.pool)
    }

    /// 데이터베이스 초기화
    pub async fn initialize_database(&self) -> StoreResult<()> {
        let create_schema_sql = include_str!("../../sql/01-create-schema.sql");
        self.execute_multi_query(create_schema_sql).await?;
        info!("{:<12} --> 스키마 초기화 완료", "Storage");
        Ok(())
    }

    /// 여러 쿼리 실행
    async fn execute_multi_query(&self, sql: &str) -> Result<(), sqlx::Error> {
        for query in sql.split(';') {
            let query = query.trim();
            if !query.is_empty() && !is_comment_only(query) {
                sqlx::query(query).execute(&*self.pool).await?;
            }
        }
        Ok(())
    }
}

fn is_comment_only(query: &str) -> bool {
    query
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with("--"))
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let row = sqlx::query(GET_ITEM)
            .bind(key)
            .fetch_optional(&*self.pool)
            .await?;
        Ok(row.map(|r| r.get::<String, _>("value")))
    }

    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!("{:<12} --> set key={} ({} bytes)", "Storage", key, value.len());
        sqlx::query(SET_ITEM)
            .bind(key)
            .bind(value)
            .bind(Utc::now().to_rfc3339())
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> StoreResult<()> {
        debug!("{:<12} --> remove key={}", "Storage", key);
        sqlx::query(REMOVE_ITEM)
            .bind(key)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }
}

// endregion: --- Sqlite Storage

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_overwrites_value() {
        let storage = SqliteStorage::open("sqlite::memory:").await.unwrap();
        storage.set_item("k", "1").await.unwrap();
        storage.set_item("k", "2").await.unwrap();
        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("2"));

        storage.remove_item("k").await.unwrap();
        assert!(storage.get_item("k").await.unwrap().is_none());
    }

    #[test]
    fn test_comment_only_chunk_skipped() {
        assert!(is_comment_only("-- header\n  "));
        assert!(!is_comment_only("-- header\nCREATE TABLE t (a TEXT)"));
    }
}
