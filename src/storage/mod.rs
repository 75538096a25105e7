/// 키-값 저장소
/// 브라우저 로컬 스토리지처럼 문자열 키에 JSON 문자열을 저장한다.
/// 1. 메모리 저장소 (테스트용)
/// 2. SQLite 저장소 (영속)
// region:    --- Imports
use crate::error::StoreResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

pub mod sqlite;

pub use sqlite::SqliteStorage;

// endregion: --- Imports

// region:    --- Storage Keys
/// 고정 저장 키
pub mod keys {
    pub const USERS: &str = "silebar_users";
    pub const AUCTIONS: &str = "silebar_auctions";
    pub const SESSION: &str = "silebar_session";
    /// 선언만 되어 있고 사용하는 연산은 없음
    pub const BIDS: &str = "silebar_bids";
    pub const THEME: &str = "theme";
}

// endregion: --- Storage Keys

// region:    --- Storage Trait
/// 저장소 트레이트
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
    async fn remove_item(&self, key: &str) -> StoreResult<()>;
}

/// JSON 값 읽기
/// 값이 없거나 빈 문자열이면 None
pub async fn read_json<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
) -> StoreResult<Option<T>> {
    match storage.get_item(key).await? {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

/// JSON 값 쓰기
pub async fn write_json<T: Serialize + ?Sized>(
    storage: &dyn Storage,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let raw = serde_json::to_string(value)?;
    storage.set_item(key, &raw).await
}

// endregion: --- Storage Trait

// region:    --- Memory Storage
/// 메모리 저장소
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!("{:<12} --> set key={} ({} bytes)", "Storage", key, value.len());
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> StoreResult<()> {
        debug!("{:<12} --> remove key={}", "Storage", key);
        self.items.write().await.remove(key);
        Ok(())
    }
}

// endregion: --- Memory Storage
