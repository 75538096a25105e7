/// 초기 데이터 시딩
/// 경매 키가 비어 있을 때만 기본 경매 두 건을 저장한다.
// region:    --- Imports
use super::model::{Auction, AuctionStatus};
use crate::clock::Clock;
use crate::error::StoreResult;
use crate::storage::{keys, write_json, Storage};
use chrono::{DateTime, Duration, Utc};
use serde_json::Map;
use tracing::{debug, info};

// endregion: --- Imports

const SEED_SELLER: &str = "seller@silebar.com";

/// 기본 경매 목록
pub fn default_auctions(now: DateTime<Utc>) -> Vec<Auction> {
    vec![
        Auction {
            id: "auc_001".to_string(),
            title: "PlayStation 5 Digital Edition".to_string(),
            category: "Elektronik".to_string(),
            price: 5_500_000,
            description: "Kondisi bekas mulus, pemakaian 3 bulan. Fullset.".to_string(),
            status: AuctionStatus::Active,
            seller_email: SEED_SELLER.to_string(),
            image: "https://placehold.co/400x300/e2e8f0/64748b?text=PS5".to_string(),
            created_at: now,
            end_time: now + Duration::days(1),
            extra: Map::new(),
        },
        Auction {
            id: "auc_002".to_string(),
            title: "iPhone 13 128GB Midnight".to_string(),
            category: "Elektronik".to_string(),
            price: 8_000_000,
            description: "Ex iBox, battery health 90%.".to_string(),
            status: AuctionStatus::Pending,
            seller_email: SEED_SELLER.to_string(),
            image: "https://placehold.co/400x300/e2e8f0/64748b?text=iPhone".to_string(),
            created_at: now,
            end_time: now + Duration::days(2),
            extra: Map::new(),
        },
    ]
}

/// 시딩 실행, 실제로 데이터를 넣었으면 true
pub async fn seed_data(storage: &dyn Storage, clock: &dyn Clock) -> StoreResult<bool> {
    if storage.get_item(keys::AUCTIONS).await?.is_some() {
        debug!("{:<12} --> 기존 경매 데이터 존재, 시딩 생략", "Seed");
        return Ok(false);
    }

    let auctions = default_auctions(clock.now());
    write_json(storage, keys::AUCTIONS, &auctions).await?;
    info!("{:<12} --> 기본 경매 {}건 시딩", "Seed", auctions.len());
    Ok(true)
}
