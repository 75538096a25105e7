/// 경매 저장소
/// 전체 경매 목록을 하나의 JSON 배열로 저장하고, 매 연산마다 읽고-수정하고-쓴다.
// region:    --- Imports
use super::model::{Auction, AuctionFilter, AuctionStatus, NewAuction};
use super::seed;
use crate::clock::Clock;
use crate::error::StoreResult;
use crate::storage::{keys, read_json, write_json, Storage};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

// endregion: --- Imports

const ID_PREFIX: &str = "auc_";

// region:    --- Auction Repository
pub struct AuctionRepository {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    // 마지막으로 발급한 id의 밀리초 값
    last_id_millis: AtomicI64,
}

impl AuctionRepository {
    pub fn new(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            last_id_millis: AtomicI64::new(0),
        }
    }

    /// 저장소 생성 후 시딩까지 수행
    pub async fn initialize(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> StoreResult<Self> {
        let repo = Self::new(storage, clock);
        repo.seed().await?;
        Ok(repo)
    }

    /// 초기 데이터 시딩
    pub async fn seed(&self) -> StoreResult<bool> {
        seed::seed_data(self.storage.as_ref(), self.clock.as_ref()).await
    }

    async fn load_all(&self) -> StoreResult<Vec<Auction>> {
        Ok(read_json::<Vec<Auction>>(self.storage.as_ref(), keys::AUCTIONS)
            .await?
            .unwrap_or_default())
    }

    async fn save_all(&self, auctions: &[Auction]) -> StoreResult<()> {
        write_json(self.storage.as_ref(), keys::AUCTIONS, auctions).await
    }

    /// 경매 목록 조회
    /// 저장 순서를 유지한다.
    pub async fn get_auctions(&self, filter: &AuctionFilter) -> StoreResult<Vec<Auction>> {
        let mut auctions = self.load_all().await?;
        auctions.retain(|a| filter.matches(a));
        Ok(auctions)
    }

    /// id로 경매 조회
    pub async fn get_auction_by_id(&self, id: &str) -> StoreResult<Option<Auction>> {
        Ok(self.load_all().await?.into_iter().find(|a| a.id == id))
    }

    /// 경매 생성
    /// id, status, created_at 은 호출자 값과 관계없이 생성값이 적용된다.
    pub async fn create_auction(&self, data: NewAuction) -> StoreResult<Auction> {
        let mut auctions = self.load_all().await?;
        let now = self.clock.now();
        let id = self.next_id(now.timestamp_millis(), &auctions);

        let auction = data.into_auction(id, now);
        auctions.insert(0, auction.clone());
        self.save_all(&auctions).await?;

        info!(
            "{:<12} --> 경매 생성 id: {}, seller: {}",
            "Auction", auction.id, auction.seller_email
        );
        Ok(auction)
    }

    /// 경매 상태 변경
    /// 상태 값 검증은 하지 않는다.
    pub async fn update_auction_status(
        &self,
        id: &str,
        status: impl Into<AuctionStatus>,
    ) -> StoreResult<bool> {
        let mut auctions = self.load_all().await?;
        let Some(auction) = auctions.iter_mut().find(|a| a.id == id) else {
            warn!("{:<12} --> 상태 변경 대상 없음 id: {}", "Auction", id);
            return Ok(false);
        };

        auction.status = status.into();
        info!(
            "{:<12} --> 상태 변경 id: {}, status: {}",
            "Auction", id, auction.status
        );
        self.save_all(&auctions).await?;
        Ok(true)
    }

    /// 시각 기반 id 생성
    /// 같은 밀리초에 여러 번 호출되거나 시계가 뒤로 가도 이전 id보다 커지도록 올린다.
    fn next_id(&self, now_millis: i64, existing: &[Auction]) -> String {
        let last = self.last_id_millis.load(Ordering::SeqCst);
        let mut candidate = now_millis.max(last + 1);

        loop {
            let id = format!("{}{}", ID_PREFIX, candidate);
            if existing.iter().all(|a| a.id != id) {
                self.last_id_millis.fetch_max(candidate, Ordering::SeqCst);
                return id;
            }
            candidate += 1;
        }
    }
}

// endregion: --- Auction Repository
