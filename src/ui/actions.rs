/// 경매 카드 액션
/// 1. 입찰
/// 2. 찜하기
// region:    --- Imports
use super::toast::{ToastCenter, ToastKind};
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::format::format_currency;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{error, info};

// endregion: --- Imports

const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";
const FAVORITE_ERROR_MESSAGE: &str = "Unable to update favorite status.";
const BID_FAILED_MESSAGE: &str = "Unable to place bid.";

const FAVORITE_ON: [&str; 2] = ["text-red-500", "fill-current"];
const FAVORITE_OFF: &str = "text-gray-400";

// region:    --- View Models
/// 경매 카드의 입찰 수 / 현재가 표시
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuctionCard {
    pub bid_count: String,
    pub current_price: String,
}

/// 찜 아이콘 클래스 목록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteIcon {
    classes: BTreeSet<String>,
}

impl FavoriteIcon {
    pub fn new(classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_marked(&self) -> bool {
        FAVORITE_ON.iter().all(|c| self.has_class(c))
    }

    fn set_favorite(&mut self, favorite: bool) {
        if favorite {
            self.classes.remove(FAVORITE_OFF);
            self.classes
                .extend(FAVORITE_ON.iter().map(|c| c.to_string()));
        } else {
            for class in FAVORITE_ON {
                self.classes.remove(class);
            }
            self.classes.insert(FAVORITE_OFF.to_string());
        }
    }
}

// endregion: --- View Models

// region:    --- Auction Actions
pub struct AuctionActions {
    client: Arc<ApiClient>,
    toasts: ToastCenter,
}

impl AuctionActions {
    pub fn new(client: Arc<ApiClient>, toasts: ToastCenter) -> Self {
        Self { client, toasts }
    }

    /// 입찰
    /// 성공하면 카드의 입찰 수와 현재가를 갱신하고 true 반환
    pub async fn submit_bid(&self, auction_id: &str, amount: i64, card: &mut AuctionCard) -> bool {
        match self.client.place_bid(auction_id, amount).await {
            Ok(response) => {
                info!(
                    "{:<12} --> 입찰 성공 id: {}, amount: {}",
                    "Bid", auction_id, amount
                );
                self.toasts.show(
                    "Bid Placed!",
                    &format!("Your bid of {} was successful!", format_currency(amount)),
                    ToastKind::Success,
                );
                card.bid_count = response.bid_count.to_string();
                card.current_price = format_currency(response.current_price);
                true
            }
            Err(ApiError::Rejected { message }) => {
                self.toasts.show(
                    "Bid Failed!",
                    message.as_deref().unwrap_or(BID_FAILED_MESSAGE),
                    ToastKind::Error,
                );
                false
            }
            Err(e) => {
                error!("{:<12} --> Error placing bid: {}", "Bid", e);
                self.toasts
                    .show("Error!", UNEXPECTED_ERROR_MESSAGE, ToastKind::Error);
                false
            }
        }
    }

    /// 찜하기 토글
    /// 성공하면 새 찜 상태를 반환한다. 서버 거절은 조용히 무시한다.
    pub async fn toggle_favorite(&self, auction_id: &str, icon: &mut FavoriteIcon) -> Option<bool> {
        match self.client.toggle_favorite(auction_id).await {
            Ok(response) => {
                icon.set_favorite(response.is_favorite);
                Some(response.is_favorite)
            }
            Err(ApiError::Rejected { .. }) => None,
            Err(e) => {
                error!("{:<12} --> Error toggling favorite: {}", "Favorite", e);
                self.toasts
                    .show("Error!", FAVORITE_ERROR_MESSAGE, ToastKind::Error);
                None
            }
        }
    }
}

// endregion: --- Auction Actions

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_icon_classes() {
        let mut icon = FavoriteIcon::new(&["h-5", "w-5", "text-gray-400"]);
        assert!(!icon.is_marked());

        icon.set_favorite(true);
        assert!(icon.is_marked());
        assert!(!icon.has_class("text-gray-400"));
        assert!(icon.has_class("h-5"));

        icon.set_favorite(false);
        assert!(!icon.is_marked());
        assert!(!icon.has_class("fill-current"));
        assert!(icon.has_class("text-gray-400"));
    }
}
