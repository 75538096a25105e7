use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// 생성 시 항상 생성값으로 덮어쓰는 필드
pub const GENERATED_FIELDS: [&str; 3] = ["id", "status", "created_at"];

// 경매 상태
// 상태 전이는 제한하지 않으며, 알 수 없는 값도 그대로 보존한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuctionStatus {
    Active,
    Pending,
    Rejected,
    Sold,
    Other(String),
}

impl AuctionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AuctionStatus::Active => "active",
            AuctionStatus::Pending => "pending",
            AuctionStatus::Rejected => "rejected",
            AuctionStatus::Sold => "sold",
            AuctionStatus::Other(s) => s,
        }
    }
}

impl From<&str> for AuctionStatus {
    fn from(value: &str) -> Self {
        match value {
            "active" => AuctionStatus::Active,
            "pending" => AuctionStatus::Pending,
            "rejected" => AuctionStatus::Rejected,
            "sold" => AuctionStatus::Sold,
            other => AuctionStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for AuctionStatus {
    fn from(value: String) -> Self {
        AuctionStatus::from(value.as_str())
    }
}

impl From<AuctionStatus> for String {
    fn from(value: AuctionStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 경매 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: i64,
    pub description: String,
    pub status: AuctionStatus,
    pub seller_email: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// 호출자가 넘긴 추가 필드
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

// 경매 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuction {
    pub title: String,
    pub category: String,
    pub price: i64,
    pub description: String,
    pub seller_email: String,
    pub image: String,
    pub end_time: DateTime<Utc>,
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl NewAuction {
    /// 생성값을 마지막에 적용해 경매 레코드로 변환
    pub fn into_auction(self, id: String, created_at: DateTime<Utc>) -> Auction {
        let mut extra = self.extra;
        for field in GENERATED_FIELDS {
            extra.remove(field);
        }

        Auction {
            id,
            title: self.title,
            category: self.category,
            price: self.price,
            description: self.description,
            status: AuctionStatus::Pending,
            seller_email: self.seller_email,
            image: self.image,
            created_at,
            end_time: self.end_time,
            extra,
        }
    }
}

// 경매 조회 필터
// 주어진 필드는 모두 일치해야 한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuctionFilter {
    pub status: Option<AuctionStatus>,
    pub seller_email: Option<String>,
}

impl AuctionFilter {
    pub fn status(mut self, status: impl Into<AuctionStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn seller_email(mut self, email: impl Into<String>) -> Self {
        self.seller_email = Some(email.into());
        self
    }

    pub fn matches(&self, auction: &Auction) -> bool {
        self.status.as_ref().map_or(true, |s| &auction.status == s)
            && self
                .seller_email
                .as_deref()
                .map_or(true, |e| auction.seller_email == e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_status_round_trips_verbatim() {
        let status: AuctionStatus = serde_json::from_value(json!("archived")).unwrap();
        assert_eq!(status, AuctionStatus::Other("archived".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("archived"));
        assert_eq!(AuctionStatus::from("sold"), AuctionStatus::Sold);
    }

    #[test]
    fn test_extra_fields_preserved_on_auction() {
        let raw = json!({
            "id": "auc_1",
            "title": "Kamera",
            "category": "Elektronik",
            "price": 1000,
            "description": "",
            "status": "active",
            "seller_email": "a@b.c",
            "image": "",
            "created_at": "2024-01-01T00:00:00Z",
            "end_time": "2024-01-02T00:00:00Z",
            "condition": "bekas"
        });
        let auction: Auction = serde_json::from_value(raw).unwrap();
        assert_eq!(auction.extra.get("condition"), Some(&json!("bekas")));
        assert!(!auction.extra.contains_key("id"));

        let written = serde_json::to_value(&auction).unwrap();
        assert_eq!(written["condition"], json!("bekas"));
        assert_eq!(written["status"], json!("active"));
    }
}
