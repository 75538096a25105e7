use serde::{Deserialize, Serialize};

/// 공통 응답 필드
pub trait ApiResponse {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

/// 일반 폼 제출 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// 입찰 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub bid_count: u64,
    #[serde(default)]
    pub current_price: i64,
}

/// 찜하기 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

macro_rules! impl_api_response {
    ($($ty:ty),*) => {
        $(
            impl ApiResponse for $ty {
                fn success(&self) -> bool {
                    self.success
                }

                fn message(&self) -> Option<&str> {
                    self.message.as_deref()
                }
            }
        )*
    };
}

impl_api_response!(FormResponse, BidResponse, FavoriteResponse);
