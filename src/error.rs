// region:    --- Imports
use thiserror::Error;

// endregion: --- Imports

// region:    --- Errors
/// 저장소 오류
/// 값이 없는 경우는 오류가 아니라 빈 결과로 처리한다.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// API 클라이언트 오류
#[derive(Debug, Error)]
pub enum ApiError {
    /// 요청 전송 실패 (연결, 타임아웃 등)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 서버가 success = false 로 응답
    #[error("request rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// 응답 본문 해석 실패
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 초기화 오류
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

// endregion: --- Errors
