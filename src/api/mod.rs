/// 외부 백엔드 HTTP 클라이언트
/// 폼 제출, 입찰, 찜하기 요청을 하나의 전송/오류 처리 경로로 보낸다.
// region:    --- Imports
use crate::config::Config;
use crate::error::ApiError;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};

pub mod responses;

pub use responses::{ApiResponse, BidResponse, FavoriteResponse, FormResponse};

// endregion: --- Imports

const REQUESTED_WITH: &str = "XMLHttpRequest";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// region:    --- Api Client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    csrf_token: String,
}

impl ApiClient {
    pub fn new(base_url: &str, csrf_token: &str) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token: csrf_token.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url, &config.csrf_token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 폼 제출
    /// method 가 비어 있으면 POST
    pub async fn submit_form(
        &self,
        action: &str,
        method: &str,
        fields: &[(String, String)],
    ) -> Result<FormResponse, ApiError> {
        let method = parse_method(method)?;
        self.send(method, action, fields).await
    }

    /// 입찰
    pub async fn place_bid(&self, auction_id: &str, amount: i64) -> Result<BidResponse, ApiError> {
        let fields = vec![
            ("amount".to_string(), amount.to_string()),
            ("_token".to_string(), self.csrf_token.clone()),
        ];
        self.send(Method::POST, &bid_path(auction_id), &fields).await
    }

    /// 찜하기 토글
    pub async fn toggle_favorite(&self, auction_id: &str) -> Result<FavoriteResponse, ApiError> {
        let fields = vec![("_token".to_string(), self.csrf_token.clone())];
        self.send(Method::POST, &favorite_path(auction_id), &fields)
            .await
    }

    /// 요청 전송 및 응답 해석
    /// success = false 응답은 `ApiError::Rejected` 로 돌려준다.
    async fn send<T>(
        &self,
        method: Method,
        action: &str,
        fields: &[(String, String)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + ApiResponse,
    {
        let url = self.resolve_url(action);
        info!("{:<12} --> {} {}", "Api", method, url);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .headers(self.default_headers());
        request = if method == Method::GET {
            request.query(fields)
        } else {
            request.form(fields)
        };

        let response = request.send().await.map_err(|e| {
            error!("{:<12} --> 요청 실패 {}: {}", "Api", url, e);
            ApiError::from(e)
        })?;
        let status = response.status();
        let body = response.text().await?;
        debug!("{:<12} --> 응답 status: {}, body: {}", "Api", status, body);

        let parsed: T = serde_json::from_str(&body).map_err(|e| {
            error!("{:<12} --> 응답 해석 실패 {}: {}", "Api", url, e);
            ApiError::Decode(e.to_string())
        })?;

        if !parsed.success() {
            return Err(ApiError::Rejected {
                message: parsed.message().map(str::to_string),
            });
        }
        Ok(parsed)
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static(REQUESTED_WITH));
        if let Ok(token) = HeaderValue::from_str(&self.csrf_token) {
            headers.insert("X-CSRF-TOKEN", token);
        }
        headers
    }

    /// 절대 주소는 그대로, 상대 경로는 base_url 기준으로 변환
    fn resolve_url(&self, action: &str) -> String {
        if action.starts_with("http://") || action.starts_with("https://") {
            action.to_string()
        } else {
            format!("{}/{}", self.base_url, action.trim_start_matches('/'))
        }
    }
}

// endregion: --- Api Client

pub fn bid_path(auction_id: &str) -> String {
    format!("/auctions/{}/bid", auction_id)
}

pub fn favorite_path(auction_id: &str) -> String {
    format!("/auctions/{}/favorite", auction_id)
}

fn parse_method(method: &str) -> Result<Method, ApiError> {
    let method = method.trim();
    if method.is_empty() {
        return Ok(Method::POST);
    }
    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|e| ApiError::Decode(format!("invalid form method '{}': {}", method, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let client = ApiClient::new("http://localhost:8000/", "tok").unwrap();
        assert_eq!(
            client.resolve_url("/auctions/auc_001/bid"),
            "http://localhost:8000/auctions/auc_001/bid"
        );
        assert_eq!(client.resolve_url("login"), "http://localhost:8000/login");
        assert_eq!(
            client.resolve_url("https://api.silebar.com/x"),
            "https://api.silebar.com/x"
        );
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("").unwrap(), Method::POST);
        assert_eq!(parse_method("get").unwrap(), Method::GET);
        assert_eq!(parse_method("Put").unwrap(), Method::PUT);
    }

    #[test]
    fn test_default_headers() {
        let client = ApiClient::new("http://localhost", "abc123").unwrap();
        let headers = client.default_headers();
        assert_eq!(headers["X-Requested-With"], "XMLHttpRequest");
        assert_eq!(headers["X-CSRF-TOKEN"], "abc123");
    }
}
