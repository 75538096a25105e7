//! 런타임 설정
//! 환경 변수를 읽고, 없으면 기본값을 사용한다.

use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_LOGIN_PAGE: &str = "login.html";
const DEFAULT_FALLBACK_PAGE: &str = "index.html";
const DEFAULT_TOAST_DISMISS_MS: u64 = 5000;
const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Config {
    /// SqliteStorage 연결 문자열
    pub database_url: String,
    /// 외부 백엔드 주소 (폼, 입찰, 찜하기)
    pub api_base_url: String,
    pub csrf_token: String,
    /// 세션이 없을 때 이동할 페이지
    pub login_page: String,
    /// 권한이 없을 때 이동할 페이지
    pub fallback_page: String,
    pub toast_dismiss: Duration,
    pub redirect_delay: Duration,
    pub search_debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            csrf_token: String::new(),
            login_page: DEFAULT_LOGIN_PAGE.to_string(),
            fallback_page: DEFAULT_FALLBACK_PAGE.to_string(),
            toast_dismiss: Duration::from_millis(DEFAULT_TOAST_DISMISS_MS),
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

impl Config {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정 구성
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let millis = |key: &str, default: u64| {
            Duration::from_millis(
                lookup(key)
                    .and_then(|v| v.trim().parse::<u64>().ok())
                    .unwrap_or(default),
            )
        };

        Self {
            database_url: string("SILEBAR_DATABASE_URL", DEFAULT_DATABASE_URL),
            api_base_url: string("SILEBAR_API_BASE_URL", DEFAULT_API_BASE_URL),
            csrf_token: string("SILEBAR_CSRF_TOKEN", ""),
            login_page: string("SILEBAR_LOGIN_PAGE", DEFAULT_LOGIN_PAGE),
            fallback_page: string("SILEBAR_FALLBACK_PAGE", DEFAULT_FALLBACK_PAGE),
            toast_dismiss: millis("SILEBAR_TOAST_DISMISS_MS", DEFAULT_TOAST_DISMISS_MS),
            redirect_delay: millis("SILEBAR_REDIRECT_DELAY_MS", DEFAULT_REDIRECT_DELAY_MS),
            search_debounce: millis("SILEBAR_SEARCH_DEBOUNCE_MS", DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.login_page, "login.html");
        assert_eq!(config.fallback_page, "index.html");
        assert_eq!(config.toast_dismiss, Duration::from_secs(5));
        assert_eq!(config.redirect_delay, Duration::from_millis(1500));
        assert_eq!(config.search_debounce, Duration::from_millis(300));
    }

    #[test]
    fn test_overrides_and_bad_numbers() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SILEBAR_API_BASE_URL", "http://127.0.0.1:9000"),
            ("SILEBAR_TOAST_DISMISS_MS", "250"),
            ("SILEBAR_REDIRECT_DELAY_MS", "soon"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.toast_dismiss, Duration::from_millis(250));
        assert_eq!(config.redirect_delay, Duration::from_millis(1500));
    }
}
