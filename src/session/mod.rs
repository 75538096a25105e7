/// 세션 관리
/// 전역 슬롯 하나에 현재 로그인 세션을 저장한다.
/// 1. 로그인
/// 2. 로그아웃
/// 3. 권한 확인
// region:    --- Imports
use crate::clock::Clock;
use crate::config::Config;
use crate::error::StoreResult;
use crate::storage::{keys, read_json, write_json, Storage};
use crate::ui::UiNotifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

// endregion: --- Imports

/// 권한 거부 알림 문구
pub const ACCESS_DENIED_MESSAGE: &str = "Akses ditolak. Anda tidak memiliki izin.";

// 세션 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: String,
    #[serde(rename = "loggedInAt")]
    pub logged_in_at: DateTime<Utc>,
}

// region:    --- Session Service
pub struct SessionService {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn UiNotifier>,
    login_page: String,
    fallback_page: String,
}

impl SessionService {
    pub fn new(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn UiNotifier>,
        config: &Config,
    ) -> Self {
        Self {
            storage,
            clock,
            notifier,
            login_page: config.login_page.clone(),
            fallback_page: config.fallback_page.clone(),
        }
    }

    /// 로그인
    /// 기존 세션은 무조건 덮어쓴다.
    pub async fn login(&self, email: &str, role: &str) -> StoreResult<Session> {
        let session = Session {
            email: email.to_string(),
            role: role.to_string(),
            logged_in_at: self.clock.now(),
        };
        write_json(self.storage.as_ref(), keys::SESSION, &session).await?;
        info!("{:<12} --> 로그인 email: {}, role: {}", "Session", email, role);
        Ok(session)
    }

    /// 로그아웃 후 로그인 페이지로 이동
    pub async fn logout(&self) -> StoreResult<()> {
        self.storage.remove_item(keys::SESSION).await?;
        info!("{:<12} --> 로그아웃", "Session");
        self.notifier.navigate(&self.login_page);
        Ok(())
    }

    /// 현재 세션 조회
    pub async fn get_session(&self) -> StoreResult<Option<Session>> {
        read_json(self.storage.as_ref(), keys::SESSION).await
    }

    /// 현재 로그인 사용자 이메일
    pub async fn current_user_email(&self) -> StoreResult<Option<String>> {
        Ok(self.get_session().await?.map(|s| s.email))
    }

    /// 권한 확인
    /// 세션이 없으면 로그인 페이지로, 역할이 허용 목록에 없으면 알림 후 대체 페이지로 이동한다.
    /// 허용 목록이 비어 있으면 로그인 여부만 확인한다.
    pub async fn require_auth(&self, allowed_roles: &[&str]) -> StoreResult<Option<Session>> {
        let Some(session) = self.get_session().await? else {
            info!("{:<12} --> 세션 없음, 로그인 페이지로 이동", "Session");
            self.notifier.navigate(&self.login_page);
            return Ok(None);
        };

        if !allowed_roles.is_empty() && !allowed_roles.contains(&session.role.as_str()) {
            warn!(
                "{:<12} --> 접근 거부 email: {}, role: {}",
                "Session", session.email, session.role
            );
            self.notifier.alert(ACCESS_DENIED_MESSAGE);
            self.notifier.navigate(&self.fallback_page);
            return Ok(None);
        }

        Ok(Some(session))
    }
}

// endregion: --- Session Service

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::MemoryStorage;
    use crate::ui::testing::{RecordingNotifier, UiEvent};
    use chrono::TimeZone;

    fn setup() -> (SessionService, Arc<RecordingNotifier>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
        ));
        let notifier = Arc::new(RecordingNotifier::default());
        let service = SessionService::new(
            storage.clone(),
            clock,
            notifier.clone(),
            &Config::default(),
        );
        (service, notifier, storage)
    }

    #[tokio::test]
    async fn test_login_then_get_session() {
        let (service, notifier, _) = setup();
        let session = service.login("budi@silebar.com", "seller").await.unwrap();

        let stored = service.get_session().await.unwrap().unwrap();
        assert_eq!(stored, session);
        assert_eq!(stored.email, "budi@silebar.com");
        assert_eq!(stored.role, "seller");
        assert_eq!(
            service.current_user_email().await.unwrap().as_deref(),
            Some("budi@silebar.com")
        );
        assert!(notifier.events().is_empty());
    }

    #[tokio::test]
    async fn test_login_overwrites_previous_session() {
        let (service, _, _) = setup();
        service.login("a@silebar.com", "buyer").await.unwrap();
        service.login("b@silebar.com", "admin").await.unwrap();
        let session = service.get_session().await.unwrap().unwrap();
        assert_eq!(session.email, "b@silebar.com");
        assert_eq!(session.role, "admin");
    }

    #[tokio::test]
    async fn test_session_json_uses_logged_in_at_key() {
        let (service, _, storage) = setup();
        service.login("a@silebar.com", "buyer").await.unwrap();
        let raw = storage.get_item(keys::SESSION).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.get("loggedInAt").is_some());
        assert!(value.get("logged_in_at").is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_and_redirects() {
        let (service, notifier, _) = setup();
        service.login("a@silebar.com", "buyer").await.unwrap();
        service.logout().await.unwrap();

        assert!(service.get_session().await.unwrap().is_none());
        assert!(service.current_user_email().await.unwrap().is_none());
        assert_eq!(notifier.navigations(), vec!["login.html".to_string()]);
    }

    #[tokio::test]
    async fn test_require_auth_without_session_goes_to_login() {
        let (service, notifier, _) = setup();
        assert!(service.require_auth(&[]).await.unwrap().is_none());
        assert_eq!(
            notifier.events(),
            vec![UiEvent::Navigate("login.html".to_string())]
        );
    }

    #[tokio::test]
    async fn test_require_auth_wrong_role_alerts_and_falls_back() {
        let (service, notifier, _) = setup();
        service.login("a@silebar.com", "buyer").await.unwrap();

        assert!(service.require_auth(&["admin"]).await.unwrap().is_none());
        assert_eq!(
            notifier.events(),
            vec![
                UiEvent::Alert(ACCESS_DENIED_MESSAGE.to_string()),
                UiEvent::Navigate("index.html".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_require_auth_allows_matching_or_any_role() {
        let (service, notifier, _) = setup();
        let session = service.login("admin@silebar.com", "admin").await.unwrap();

        assert_eq!(
            service.require_auth(&["seller", "admin"]).await.unwrap(),
            Some(session.clone())
        );
        assert_eq!(service.require_auth(&[]).await.unwrap(), Some(session));
        assert!(notifier.events().is_empty());
    }
}
