/// 테마 (라이트/다크)
/// 선택값은 저장소의 `theme` 키에 평문으로 저장한다.
// region:    --- Imports
use crate::error::StoreResult;
use crate::storage::{keys, Storage};
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 루트 요소에 `dark` 클래스가 붙는지 여부
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

pub struct ThemeController {
    storage: Arc<dyn Storage>,
    current: Theme,
}

impl ThemeController {
    /// 저장된 값 또는 시스템 다크 모드 설정으로 초기 테마 결정
    pub async fn load(storage: Arc<dyn Storage>, system_prefers_dark: bool) -> StoreResult<Self> {
        let saved = storage.get_item(keys::THEME).await?;
        let current = resolve_initial(saved.as_deref(), system_prefers_dark);
        Ok(Self { storage, current })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// 테마 전환 후 저장
    pub async fn toggle(&mut self) -> StoreResult<Theme> {
        let next = self.current.toggled();
        self.storage.set_item(keys::THEME, next.as_str()).await?;
        self.current = next;
        info!("{:<12} --> 테마 변경: {}", "Theme", next.as_str());
        Ok(next)
    }
}

/// 초기 테마 결정
/// 저장값이 "dark" 이거나, 저장값이 없고 시스템이 다크 모드면 다크.
pub fn resolve_initial(saved: Option<&str>, system_prefers_dark: bool) -> Theme {
    match saved {
        Some("dark") => Theme::Dark,
        None if system_prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}
