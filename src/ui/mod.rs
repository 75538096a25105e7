//! UI 연결부
//! 화면(DOM) 대신 `UiNotifier` 를 주입받아 이동, 알림, 토스트를 처리한다.

// region:    --- Imports
use tracing::{info, warn};

pub mod actions;
pub mod countdown;
pub mod debounce;
pub mod forms;
pub mod menu;
pub mod theme;
pub mod toast;

pub use toast::{Toast, ToastCenter, ToastKind};

// endregion: --- Imports

// region:    --- Notifier
/// 화면 부작용 인터페이스
pub trait UiNotifier: Send + Sync {
    /// 페이지 이동
    fn navigate(&self, location: &str);

    /// 차단형 알림 (alert)
    fn alert(&self, message: &str);

    /// 토스트 표시, 기존 토스트는 교체된다.
    fn show_toast(&self, toast: &Toast);

    /// 토스트 제거
    fn dismiss_toast(&self, toast_id: u64);
}

/// 로그로만 남기는 기본 구현
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl UiNotifier for TracingNotifier {
    fn navigate(&self, location: &str) {
        info!("{:<12} --> navigate: {}", "Ui", location);
    }

    fn alert(&self, message: &str) {
        warn!("{:<12} --> alert: {}", "Ui", message);
    }

    fn show_toast(&self, toast: &Toast) {
        info!(
            "{:<12} --> [{}] {}: {}",
            "Toast",
            toast.kind.as_str(),
            toast.title,
            toast.message
        );
    }

    fn dismiss_toast(&self, toast_id: u64) {
        info!("{:<12} --> dismiss #{}", "Toast", toast_id);
    }
}

// endregion: --- Notifier


// endregion: --- Test Support
