/// 토스트 알림
/// 한 번에 하나만 표시하고, 새 토스트가 오면 교체한다.
/// 일정 시간이 지나면 자동으로 사라진다.
// region:    --- Imports
use super::UiNotifier;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

// endregion: --- Imports

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    /// 배너 스타일 클래스
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-100 border border-green-200 text-green-800",
            ToastKind::Error => "bg-red-100 border border-red-200 text-red-800",
            ToastKind::Info => "bg-blue-100 border border-blue-200 text-blue-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
}

// region:    --- Toast Center
/// 단일 슬롯 토스트 관리자
#[derive(Clone)]
pub struct ToastCenter {
    notifier: Arc<dyn UiNotifier>,
    dismiss_after: Duration,
    current: Arc<Mutex<Option<Toast>>>,
    next_id: Arc<AtomicU64>,
}

impl ToastCenter {
    pub fn new(notifier: Arc<dyn UiNotifier>, dismiss_after: Duration) -> Self {
        Self {
            notifier,
            dismiss_after,
            current: Arc::new(Mutex::new(None)),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn notifier(&self) -> Arc<dyn UiNotifier> {
        Arc::clone(&self.notifier)
    }

    /// 현재 표시 중인 토스트
    pub fn current(&self) -> Option<Toast> {
        self.lock_current().clone()
    }

    /// 토스트 표시
    /// tokio 런타임 안에서 호출해야 자동 제거 타이머가 동작한다.
    pub fn show(&self, title: &str, message: &str, kind: ToastKind) -> Toast {
        let toast = Toast {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: title.to_string(),
            message: message.to_string(),
            kind,
        };

        let replaced = self.lock_current().replace(toast.clone());
        if let Some(old) = replaced {
            self.notifier.dismiss_toast(old.id);
        }
        self.notifier.show_toast(&toast);

        let center = self.clone();
        let id = toast.id;
        let delay = self.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if center.dismiss(id) {
                debug!("{:<12} --> 자동 제거 #{}", "Toast", id);
            }
        });

        toast
    }

    /// 토스트 제거
    /// 이미 다른 토스트로 교체되었으면 아무것도 하지 않는다.
    pub fn dismiss(&self, toast_id: u64) -> bool {
        let mut current = self.lock_current();
        match current.as_ref() {
            Some(t) if t.id == toast_id => {
                *current = None;
                drop(current);
                self.notifier.dismiss_toast(toast_id);
                true
            }
            _ => false,
        }
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<Toast>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// endregion: --- Toast Center
