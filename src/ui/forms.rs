/// AJAX 폼 제출
/// 기본 제출을 막고, 버튼을 로딩 상태로 바꾼 뒤 요청을 보내고 결과를 토스트로 알린다.
// region:    --- Imports
use super::toast::{ToastCenter, ToastKind};
use crate::api::{ApiClient, FormResponse};
use crate::error::ApiError;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

// endregion: --- Imports

pub const LOADING_LABEL: &str = "Processing...";
pub const SUCCESS_TITLE: &str = "Success!";
pub const ERROR_TITLE: &str = "Error!";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully.";
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

// region:    --- Form Model
/// data-ajax 폼
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub action: String,
    /// 비어 있으면 POST
    pub method: String,
    pub fields: Vec<(String, String)>,
}

impl Form {
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
            ..Default::default()
        }
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }
}

/// 제출 버튼 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    original_label: Option<String>,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            disabled: false,
            original_label: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.original_label.is_some()
    }

    /// 로딩 표시, 원래 라벨은 보관
    pub fn begin_loading(&mut self) {
        if self.original_label.is_none() {
            self.original_label = Some(std::mem::replace(
                &mut self.label,
                LOADING_LABEL.to_string(),
            ));
        }
        self.disabled = true;
    }

    /// 원래 라벨 복원 및 활성화
    pub fn restore(&mut self) {
        if let Some(original) = self.original_label.take() {
            self.label = original;
        }
        self.disabled = false;
    }
}

// endregion: --- Form Model

// region:    --- Form Controller
#[derive(Debug)]
pub enum SubmitOutcome {
    Succeeded(FormResponse),
    Rejected(Option<String>),
    Failed,
}

#[derive(Debug)]
pub struct Submission {
    pub outcome: SubmitOutcome,
    /// 성공 응답에 redirect 가 있으면 예약된 이동 작업
    pub redirect: Option<JoinHandle<()>>,
}

pub struct FormController {
    client: Arc<ApiClient>,
    toasts: ToastCenter,
    redirect_delay: Duration,
}

impl FormController {
    pub fn new(client: Arc<ApiClient>, toasts: ToastCenter, redirect_delay: Duration) -> Self {
        Self {
            client,
            toasts,
            redirect_delay,
        }
    }

    /// 폼 제출 처리
    pub async fn submit(&self, form: &Form, mut button: Option<&mut SubmitButton>) -> Submission {
        if let Some(b) = button.as_deref_mut() {
            b.begin_loading();
        }

        let result = self
            .client
            .submit_form(&form.action, &form.method, &form.fields)
            .await;

        if let Some(b) = button.as_deref_mut() {
            b.restore();
        }

        match result {
            Ok(response) => {
                let message = response
                    .message
                    .as_deref()
                    .unwrap_or(DEFAULT_SUCCESS_MESSAGE);
                self.toasts.show(SUCCESS_TITLE, message, ToastKind::Success);
                let redirect = response
                    .redirect
                    .clone()
                    .map(|location| self.schedule_redirect(location));
                Submission {
                    outcome: SubmitOutcome::Succeeded(response),
                    redirect,
                }
            }
            Err(ApiError::Rejected { message }) => {
                let text = message.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE);
                self.toasts.show(ERROR_TITLE, text, ToastKind::Error);
                Submission {
                    outcome: SubmitOutcome::Rejected(message),
                    redirect: None,
                }
            }
            Err(_) => {
                self.toasts
                    .show(ERROR_TITLE, UNEXPECTED_ERROR_MESSAGE, ToastKind::Error);
                Submission {
                    outcome: SubmitOutcome::Failed,
                    redirect: None,
                }
            }
        }
    }

    fn schedule_redirect(&self, location: String) -> JoinHandle<()> {
        let notifier = self.toasts.notifier();
        let delay = self.redirect_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            info!("{:<12} --> 제출 후 이동: {}", "Form", location);
            notifier.navigate(&location);
        })
    }
}

// endregion: --- Form Controller
