// region:    --- Modules
pub mod api;
pub mod auction;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod session;
pub mod storage;
pub mod ui;

// endregion: --- Modules

// region:    --- Imports
use crate::api::ApiClient;
use crate::auction::AuctionRepository;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::InitError;
use crate::session::SessionService;
use crate::storage::{SqliteStorage, Storage};
use crate::ui::actions::AuctionActions;
use crate::ui::debounce::SearchBox;
use crate::ui::forms::FormController;
use crate::ui::{ToastCenter, UiNotifier};
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Tracing
/// tracing 초기화
/// 이미 설치된 구독자가 있으면 그대로 둔다.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .try_init();
}

// endregion: --- Tracing

// region:    --- Silebar
/// 전체 구성 요소 묶음
pub struct Silebar {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub auctions: AuctionRepository,
    pub sessions: SessionService,
    pub toasts: ToastCenter,
    pub forms: FormController,
    pub actions: AuctionActions,
    pub search: SearchBox,
}

impl Silebar {
    /// 설정의 SQLite 저장소로 초기화
    pub async fn init(config: Config, notifier: Arc<dyn UiNotifier>) -> Result<Self, InitError> {
        let storage: Arc<dyn Storage> = Arc::new(SqliteStorage::open(&config.database_url).await?);
        Self::with_storage(config, storage, Arc::new(SystemClock), notifier).await
    }

    /// 주입된 저장소와 시계로 초기화
    /// 경매 데이터가 없으면 시딩한다.
    pub async fn with_storage(
        config: Config,
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn UiNotifier>,
    ) -> Result<Self, InitError> {
        let auctions = AuctionRepository::initialize(Arc::clone(&storage), Arc::clone(&clock)).await?;
        let sessions = SessionService::new(
            Arc::clone(&storage),
            clock,
            Arc::clone(&notifier),
            &config,
        );

        let client = Arc::new(ApiClient::from_config(&config)?);
        let toasts = ToastCenter::new(notifier, config.toast_dismiss);
        let forms = FormController::new(Arc::clone(&client), toasts.clone(), config.redirect_delay);
        let actions = AuctionActions::new(client, toasts.clone());
        let search = SearchBox::new(config.search_debounce);

        info!("{:<12} --> 초기화 완료", "Main");
        Ok(Self {
            config,
            storage,
            auctions,
            sessions,
            toasts,
            forms,
            actions,
            search,
        })
    }
}

// endregion: --- Silebar
