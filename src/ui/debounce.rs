/// 디바운스
/// 조용한 구간 동안 들어온 연속 호출을 마지막 한 번으로 합친다.
// region:    --- Imports
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

// endregion: --- Imports

// region:    --- Debouncer
pub struct Debouncer<T> {
    delay: Duration,
    handler: Arc<dyn Fn(T) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            handler: Arc::new(handler),
            pending: Mutex::new(None),
        }
    }

    /// 호출 예약
    /// 대기 중인 이전 호출은 취소된다. tokio 런타임 안에서 호출해야 한다.
    pub fn call(&self, arg: T) {
        let handler = Arc::clone(&self.handler);
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            handler(arg);
        });

        let previous = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// 대기 중인 호출 취소
    pub fn cancel(&self) {
        if let Some(task) = self.pending.lock().unwrap_or_else(|e| e.into_inner()).take() {
            task.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.lock().unwrap_or_else(|e| e.into_inner()).take() {
            task.abort();
        }
    }
}

// endregion: --- Debouncer

// region:    --- Search
/// 검색 입력창
/// 입력이 멈춘 뒤에만 검색을 실행한다.
pub struct SearchBox {
    debouncer: Debouncer<String>,
}

impl SearchBox {
    pub fn new(delay: Duration) -> Self {
        Self::with_handler(delay, perform_search)
    }

    pub fn with_handler<F>(delay: Duration, handler: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        Self {
            debouncer: Debouncer::new(delay, handler),
        }
    }

    /// input 이벤트
    pub fn on_input(&self, value: &str) {
        self.debouncer.call(value.trim().to_string());
    }
}

/// 검색 실행 (자리표시자)
pub fn perform_search(query: String) {
    debug!("{:<12} --> Searching for: {}", "Search", query);
}

// endregion: --- Search

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_rapid_calls_collapse_to_last() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&calls);
        let debouncer = Debouncer::new(Duration::from_millis(300), move |v: u32| {
            recorded.lock().unwrap().push(v);
        });

        debouncer.call(1);
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.call(2);
        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(calls.lock().unwrap().is_empty());
        debouncer.call(3);

        tokio::time::sleep(Duration::from_millis(301)).await;
        assert_eq!(*calls.lock().unwrap(), vec![3]);

        debouncer.call(4);
        tokio::time::sleep(Duration::from_millis(301)).await;
        assert_eq!(*calls.lock().unwrap(), vec![3, 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_call() {
        let calls = Arc::new(Mutex::new(0));
        let recorded = Arc::clone(&calls);
        let debouncer = Debouncer::new(Duration::from_millis(300), move |_: ()| {
            *recorded.lock().unwrap() += 1;
        });

        debouncer.call(());
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_box_trims_query() {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&queries);
        let search = SearchBox::with_handler(Duration::from_millis(300), move |q| {
            recorded.lock().unwrap().push(q);
        });

        search.on_input("ip");
        search.on_input("iphone ");
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(*queries.lock().unwrap(), vec!["iphone".to_string()]);
    }
}
