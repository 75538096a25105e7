/// 경매 카운트다운 타이머
/// 요소마다 독립된 타이머가 1초마다 남은 시간을 다시 그리고, 종료되면 스스로 멈춘다.
// region:    --- Imports
use crate::clock::Clock;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, warn};

// endregion: --- Imports

pub const EXPIRED_LABEL: &str = "EXPIRED";
pub const EXPIRED_MARKUP: &str = r#"<span class="text-error font-bold">EXPIRED</span>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining { hours: i64, minutes: i64, seconds: i64 },
    Expired,
}

impl Countdown {
    /// 종료 시각까지 남은 시간 계산
    pub fn between(end_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let distance = (end_time - now).num_milliseconds();
        if distance <= 0 {
            return Countdown::Expired;
        }

        Countdown::Remaining {
            hours: distance / (1000 * 60 * 60),
            minutes: (distance % (1000 * 60 * 60)) / (1000 * 60),
            seconds: (distance % (1000 * 60)) / 1000,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }

    /// 표시 문자열, 예: "23j 59m 59s"
    pub fn render(&self) -> String {
        match self {
            Countdown::Remaining {
                hours,
                minutes,
                seconds,
            } => format!("{}j {}m {}s", hours, minutes, seconds),
            Countdown::Expired => EXPIRED_LABEL.to_string(),
        }
    }
}

/// data-end-time 속성 값 해석
pub fn parse_end_time(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(t) => Some(t.with_timezone(&Utc)),
        Err(e) => {
            warn!("{:<12} --> 종료 시각 해석 실패 '{}': {}", "Countdown", raw, e);
            None
        }
    }
}

/// 카운트다운 타이머 시작
/// 즉시 한 번 그리고, 이후 1초마다 갱신한다. 만료를 그린 뒤 종료된다.
pub fn spawn_countdown<F>(end_time: DateTime<Utc>, clock: Arc<dyn Clock>, sink: F) -> JoinHandle<()>
where
    F: Fn(Countdown) + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let countdown = Countdown::between(end_time, clock.now());
            sink(countdown);
            if countdown.is_expired() {
                debug!("{:<12} --> 타이머 만료, 종료", "Countdown");
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Mutex;

    /// tokio 가상 시간을 따라가는 시계
    struct TokioClock {
        base: DateTime<Utc>,
        start: tokio::time::Instant,
    }

    impl Clock for TokioClock {
        fn now(&self) -> DateTime<Utc> {
            let elapsed = tokio::time::Instant::now() - self.start;
            self.base + chrono::Duration::from_std(elapsed).unwrap()
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_between_splits_hours_minutes_seconds() {
        let end = base() + chrono::Duration::milliseconds(26 * 3_600_000 + 5 * 60_000 + 9_500);
        let countdown = Countdown::between(end, base());
        assert_eq!(
            countdown,
            Countdown::Remaining {
                hours: 26,
                minutes: 5,
                seconds: 9
            }
        );
        assert_eq!(countdown.render(), "26j 5m 9s");
    }

    #[test]
    fn test_zero_and_past_are_expired() {
        assert!(Countdown::between(base(), base()).is_expired());
        assert!(Countdown::between(base(), base() + chrono::Duration::seconds(1)).is_expired());
        assert_eq!(Countdown::Expired.render(), "EXPIRED");
    }

    #[test]
    fn test_parse_end_time() {
        assert_eq!(parse_end_time("2024-05-01T00:00:00Z"), Some(base()));
        assert_eq!(
            parse_end_time("2024-05-01T07:00:00+07:00"),
            Some(base())
        );
        assert!(parse_end_time("besok").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ticks_then_stops_on_expiry() {
        let clock = Arc::new(TokioClock {
            base: base(),
            start: tokio::time::Instant::now(),
        });
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink_frames = Arc::clone(&frames);

        let handle = spawn_countdown(base() + chrono::Duration::seconds(3), clock, move |c| {
            sink_frames.lock().unwrap().push(c.render());
        });

        handle.await.unwrap();
        assert_eq!(
            *frames.lock().unwrap(),
            vec!["0j 0m 3s", "0j 0m 2s", "0j 0m 1s", "EXPIRED"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_expired_renders_once() {
        let clock = Arc::new(TokioClock {
            base: base(),
            start: tokio::time::Instant::now(),
        });
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink_frames = Arc::clone(&frames);

        spawn_countdown(base() - chrono::Duration::hours(1), clock, move |c| {
            sink_frames.lock().unwrap().push(c);
        })
        .await
        .unwrap();
        assert_eq!(*frames.lock().unwrap(), vec![Countdown::Expired]);
    }
}
