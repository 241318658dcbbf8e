// tests/support/mocks/time.rs
use board_core::application::ports::time::Clock;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// 決定論的なタイムスタンプを返す
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// 呼び出しごとに一定量進む時計。既定は1秒刻み。
/// 刻みを 0 にすると全ての呼び出しが同じ時刻を返す。
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self::with_step(Duration::seconds(1))
    }

    pub fn with_step(step: Duration) -> Self {
        Self {
            next: Mutex::new(fixed_now()),
            step,
        }
    }

    pub fn frozen() -> Self {
        Self::with_step(Duration::zero())
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock mutex poisoned");
        let now = *next;
        *next = now + self.step;
        now
    }
}
