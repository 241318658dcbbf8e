use crate::application::ports::time::Clock;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Wall clock truncated to microseconds, the resolution used for
/// `created_at` / `updated_at` throughout the board.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        now.duration_trunc(TimeDelta::microseconds(1)).unwrap_or(now)
    }
}
