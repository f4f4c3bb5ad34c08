//! Wall clock for PineTime

use chrono::{DateTime, NaiveDateTime, Timelike};
use embassy_time::{Duration, Instant};

/// Wall-clock time at a known system instant
pub struct TimeReference {
    time: NaiveDateTime,
    instant: Instant,
}

impl TimeReference {
    /// Reference from a Unix timestamp, taken now.
    ///
    /// `None` if the timestamp is out of range.
    pub fn from_timestamp(secs: i64) -> Option<Self> {
        let time = DateTime::from_timestamp(secs, 0)?.naive_utc();
        Some(Self {
            time,
            instant: Instant::now(),
        })
    }
}

pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    pub fn new(reference: TimeReference) -> Self {
        Self { reference }
    }

    /// Current local time
    pub fn now(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference.time + chrono::Duration::seconds(elapsed.as_secs() as i64)
    }

    /// Time until the next full minute
    pub fn until_next_minute(&self) -> Duration {
        Duration::from_secs(60 - self.now().second() as u64)
    }
}
