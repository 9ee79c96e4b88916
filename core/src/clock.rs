use chrono::{DateTime, TimeZone, Utc};

use crate::locale::weekday_time;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// text of the clock widget for `now` as seen from `tz`
pub fn clock_text<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> String {
    weekday_time(&now.with_timezone(tz))
}

#[cfg(test)]
pub(crate) use manual::ManualClock;
