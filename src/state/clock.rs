//! Clock display and time sources.
//!
//! The controller never reads the wall clock directly; it asks a [`Clock`],
//! so tests can drive time with a [`ManualClock`].

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta};

/// Display format for the clock, `HH:mm:ss`.
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = match self.now.lock() {
            Ok(now) => now,
            Err(poisoned) => poisoned.into_inner(),
        };
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Current time rendered for the header, truncated to the second.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockDisplay {
    text: String,
}

impl ClockDisplay {
    pub fn from_time(time: &DateTime<Local>) -> Self {
        Self {
            text: time.format(CLOCK_FORMAT).to_string(),
        }
    }

    /// Recomputes the text. Returns true if it changed.
    pub fn refresh(&mut self, time: &DateTime<Local>) -> bool {
        let next = Self::from_time(time);
        if next == *self {
            return false;
        }
        *self = next;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 9, 5, 7).single().unwrap()
    }

    #[test]
    fn test_format_is_zero_padded() {
        assert_eq!(ClockDisplay::from_time(&morning()).text(), "09:05:07");
    }

    #[test]
    fn test_refresh_truncates_to_second() {
        let mut display = ClockDisplay::from_time(&morning());
        assert!(!display.refresh(&(morning() + TimeDelta::milliseconds(400))));
        assert!(display.refresh(&(morning() + TimeDelta::seconds(1))));
        assert_eq!(display.text(), "09:05:08");
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(morning());
        let handle = clock.clone();
        handle.advance(TimeDelta::seconds(3));
        assert_eq!(clock.now(), morning() + TimeDelta::seconds(3));
    }
}
