//! Source of "today".
//!
//! Aggregation functions take `today` as a parameter; callers that need the
//! wall clock hold a [`Clock`].

use chrono::{Local, SecondsFormat};

use crate::calendar::Day;

pub trait Clock {
    /// Current calendar day in the caller's local timezone.
    fn today(&self) -> Day;

    /// ISO-8601 timestamp for stamping new records.
    ///
    /// The date portion must equal [`Clock::today`], since records are
    /// bucketed by truncating this string.
    fn timestamp(&self) -> String;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Day {
        Day::from(Local::now().date_naive())
    }

    fn timestamp(&self) -> String {
        // Keep the local offset so the date prefix is the local day
        Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
    }
}

/// A clock pinned to one day, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    day: Day,
}

impl FixedClock {
    pub fn new(day: Day) -> Self {
        Self { day }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Day {
        self.day
    }

    fn timestamp(&self) -> String {
        format!("{}T12:00:00.000Z", self.day)
    }
}
