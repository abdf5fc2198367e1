//! Calendar-day value type.
//!
//! Every date comparison in fitlog happens at day granularity. Timestamps
//! arrive as ISO-8601 strings and are truncated to their date portion
//! (everything before the `T`) with no timezone conversion, so
//! `2026-01-10T23:30:00.000Z` is always the 10th.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Larger than any distance between two `NaiveDate`s.
const MAX_DAY_OFFSET: u64 = 400_000 * 366;

/// `YYYY-MM-DD` with every field zero-padded.
fn is_padded_ymd(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// A calendar day with no time-of-day or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NaiveDate);

impl Day {
    /// Build a day from year, month (1-12) and day of month.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Day)
    }

    /// Truncate an ISO-8601 timestamp to its calendar day.
    ///
    /// The date portion must be a zero-padded `YYYY-MM-DD`; anything else
    /// (including `2026-1-5`) returns `None`.
    pub fn from_timestamp(ts: &str) -> Option<Self> {
        let date_part = ts.split('T').next().unwrap_or_default().trim();
        if !is_padded_ymd(date_part) {
            return None;
        }
        NaiveDate::parse_from_str(date_part, DAY_FORMAT)
            .ok()
            .map(Day)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Signed number of days from `self` to `other` (`other - self`).
    pub fn days_until(&self, other: Day) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// `None` when the result falls outside the supported date range.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        if days.unsigned_abs() > MAX_DAY_OFFSET {
            return None;
        }
        self.0.checked_add_signed(Duration::days(days)).map(Day)
    }

    /// Like [`Day::checked_add_days`], saturating at the ends of the range.
    pub fn add_days(&self, days: i64) -> Self {
        self.checked_add_days(days).unwrap_or(if days < 0 {
            Day(NaiveDate::MIN)
        } else {
            Day(NaiveDate::MAX)
        })
    }

    pub fn succ(&self) -> Self {
        self.add_days(1)
    }

    pub fn pred(&self) -> Self {
        self.add_days(-1)
    }

    /// Sunday that starts the week containing this day.
    pub fn week_start(&self) -> Self {
        let offset = self.0.weekday().num_days_from_sunday() as i64;
        self.add_days(-offset)
    }

    /// Iterate every day from `self` through `end`, inclusive.
    pub fn iter_through(self, end: Day) -> impl Iterator<Item = Day> {
        let len = if end < self {
            0
        } else {
            self.days_until(end) + 1
        };
        (0..len).map(move |offset| self.add_days(offset))
    }

    /// Short label for charts (e.g. "Jan 10").
    pub fn short_label(&self) -> String {
        self.0.format("%b %d").to_string()
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Day(date)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for Day {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::from_timestamp(s).ok_or_else(|| Error::InvalidDate(s.to_string()))
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
