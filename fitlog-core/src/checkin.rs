//! Daily check-ins.
//!
//! A check-in is a once-per-day mark separate from completing a workout.
//! The streak is updated incrementally on each check-in rather than being
//! recomputed from the whole history.

use std::collections::HashSet;

use crate::calendar::Day;
use crate::types::CheckInData;

/// Result of [`perform_check_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// Today was recorded
    CheckedIn { current_streak: u32 },
    /// Today was already present; nothing changed
    AlreadyCheckedIn,
}

/// Record a check-in for `today`.
///
/// Calling this more than once on the same day leaves `data` untouched.
pub fn perform_check_in(data: &mut CheckInData, today: Day) -> CheckInOutcome {
    if data.is_checked_in(today) {
        tracing::debug!(%today, "Already checked in");
        return CheckInOutcome::AlreadyCheckedIn;
    }

    data.check_ins.push(today.to_string());

    let present: HashSet<Day> = data.days().into_iter().collect();
    let mut current = 1u32;
    let mut cursor = today.pred();
    while present.contains(&cursor) {
        current += 1;
        cursor = cursor.pred();
    }

    data.current_streak = current;
    data.longest_streak = data.longest_streak.max(current);
    data.last_check_in = Some(today.to_string());

    tracing::info!(
        %today,
        current_streak = data.current_streak,
        longest_streak = data.longest_streak,
        "Checked in"
    );

    CheckInOutcome::CheckedIn {
        current_streak: current,
    }
}

impl CheckInData {
    /// Parsed check-in days; malformed entries are skipped.
    pub fn days(&self) -> Vec<Day> {
        self.check_ins
            .iter()
            .filter_map(|s| Day::from_timestamp(s))
            .collect()
    }

    pub fn is_checked_in(&self, day: Day) -> bool {
        self.check_ins
            .iter()
            .any(|s| Day::from_timestamp(s) == Some(day))
    }

    /// The stored current streak, or 0 once the last check-in is older than
    /// yesterday.
    pub fn active_streak(&self, today: Day) -> u32 {
        let last = self.last_check_in.as_deref().and_then(Day::from_timestamp);
        match last {
            Some(last) if last == today || last == today.pred() => self.current_streak,
            _ => 0,
        }
    }

    /// Check-in count within `[start, end]`.
    pub fn count_between(&self, start: Day, end: Day) -> usize {
        self.days()
            .into_iter()
            .filter(|d| *d >= start && *d <= end)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> Day {
        s.parse().unwrap()
    }

    #[test]
    fn test_first_check_in() {
        let mut data = CheckInData::default();
        let outcome = perform_check_in(&mut data, day("2026-01-10"));
        assert_eq!(outcome, CheckInOutcome::CheckedIn { current_streak: 1 });
        assert_eq!(data.check_ins, vec!["2026-01-10"]);
        assert_eq!(data.current_streak, 1);
        assert_eq!(data.longest_streak, 1);
        assert_eq!(data.last_check_in.as_deref(), Some("2026-01-10"));
    }

    #[test]
    fn test_same_day_twice_is_noop() {
        let mut data = CheckInData::default();
        perform_check_in(&mut data, day("2026-01-10"));
        let before = data.clone();

        let outcome = perform_check_in(&mut data, day("2026-01-10"));
        assert_eq!(outcome, CheckInOutcome::AlreadyCheckedIn);
        assert_eq!(data.check_ins.len(), 1);
        assert_eq!(data, before);
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let mut data = CheckInData::default();
        for d in ["2026-01-10", "2026-01-11", "2026-01-12"] {
            perform_check_in(&mut data, day(d));
        }
        assert_eq!(data.current_streak, 3);
        assert_eq!(data.longest_streak, 3);
    }

    #[test]
    fn test_gap_resets_current_keeps_longest() {
        let mut data = CheckInData::default();
        for d in ["2026-01-01", "2026-01-02", "2026-01-03", "2026-01-05"] {
            perform_check_in(&mut data, day(d));
        }
        assert_eq!(data.current_streak, 1);
        assert_eq!(data.longest_streak, 3);

        perform_check_in(&mut data, day("2026-01-06"));
        assert_eq!(data.current_streak, 2);
        assert_eq!(data.longest_streak, 3);
    }

    #[test]
    fn test_stored_timestamp_forms_are_recognised() {
        let mut data = CheckInData {
            check_ins: vec!["2026-01-09T08:00:00.000Z".to_string()],
            current_streak: 1,
            longest_streak: 1,
            last_check_in: Some("2026-01-09T08:00:00.000Z".to_string()),
        };
        perform_check_in(&mut data, day("2026-01-10"));
        assert_eq!(data.current_streak, 2);
        assert_eq!(
            perform_check_in(&mut data, day("2026-01-10")),
            CheckInOutcome::AlreadyCheckedIn
        );
    }

    #[test]
    fn test_active_streak_expires() {
        let mut data = CheckInData::default();
        perform_check_in(&mut data, day("2026-01-10"));
        perform_check_in(&mut data, day("2026-01-11"));

        assert_eq!(data.active_streak(day("2026-01-11")), 2);
        assert_eq!(data.active_streak(day("2026-01-12")), 2);
        assert_eq!(data.active_streak(day("2026-01-13")), 0);
        assert_eq!(CheckInData::default().active_streak(day("2026-01-13")), 0);
    }

    #[test]
    fn test_count_between() {
        let mut data = CheckInData::default();
        for d in ["2026-01-01", "2026-01-05", "2026-01-09"] {
            perform_check_in(&mut data, day(d));
        }
        assert_eq!(data.count_between(day("2026-01-02"), day("2026-01-09")), 2);
    }
}
