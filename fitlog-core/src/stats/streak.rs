//! Streak calculation over sets of activity days.
//!
//! A streak is a run of calendar days exactly one day apart. Several events
//! on the same day count once. The *current* streak only exists while the
//! most recent active day is today or yesterday; the *longest* streak does
//! not depend on today.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::calendar::Day;
use crate::types::CompletedWorkout;

/// Current and longest streak, in days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// A run of consecutive active days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakRun {
    pub start: Day,
    pub end: Day,
    pub days: u32,
}

/// Streaks from the completed-workout log.
///
/// Workouts with malformed dates do not contribute a day.
pub fn workout_streak(workouts: &[CompletedWorkout], today: Day) -> StreakSummary {
    let days: BTreeSet<Day> = workouts.iter().filter_map(CompletedWorkout::day).collect();
    let skipped = workouts.len() - workouts.iter().filter(|w| w.day().is_some()).count();
    if skipped > 0 {
        tracing::warn!(skipped, "Workouts with malformed dates excluded from streak");
    }
    streak_from_days(days, today)
}

/// Streaks from any collection of active days (duplicates allowed).
pub fn streak_from_days(days: impl IntoIterator<Item = Day>, today: Day) -> StreakSummary {
    let sorted: Vec<Day> = days.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    let summary = StreakSummary {
        current_streak: current_run(&sorted, today),
        longest_streak: longest_run(&sorted).map(|run| run.days).unwrap_or(0),
    };

    tracing::debug!(
        active_days = sorted.len(),
        current = summary.current_streak,
        longest = summary.longest_streak,
        %today,
        "Computed streak"
    );
    summary
}

/// Length of the run ending at the last day, if that day is today or yesterday.
///
/// `sorted` must be ascending and free of duplicates.
fn current_run(sorted: &[Day], today: Day) -> u32 {
    let Some(&last) = sorted.last() else {
        return 0;
    };
    if last != today && last != today.pred() {
        return 0;
    }

    let mut streak = 1u32;
    for pair in sorted.windows(2).rev() {
        if pair[0].days_until(pair[1]) == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// The longest run of consecutive days. On a tie the earliest run wins.
///
/// `sorted` must be ascending and free of duplicates.
pub fn longest_run(sorted: &[Day]) -> Option<StreakRun> {
    let (&first, rest) = sorted.split_first()?;

    let mut best = StreakRun {
        start: first,
        end: first,
        days: 1,
    };
    let mut run = best;

    for &day in rest {
        if run.end.days_until(day) == 1 {
            run.end = day;
            run.days += 1;
        } else {
            run = StreakRun {
                start: day,
                end: day,
                days: 1,
            };
        }
        if run.days > best.days {
            best = run;
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::{completed, day};

    fn days(list: &[&str]) -> Vec<Day> {
        list.iter().map(|s| day(s)).collect()
    }

    #[test]
    fn test_empty_log() {
        let summary = workout_streak(&[], day("2026-01-14"));
        assert_eq!(summary, StreakSummary::default());
    }

    #[test]
    fn test_single_day() {
        let today = day("2026-01-14");
        let on = |d: &str| streak_from_days(days(&[d]), today);

        assert_eq!(on("2026-01-14"), StreakSummary { current_streak: 1, longest_streak: 1 });
        assert_eq!(on("2026-01-13"), StreakSummary { current_streak: 1, longest_streak: 1 });
        assert_eq!(on("2026-01-12"), StreakSummary { current_streak: 0, longest_streak: 1 });
    }

    #[test]
    fn test_current_streak_counts_back_from_latest() {
        let today = day("2026-01-14");
        let summary = streak_from_days(
            days(&["2026-01-05", "2026-01-11", "2026-01-12", "2026-01-13", "2026-01-14"]),
            today,
        );
        assert_eq!(summary.current_streak, 4);
        assert_eq!(summary.longest_streak, 4);
    }

    #[test]
    fn test_yesterday_keeps_streak_alive() {
        let summary = streak_from_days(
            days(&["2026-01-12", "2026-01-13"]),
            day("2026-01-14"),
        );
        assert_eq!(summary.current_streak, 2);
    }

    #[test]
    fn test_broken_by_inactivity() {
        let summary = streak_from_days(
            days(&["2026-01-01", "2026-01-02", "2026-01-03", "2026-01-10", "2026-01-11"]),
            day("2026-01-14"),
        );
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.longest_streak, 3);
    }

    #[test]
    fn test_longest_independent_of_today() {
        let summary = streak_from_days(
            days(&[
                "2026-01-01", "2026-01-02", "2026-01-03", "2026-01-04", "2026-01-05",
                "2026-01-13", "2026-01-14",
            ]),
            day("2026-01-14"),
        );
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.longest_streak, 5);
    }

    #[test]
    fn test_multiple_workouts_same_day_count_once() {
        let workouts = vec![
            completed("2026-01-13T07:00:00Z", 20, 160),
            completed("2026-01-13T19:00:00Z", 20, 160),
            completed("2026-01-14T07:00:00Z", 20, 160),
            completed("2026-01-14T08:00:00Z", 20, 160),
        ];
        let summary = workout_streak(&workouts, day("2026-01-14"));
        assert_eq!(summary, StreakSummary { current_streak: 2, longest_streak: 2 });
    }

    #[test]
    fn test_unordered_input_and_month_boundary() {
        let workouts = vec![
            completed("2026-02-01T07:00:00Z", 20, 160),
            completed("2026-01-30T07:00:00Z", 20, 160),
            completed("2026-01-31T07:00:00Z", 20, 160),
        ];
        let summary = workout_streak(&workouts, day("2026-02-02"));
        assert_eq!(summary, StreakSummary { current_streak: 3, longest_streak: 3 });
    }

    #[test]
    fn test_malformed_dates_do_not_bridge_gaps() {
        let workouts = vec![
            completed("2026-01-12T07:00:00Z", 20, 160),
            completed("not-a-date", 20, 160),
            completed("2026-01-14T07:00:00Z", 20, 160),
        ];
        let summary = workout_streak(&workouts, day("2026-01-14"));
        assert_eq!(summary, StreakSummary { current_streak: 1, longest_streak: 1 });
    }

    #[test]
    fn test_future_latest_day_is_not_current() {
        let summary = streak_from_days(days(&["2026-01-14", "2026-01-15"]), day("2026-01-13"));
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.longest_streak, 2);
    }

    #[test]
    fn test_longest_never_below_current() {
        let today = day("2026-01-20");
        let mut active = Vec::new();
        for offset in 0..20 {
            // Every third day missing
            if offset % 3 != 2 {
                active.push(today.add_days(-offset));
            }
            let summary = streak_from_days(active.clone(), today);
            assert!(summary.longest_streak >= summary.current_streak);
        }
    }

    #[test]
    fn test_longest_run_tie_keeps_earliest() {
        let run = longest_run(&days(&["2026-01-01", "2026-01-02", "2026-01-05", "2026-01-06"]))
            .unwrap();
        assert_eq!(run.start, day("2026-01-01"));
        assert_eq!(run.end, day("2026-01-02"));
        assert_eq!(run.days, 2);
        assert!(longest_run(&[]).is_none());
    }
}
