//! Temporal bucketing of the workout log into day and week slots.
//!
//! Every series is zero-filled and ascending, ready to hand to a chart.

use serde::Serialize;

use crate::calendar::Day;
use crate::types::CompletedWorkout;

/// Activity totals for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyActivity {
    pub date: Day,
    /// Number of workouts completed
    pub workouts: u32,
    /// Sum of durations in minutes
    pub minutes: u32,
    /// Sum of calories burned
    pub calories: u32,
}

/// Activity totals for one Sunday-based week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgress {
    pub week_start: Day,
    pub workouts: u32,
    pub minutes: u32,
    pub calories: u32,
}

/// Bucket `workouts` into one entry per day of `[start, end]`.
///
/// Workouts outside the range, or with a malformed date, are ignored.
/// Returns an empty series when `start > end`.
pub fn daily_activity(workouts: &[CompletedWorkout], start: Day, end: Day) -> Vec<DailyActivity> {
    let mut buckets: Vec<DailyActivity> = start
        .iter_through(end)
        .map(|date| DailyActivity {
            date,
            workouts: 0,
            minutes: 0,
            calories: 0,
        })
        .collect();

    let mut skipped = 0usize;
    for workout in workouts {
        let Some(day) = workout.day() else {
            skipped += 1;
            continue;
        };
        if day < start || day > end {
            continue;
        }
        let bucket = &mut buckets[start.days_until(day) as usize];
        bucket.workouts += 1;
        bucket.minutes = bucket.minutes.saturating_add(workout.duration);
        bucket.calories = bucket.calories.saturating_add(workout.calories_burned);
    }

    if skipped > 0 {
        tracing::warn!(skipped, "Ignored workouts with malformed dates");
    }
    tracing::debug!(
        %start,
        %end,
        days = buckets.len(),
        workouts = workouts.len(),
        "Bucketed daily activity"
    );

    buckets
}

/// Daily activity for the `days` days ending with `today`.
///
/// The result has exactly `days` entries and the last one is `today`.
/// A window reaching past the supported date range yields an empty series.
pub fn last_n_days_activity(
    workouts: &[CompletedWorkout],
    days: u32,
    today: Day,
) -> Vec<DailyActivity> {
    if days == 0 {
        return Vec::new();
    }
    let Some(start) = today.checked_add_days(-(days as i64 - 1)) else {
        tracing::warn!(days, %today, "Activity window out of range");
        return Vec::new();
    };
    daily_activity(workouts, start, today)
}

/// Weekly totals for the `weeks` weeks ending with the current one.
pub fn weekly_progress(
    workouts: &[CompletedWorkout],
    weeks: u32,
    today: Day,
) -> Vec<WeeklyProgress> {
    if weeks == 0 {
        return Vec::new();
    }
    let current_week = today.week_start();
    let Some(first_week) = current_week.checked_add_days(-7 * (weeks as i64 - 1)) else {
        tracing::warn!(weeks, %today, "Weekly window out of range");
        return Vec::new();
    };

    let mut buckets: Vec<WeeklyProgress> = (0..weeks as i64)
        .map(|i| WeeklyProgress {
            week_start: first_week.add_days(7 * i),
            workouts: 0,
            minutes: 0,
            calories: 0,
        })
        .collect();

    for workout in workouts {
        let Some(week_start) = workout.day().map(|d| d.week_start()) else {
            continue;
        };
        if week_start < first_week || week_start > current_week {
            continue;
        }
        let bucket = &mut buckets[(first_week.days_until(week_start) / 7) as usize];
        bucket.workouts += 1;
        bucket.minutes = bucket.minutes.saturating_add(workout.duration);
        bucket.calories = bucket.calories.saturating_add(workout.calories_burned);
    }

    buckets
}
