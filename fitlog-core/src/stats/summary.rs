//! Top-line totals over the workout log.

use serde::Serialize;

use crate::calendar::Day;
use crate::types::CompletedWorkout;

/// Aggregate totals plus pass-through streak values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    pub total_workouts: u32,
    pub total_minutes: u32,
    pub total_calories: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Rounded to one decimal place
    pub average_workouts_per_week: f64,
}

/// Reduce the workout log to totals and a workouts-per-week rate.
///
/// Streak values are computed elsewhere and copied through unchanged.
pub fn workout_stats(
    workouts: &[CompletedWorkout],
    current_streak: u32,
    longest_streak: u32,
) -> WorkoutStats {
    let total_workouts = workouts.len() as u32;
    let total_minutes = workouts
        .iter()
        .fold(0u32, |acc, w| acc.saturating_add(w.duration));
    let total_calories = workouts
        .iter()
        .fold(0u32, |acc, w| acc.saturating_add(w.calories_burned));

    WorkoutStats {
        total_workouts,
        total_minutes,
        total_calories,
        current_streak,
        longest_streak,
        average_workouts_per_week: average_per_week(workouts),
    }
}

fn average_per_week(workouts: &[CompletedWorkout]) -> f64 {
    if workouts.is_empty() {
        return 0.0;
    }

    let mut days: Vec<Day> = workouts.iter().filter_map(CompletedWorkout::day).collect();
    days.sort();

    let span_days = match (days.first(), days.last()) {
        (Some(first), Some(last)) => first.days_until(*last).max(1),
        _ => 1,
    };
    let weeks = (span_days as f64 / 7.0).max(1.0);

    round_one_decimal(workouts.len() as f64 / weeks)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
