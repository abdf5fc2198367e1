//! Statistics engine for fitlog
//!
//! Pure functions that turn the raw workout log into derived aggregates:
//! - [`activity`]: zero-filled daily and weekly buckets for charts
//! - [`streak`]: current and longest consecutive-day streaks
//! - [`summary`]: totals and the workouts-per-week rate
//!
//! Nothing here performs I/O or reads the clock. "Today" is always passed
//! in, so calling any function twice with the same inputs gives the same
//! output. Dates are compared at day granularity; records whose date does
//! not parse are left out of date-based aggregation.

pub mod activity;
pub mod streak;
pub mod summary;

pub use activity::{daily_activity, last_n_days_activity, weekly_progress, DailyActivity, WeeklyProgress};
pub use streak::{longest_run, streak_from_days, workout_streak, StreakRun, StreakSummary};
pub use summary::{workout_stats, WorkoutStats};
