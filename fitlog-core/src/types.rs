//! Core domain types for fitlog
//!
//! These are the records the persistence layer stores. Derived aggregates
//! (daily buckets, streaks, totals) live in [`crate::stats`] and are never
//! persisted.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Workout** | A template in the library: a named list of exercises |
//! | **CompletedWorkout** | One finished session of a workout, immutable once logged |
//! | **Custom workout** | A user-created template; only these can be edited or deleted |
//! | **Trash** | Deleted custom workouts, restorable until they expire |
//! | **Check-in** | A once-per-day "I showed up" mark, tracked apart from workouts |
//! | **Streak** | A run of consecutive calendar days that each have activity |
//!
//! Field names serialize in camelCase, matching the JSON written by the
//! FitTrack mobile app, so its records load unchanged.

use serde::{Deserialize, Serialize};

use crate::calendar::Day;

// ============================================
// Workout library
// ============================================

/// Workout category, used to pick an intensity for calorie estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutCategory {
    Strength,
    Cardio,
    Flexibility,
    Hiit,
}

impl WorkoutCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCategory::Strength => "strength",
            WorkoutCategory::Cardio => "cardio",
            WorkoutCategory::Flexibility => "flexibility",
            WorkoutCategory::Hiit => "hiit",
        }
    }
}

impl std::str::FromStr for WorkoutCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(WorkoutCategory::Strength),
            "cardio" => Ok(WorkoutCategory::Cardio),
            "flexibility" => Ok(WorkoutCategory::Flexibility),
            "hiit" => Ok(WorkoutCategory::Hiit),
            _ => Err(format!("unknown workout category: {}", s)),
        }
    }
}

/// Difficulty level of a workout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("unknown difficulty: {}", s)),
        }
    }
}

/// One step of a workout: timed (`duration_secs`) or counted (`reps`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    /// Work interval in seconds
    #[serde(rename = "duration", default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    /// Repetitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Rest after the exercise in seconds
    #[serde(rename = "rest", default)]
    pub rest_secs: u32,
}

impl Exercise {
    pub fn timed(name: &str, duration_secs: u32, rest_secs: u32) -> Self {
        Self {
            name: name.to_string(),
            duration_secs: Some(duration_secs),
            reps: None,
            rest_secs,
        }
    }

    pub fn counted(name: &str, reps: u32, rest_secs: u32) -> Self {
        Self {
            name: name.to_string(),
            duration_secs: None,
            reps: Some(reps),
            rest_secs,
        }
    }
}

/// A workout template from the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-form category string; unknown values are kept as-is
    pub category: String,
    pub difficulty: Difficulty,
    /// Planned duration in minutes
    pub duration: u32,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// User-created (editable) as opposed to a built-in default
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_custom: bool,
    /// ISO-8601 timestamp, set for custom workouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Fields of a new custom workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub name: String,
    pub description: String,
    pub category: WorkoutCategory,
    pub difficulty: Difficulty,
    pub duration: u32,
    pub exercises: Vec<Exercise>,
}

/// Partial edit of a custom workout; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<WorkoutCategory>,
    pub difficulty: Option<Difficulty>,
    pub duration: Option<u32>,
    pub exercises: Option<Vec<Exercise>>,
}

/// A custom workout in the trash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedWorkout {
    pub workout: Workout,
    /// ISO-8601 timestamp of the deletion
    pub deleted_at: String,
    /// Last day the workout can be restored
    pub expires_at: Day,
}

impl DeletedWorkout {
    pub fn is_expired(&self, today: Day) -> bool {
        self.expires_at < today
    }

    /// Days left before expiry, counting today.
    pub fn days_remaining(&self, today: Day) -> i64 {
        (today.days_until(self.expires_at) + 1).max(0)
    }
}

// ============================================
// Activity log
// ============================================

/// A finished workout session. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedWorkout {
    pub id: String,
    /// Template this session was started from
    pub workout_id: String,
    /// Template name at the time of completion
    pub workout_name: String,
    /// ISO-8601 timestamp
    pub date: String,
    /// Actual duration in minutes
    pub duration: u32,
    pub calories_burned: u32,
    /// Number of exercises completed
    pub exercises: u32,
}

impl CompletedWorkout {
    /// Calendar day of this workout, or `None` if `date` is malformed.
    pub fn day(&self) -> Option<Day> {
        Day::from_timestamp(&self.date)
    }
}

/// Daily check-in state. A single record per user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInData {
    /// `YYYY-MM-DD` strings, unique by day
    #[serde(default)]
    pub check_ins: Vec<String>,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub last_check_in: Option<String>,
}

/// One body-weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    pub id: String,
    /// ISO-8601 timestamp
    pub date: String,
    #[serde(rename = "weight", alias = "weightKg")]
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightEntry {
    pub fn day(&self) -> Option<Day> {
        Day::from_timestamp(&self.date)
    }
}

// ============================================
// User profile
// ============================================

/// Smallest and largest weekly workout goal.
pub const WEEKLY_GOAL_RANGE: std::ops::RangeInclusive<u32> = 1..=14;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

/// Stored user settings. A single record per user.
///
/// Fields fitlog does not use are kept in `extra` so a profile survives a
/// load/save cycle intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default = "default_profile_name")]
    pub name: String,
    /// Target workouts per week
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub reminders_enabled: bool,
    /// `HH:mm`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            weekly_goal: default_weekly_goal(),
            theme: ThemeMode::default(),
            notifications: true,
            unit_system: UnitSystem::default(),
            reminders_enabled: false,
            reminder_time: None,
            extra: serde_json::Map::new(),
        }
    }
}

fn default_profile_name() -> String {
    "Fitness-Enthusiast".to_string()
}

fn default_weekly_goal() -> u32 {
    3
}

fn default_true() -> bool {
    true
}
