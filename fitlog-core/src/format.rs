//! Derived-value formatters shared across front ends.
//!
//! Calorie estimates use a coarse MET-equivalent intensity when no
//! heart-rate data exists. Unknown categories fall back
//! to [`Intensity::Moderate`] instead of failing.

use serde::{Deserialize, Serialize};

use crate::types::WorkoutCategory;

/// Coarse exercise intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
}

impl Intensity {
    /// Estimated calories burned per minute.
    pub fn calories_per_minute(&self) -> f64 {
        match self {
            Intensity::Low => 5.0,
            Intensity::Moderate => 8.0,
            Intensity::High => 12.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
        }
    }
}

/// Estimate calories for a session of `duration_minutes` at `intensity`.
pub fn estimate_calories(duration_minutes: f64, intensity: Intensity) -> u32 {
    let estimate = (duration_minutes * intensity.calories_per_minute()).round();
    // NaN and negatives clamp to zero
    estimate.max(0.0) as u32
}

/// Intensity used for a workout category.
pub fn workout_intensity(category: &str) -> Intensity {
    match category.parse::<WorkoutCategory>() {
        Ok(WorkoutCategory::Flexibility) => Intensity::Low,
        Ok(WorkoutCategory::Strength) => Intensity::Moderate,
        Ok(WorkoutCategory::Cardio | WorkoutCategory::Hiit) => Intensity::High,
        Err(_) => Intensity::Moderate,
    }
}

/// Format minutes for display (e.g. "45 Min", "2h", "1h 30min").
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} Min", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}min", hours, mins)
    }
}

/// Format a calorie count for display (e.g. "500", "1.5k").
pub fn format_calories(calories: u32) -> String {
    if calories >= 1000 {
        format!("{:.1}k", calories as f64 / 1000.0)
    } else {
        calories.to_string()
    }
}
