//! Body metrics: BMI, BMR and body-weight trend.

use serde::{Deserialize, Serialize};

use crate::calendar::Day;
use crate::types::WeightEntry;

/// Biological sex used by the BMR equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// WHO BMI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Body-mass index from weight (kg) and height (cm).
///
/// `None` when height is not positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor).
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Body-weight movement over a trailing window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightTrend {
    /// Most recent entry overall
    pub latest: Option<WeightEntry>,
    /// Latest minus earliest weight inside the window
    pub change_kg: Option<f64>,
    /// Entries inside the window, oldest first
    pub entries: Vec<WeightEntry>,
}

/// Weight entries from the `days` days ending with `today`, with the change
/// between the first and last of them.
pub fn weight_trend(entries: &[WeightEntry], today: Day, days: u32) -> WeightTrend {
    let mut dated: Vec<(Day, &WeightEntry)> = entries
        .iter()
        .filter_map(|e| e.day().map(|d| (d, e)))
        .collect();
    // Stable sort keeps insertion order for same-day entries
    dated.sort_by_key(|(d, _)| *d);

    let latest = dated.last().map(|(_, e)| (*e).clone());
    let start = today.add_days(-(days.max(1) as i64 - 1));
    let window: Vec<WeightEntry> = dated
        .iter()
        .filter(|(d, _)| *d >= start && *d <= today)
        .map(|(_, e)| (*e).clone())
        .collect();

    let change_kg = match (window.first(), window.last()) {
        (Some(first), Some(last)) if window.len() > 1 => Some(last.weight_kg - first.weight_kg),
        _ => None,
    };

    WeightTrend {
        latest,
        change_kg,
        entries: window,
    }
}
