//! Backup document: every stored collection in one JSON value.
//!
//! The layout is the FitTrack export format:
//!
//! ```json
//! { "version": "1.0", "exportDate": "...", "data": { "workouts": [...], ... } }
//! ```
//!
//! `data` is keyed by storage key. Collections missing from `data` are left
//! untouched on import.

use serde::{Deserialize, Serialize};

use super::keys;
use crate::error::{Error, Result};
use crate::types::{CheckInData, CompletedWorkout, DeletedWorkout, UserProfile, WeightEntry, Workout};

/// Current backup format version
pub const BACKUP_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub version: String,
    /// ISO-8601 timestamp of the export
    pub export_date: String,
    pub data: BackupData,
}

/// Stored collections, each optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupData {
    #[serde(default, alias = "userProfile", skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<UserProfile>,
    #[serde(default, alias = "checkIns", skip_serializing_if = "Option::is_none")]
    pub check_ins: Option<CheckInData>,
    #[serde(
        default,
        alias = "completedWorkouts",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_workouts: Option<Vec<CompletedWorkout>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workouts: Option<Vec<Workout>>,
    #[serde(default, alias = "weightEntries", skip_serializing_if = "Option::is_none")]
    pub weight_entries: Option<Vec<WeightEntry>>,
    #[serde(
        default,
        alias = "deletedWorkouts",
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_workouts: Option<Vec<DeletedWorkout>>,
}

impl BackupData {
    /// Storage keys present in this backup, in import order.
    pub fn present_keys(&self) -> Vec<&'static str> {
        let mut present = Vec::new();
        if self.user_profile.is_some() {
            present.push(keys::USER_PROFILE);
        }
        if self.check_ins.is_some() {
            present.push(keys::CHECK_INS);
        }
        if self.completed_workouts.is_some() {
            present.push(keys::COMPLETED_WORKOUTS);
        }
        if self.workouts.is_some() {
            present.push(keys::WORKOUTS);
        }
        if self.weight_entries.is_some() {
            present.push(keys::WEIGHT_ENTRIES);
        }
        if self.deleted_workouts.is_some() {
            present.push(keys::DELETED_WORKOUTS);
        }
        present
    }
}

impl Backup {
    /// Parse a backup document, rejecting unknown versions.
    pub fn from_json(raw: &str) -> Result<Self> {
        let backup: Backup = serde_json::from_str(raw)?;
        backup.validate()?;
        Ok(backup)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Accept any `1.x` version.
    pub fn validate(&self) -> Result<()> {
        let major = self.version.split('.').next().unwrap_or_default();
        if major != "1" {
            return Err(Error::UnsupportedBackup(self.version.clone()));
        }
        Ok(())
    }

    pub fn completed_count(&self) -> usize {
        self.data.completed_workouts.as_ref().map_or(0, Vec::len)
    }

    pub fn check_in_count(&self) -> usize {
        self.data.check_ins.as_ref().map_or(0, |c| c.check_ins.len())
    }
}
