//! Typed repository over a [`KeyValueStore`].

use super::backup::{Backup, BackupData, BACKUP_VERSION};
use super::keys;
use super::seed::default_workouts;
use super::KeyValueStore;
use crate::calendar::Day;
use crate::checkin::{perform_check_in, CheckInOutcome};
use crate::error::{Error, Result};
use crate::format::{estimate_calories, workout_intensity};
use crate::types::{
    CheckInData, CompletedWorkout, DeletedWorkout, UserProfile, WeightEntry, Workout,
    WorkoutDraft, WorkoutUpdate, WEEKLY_GOAL_RANGE,
};

/// Days a deleted custom workout stays restorable.
pub const TRASH_RETENTION_DAYS: i64 = 30;

/// Workout library, activity log, check-ins, weight log and profile.
pub struct FitnessStore<S> {
    kv: S,
}

impl<S: KeyValueStore> FitnessStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// The underlying key-value store
    pub fn inner(&self) -> &S {
        &self.kv
    }

    // ============================================
    // Workout library
    // ============================================

    /// Write the default library if no library exists yet.
    ///
    /// Returns `true` when the defaults were written.
    pub fn seed_defaults(&self) -> Result<bool> {
        if self.kv.get_raw(keys::WORKOUTS)?.is_some() {
            return Ok(false);
        }
        let defaults = default_workouts();
        self.kv.put_json(keys::WORKOUTS, &defaults)?;
        tracing::info!(count = defaults.len(), "Seeded default workout library");
        Ok(true)
    }

    /// The workout library (empty until seeded)
    pub fn workouts(&self) -> Result<Vec<Workout>> {
        Ok(self.kv.get_json(keys::WORKOUTS)?.unwrap_or_default())
    }

    pub fn workout(&self, id: &str) -> Result<Workout> {
        self.workouts()?
            .into_iter()
            .find(|w| w.id == id)
            .ok_or_else(|| Error::WorkoutNotFound(id.to_string()))
    }

    /// Add or replace a workout template by id.
    pub fn save_workout(&self, workout: Workout) -> Result<()> {
        let mut workouts = self.workouts()?;
        match workouts.iter_mut().find(|w| w.id == workout.id) {
            Some(existing) => *existing = workout,
            None => workouts.push(workout),
        }
        self.kv.put_json(keys::WORKOUTS, &workouts)
    }

    /// Create a user-defined workout with a fresh `custom-` id.
    pub fn add_custom_workout(&self, draft: WorkoutDraft, created_at: &str) -> Result<Workout> {
        validate_workout_fields(&draft.name, draft.duration)?;
        if Day::from_timestamp(created_at).is_none() {
            return Err(Error::InvalidDate(created_at.to_string()));
        }

        let workout = Workout {
            id: format!("custom-{}", uuid::Uuid::new_v4().simple()),
            name: draft.name.trim().to_string(),
            description: draft.description,
            category: draft.category.as_str().to_string(),
            difficulty: draft.difficulty,
            duration: draft.duration,
            exercises: draft.exercises,
            is_custom: true,
            created_at: Some(created_at.to_string()),
        };
        self.save_workout(workout.clone())?;
        tracing::info!(id = %workout.id, name = %workout.name, "Added custom workout");
        Ok(workout)
    }

    /// Apply `update` to a custom workout. Default workouts are read-only.
    pub fn update_workout(&self, id: &str, update: WorkoutUpdate) -> Result<Workout> {
        let mut workout = self.custom_workout(id)?;

        if let Some(name) = update.name {
            workout.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            workout.description = description;
        }
        if let Some(category) = update.category {
            workout.category = category.as_str().to_string();
        }
        if let Some(difficulty) = update.difficulty {
            workout.difficulty = difficulty;
        }
        if let Some(duration) = update.duration {
            workout.duration = duration;
        }
        if let Some(exercises) = update.exercises {
            workout.exercises = exercises;
        }
        validate_workout_fields(&workout.name, workout.duration)?;

        self.save_workout(workout.clone())?;
        tracing::info!(id, "Updated custom workout");
        Ok(workout)
    }

    /// Move a custom workout to the trash.
    ///
    /// It stays restorable for [`TRASH_RETENTION_DAYS`] after the day of
    /// `deleted_at`.
    pub fn delete_workout(&self, id: &str, deleted_at: &str) -> Result<DeletedWorkout> {
        let deleted_on = Day::from_timestamp(deleted_at)
            .ok_or_else(|| Error::InvalidDate(deleted_at.to_string()))?;
        let workout = self.custom_workout(id)?;

        let mut workouts = self.workouts()?;
        workouts.retain(|w| w.id != id);

        let entry = DeletedWorkout {
            workout,
            deleted_at: deleted_at.to_string(),
            expires_at: deleted_on.add_days(TRASH_RETENTION_DAYS),
        };
        let mut trash = self.deleted_workouts()?;
        trash.retain(|d| d.workout.id != id);
        trash.push(entry.clone());

        self.kv.put_json(keys::WORKOUTS, &workouts)?;
        self.kv.put_json(keys::DELETED_WORKOUTS, &trash)?;
        tracing::info!(id, expires_at = %entry.expires_at, "Moved workout to trash");
        Ok(entry)
    }

    fn custom_workout(&self, id: &str) -> Result<Workout> {
        let workout = self.workout(id)?;
        if !workout.is_custom {
            return Err(Error::DefaultWorkout(id.to_string()));
        }
        Ok(workout)
    }

    // ============================================
    // Trash
    // ============================================

    /// Everything in the trash, expired entries included.
    pub fn deleted_workouts(&self) -> Result<Vec<DeletedWorkout>> {
        Ok(self.kv.get_json(keys::DELETED_WORKOUTS)?.unwrap_or_default())
    }

    /// Trash entries still restorable on `today`.
    pub fn trash(&self, today: Day) -> Result<Vec<DeletedWorkout>> {
        let mut trash = self.deleted_workouts()?;
        trash.retain(|d| !d.is_expired(today));
        Ok(trash)
    }

    /// Drop expired trash entries. Returns how many were removed.
    pub fn purge_expired_trash(&self, today: Day) -> Result<usize> {
        let mut trash = self.deleted_workouts()?;
        let before = trash.len();
        trash.retain(|d| !d.is_expired(today));
        let purged = before - trash.len();
        if purged > 0 {
            self.kv.put_json(keys::DELETED_WORKOUTS, &trash)?;
            tracing::info!(purged, "Purged expired trash");
        }
        Ok(purged)
    }

    /// Put a trashed workout back into the library.
    pub fn restore_workout(&self, id: &str, today: Day) -> Result<Workout> {
        let mut trash = self.deleted_workouts()?;
        let index = trash
            .iter()
            .position(|d| d.workout.id == id && !d.is_expired(today))
            .ok_or_else(|| Error::WorkoutNotFound(id.to_string()))?;
        let restored = trash.remove(index).workout;

        self.save_workout(restored.clone())?;
        self.kv.put_json(keys::DELETED_WORKOUTS, &trash)?;
        tracing::info!(id, "Restored workout from trash");
        Ok(restored)
    }

    pub fn permanently_delete_workout(&self, id: &str) -> Result<DeletedWorkout> {
        let mut trash = self.deleted_workouts()?;
        let index = trash
            .iter()
            .position(|d| d.workout.id == id)
            .ok_or_else(|| Error::WorkoutNotFound(id.to_string()))?;
        let removed = trash.remove(index);
        self.kv.put_json(keys::DELETED_WORKOUTS, &trash)?;
        tracing::info!(id, "Permanently deleted workout");
        Ok(removed)
    }

    /// Returns how many entries were removed.
    pub fn empty_trash(&self) -> Result<usize> {
        let count = self.deleted_workouts()?.len();
        self.kv.put_json::<Vec<DeletedWorkout>>(keys::DELETED_WORKOUTS, &Vec::new())?;
        tracing::info!(count, "Emptied trash");
        Ok(count)
    }

    // ============================================
    // Completed workouts
    // ============================================

    pub fn completed_workouts(&self) -> Result<Vec<CompletedWorkout>> {
        Ok(self
            .kv
            .get_json(keys::COMPLETED_WORKOUTS)?
            .unwrap_or_default())
    }

    /// Log a finished session of the workout `workout_id`.
    ///
    /// Calories are estimated from the template's category. `date` must be
    /// an ISO-8601 timestamp.
    pub fn record_workout(
        &self,
        workout_id: &str,
        duration_minutes: u32,
        date: &str,
    ) -> Result<CompletedWorkout> {
        if Day::from_timestamp(date).is_none() {
            return Err(Error::InvalidDate(date.to_string()));
        }
        let template = self.workout(workout_id)?;
        let intensity = workout_intensity(&template.category);

        let completed = CompletedWorkout {
            id: uuid::Uuid::new_v4().to_string(),
            workout_id: template.id,
            workout_name: template.name,
            date: date.to_string(),
            duration: duration_minutes,
            calories_burned: estimate_calories(duration_minutes as f64, intensity),
            exercises: template.exercises.len() as u32,
        };
        self.add_completed_workout(completed.clone())?;
        Ok(completed)
    }

    /// Append an already-built record to the log.
    pub fn add_completed_workout(&self, completed: CompletedWorkout) -> Result<()> {
        let mut log = self.completed_workouts()?;
        tracing::info!(
            id = %completed.id,
            workout = %completed.workout_name,
            duration = completed.duration,
            calories = completed.calories_burned,
            "Recorded workout"
        );
        log.push(completed);
        self.kv.put_json(keys::COMPLETED_WORKOUTS, &log)
    }

    pub fn delete_completed_workout(&self, id: &str) -> Result<CompletedWorkout> {
        let mut log = self.completed_workouts()?;
        let index = log
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| Error::WorkoutNotFound(id.to_string()))?;
        let removed = log.remove(index);
        self.kv.put_json(keys::COMPLETED_WORKOUTS, &log)?;
        tracing::info!(id, "Deleted completed workout");
        Ok(removed)
    }

    // ============================================
    // Check-ins
    // ============================================

    pub fn check_in_data(&self) -> Result<CheckInData> {
        Ok(self.kv.get_json(keys::CHECK_INS)?.unwrap_or_default())
    }

    /// Check in for `today`; only writes when something changed.
    pub fn check_in(&self, today: Day) -> Result<(CheckInOutcome, CheckInData)> {
        let mut data = self.check_in_data()?;
        let outcome = perform_check_in(&mut data, today);
        if let CheckInOutcome::CheckedIn { .. } = outcome {
            self.kv.put_json(keys::CHECK_INS, &data)?;
        }
        Ok((outcome, data))
    }

    // ============================================
    // Weight log
    // ============================================

    pub fn weight_entries(&self) -> Result<Vec<WeightEntry>> {
        Ok(self.kv.get_json(keys::WEIGHT_ENTRIES)?.unwrap_or_default())
    }

    pub fn add_weight(&self, weight_kg: f64, date: &str, note: Option<&str>) -> Result<WeightEntry> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(Error::Validation(format!(
                "weight must be a positive number, got {}",
                weight_kg
            )));
        }
        if Day::from_timestamp(date).is_none() {
            return Err(Error::InvalidDate(date.to_string()));
        }

        let entry = WeightEntry {
            id: uuid::Uuid::new_v4().to_string(),
            date: date.to_string(),
            weight_kg,
            note: note.map(str::trim).filter(|n| !n.is_empty()).map(String::from),
        };
        let mut entries = self.weight_entries()?;
        entries.push(entry.clone());
        self.kv.put_json(keys::WEIGHT_ENTRIES, &entries)?;
        tracing::info!(weight_kg, "Recorded weight");
        Ok(entry)
    }

    // ============================================
    // User profile
    // ============================================

    /// Stored profile, or the defaults when none was saved.
    pub fn user_profile(&self) -> Result<UserProfile> {
        Ok(self.kv.get_json(keys::USER_PROFILE)?.unwrap_or_default())
    }

    pub fn save_user_profile(&self, profile: &UserProfile) -> Result<()> {
        validate_weekly_goal(profile.weekly_goal)?;
        self.kv.put_json(keys::USER_PROFILE, profile)
    }

    pub fn set_weekly_goal(&self, goal: u32) -> Result<UserProfile> {
        let mut profile = self.user_profile()?;
        profile.weekly_goal = goal;
        self.save_user_profile(&profile)?;
        tracing::info!(goal, "Updated weekly goal");
        Ok(profile)
    }

    // ============================================
    // Backup
    // ============================================

    pub fn export_backup(&self, export_date: &str) -> Result<Backup> {
        Ok(Backup {
            version: BACKUP_VERSION.to_string(),
            export_date: export_date.to_string(),
            data: BackupData {
                user_profile: Some(self.user_profile()?),
                check_ins: Some(self.check_in_data()?),
                completed_workouts: Some(self.completed_workouts()?),
                workouts: Some(self.workouts()?),
                weight_entries: Some(self.weight_entries()?),
                deleted_workouts: Some(self.deleted_workouts()?),
            },
        })
    }

    /// Overwrite every collection present in `backup`; absent ones are kept.
    pub fn import_backup(&self, backup: &Backup) -> Result<()> {
        backup.validate()?;
        let data = &backup.data;
        if let Some(profile) = &data.user_profile {
            self.save_user_profile(profile)?;
        }
        if let Some(check_ins) = &data.check_ins {
            self.kv.put_json(keys::CHECK_INS, check_ins)?;
        }
        if let Some(completed) = &data.completed_workouts {
            self.kv.put_json(keys::COMPLETED_WORKOUTS, completed)?;
        }
        if let Some(workouts) = &data.workouts {
            self.kv.put_json(keys::WORKOUTS, workouts)?;
        }
        if let Some(entries) = &data.weight_entries {
            self.kv.put_json(keys::WEIGHT_ENTRIES, entries)?;
        }
        if let Some(trash) = &data.deleted_workouts {
            self.kv.put_json(keys::DELETED_WORKOUTS, trash)?;
        }
        tracing::info!(
            keys = ?data.present_keys(),
            completed = backup.completed_count(),
            check_ins = backup.check_in_count(),
            "Imported backup"
        );
        Ok(())
    }
}

fn validate_workout_fields(name: &str, duration: u32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("workout name must not be empty".to_string()));
    }
    if duration == 0 {
        return Err(Error::Validation("workout duration must be at least 1 minute".to_string()));
    }
    Ok(())
}

fn validate_weekly_goal(goal: u32) -> Result<()> {
    if !WEEKLY_GOAL_RANGE.contains(&goal) {
        return Err(Error::Validation(format!(
            "weekly goal must be between {} and {}, got {}",
            WEEKLY_GOAL_RANGE.start(),
            WEEKLY_GOAL_RANGE.end(),
            goal
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::{Difficulty, Exercise, WorkoutCategory};

    fn seeded() -> FitnessStore<MemoryStore> {
        let store = FitnessStore::new(MemoryStore::new());
        store.seed_defaults().unwrap();
        store
    }

    fn day(s: &str) -> Day {
        s.parse().unwrap()
    }

    fn draft(name: &str) -> WorkoutDraft {
        WorkoutDraft {
            name: name.to_string(),
            description: "Test".to_string(),
            category: WorkoutCategory::Strength,
            difficulty: Difficulty::Beginner,
            duration: 15,
            exercises: vec![
                Exercise::timed("Exercise 1", 30, 10),
                Exercise::counted("Exercise 2", 12, 15),
            ],
        }
    }

    #[test]
    fn test_reads_do_not_seed() {
        let store = FitnessStore::new(MemoryStore::new());
        assert!(store.workouts().unwrap().is_empty());
        assert!(store.inner().keys().unwrap().is_empty());
    }

    #[test]
    fn test_seed_defaults_once() {
        let store = FitnessStore::new(MemoryStore::new());
        assert!(store.seed_defaults().unwrap());
        assert!(!store.seed_defaults().unwrap());
        assert_eq!(store.workouts().unwrap().len(), default_workouts().len());
    }

    #[test]
    fn test_seed_keeps_user_library() {
        let store = FitnessStore::new(MemoryStore::new());
        store.inner().put_json::<Vec<Workout>>(keys::WORKOUTS, &vec![]).unwrap();
        assert!(!store.seed_defaults().unwrap());
        assert!(store.workouts().unwrap().is_empty());
    }

    #[test]
    fn test_add_custom_workout() {
        let store = seeded();
        let created = store
            .add_custom_workout(draft("Test Workout"), "2026-01-10T07:00:00.000Z")
            .unwrap();

        assert!(created.id.starts_with("custom-"));
        assert!(created.is_custom);
        assert_eq!(created.created_at.as_deref(), Some("2026-01-10T07:00:00.000Z"));
        assert_eq!(created.category, "strength");
        assert_eq!(created.exercises.len(), 2);

        let library = store.workouts().unwrap();
        assert_eq!(library.len(), default_workouts().len() + 1);
        assert_eq!(store.workout(&created.id).unwrap(), created);

        // Logging a custom workout uses its category for the estimate
        let done = store
            .record_workout(&created.id, 10, "2026-01-10T08:00:00Z")
            .unwrap();
        assert_eq!(done.calories_burned, 80);
        assert_eq!(done.exercises, 2);
    }

    #[test]
    fn test_add_custom_workout_validation() {
        let store = seeded();
        assert!(matches!(
            store.add_custom_workout(draft("   "), "2026-01-10T07:00:00Z"),
            Err(Error::Validation(_))
        ));
        let mut zero = draft("Zero");
        zero.duration = 0;
        assert!(matches!(
            store.add_custom_workout(zero, "2026-01-10T07:00:00Z"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            store.add_custom_workout(draft("Ok"), "soon"),
            Err(Error::InvalidDate(_))
        ));
        assert_eq!(store.workouts().unwrap().len(), default_workouts().len());
    }

    #[test]
    fn test_update_custom_workout() {
        let store = seeded();
        let created = store
            .add_custom_workout(draft("Original Name"), "2026-01-10T07:00:00Z")
            .unwrap();

        let updated = store
            .update_workout(
                &created.id,
                WorkoutUpdate {
                    name: Some("Updated Name".to_string()),
                    description: Some("Updated Description".to_string()),
                    category: Some(WorkoutCategory::Hiit),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Updated Name");
        assert_eq!(updated.description, "Updated Description");
        assert_eq!(updated.category, "hiit");
        assert_eq!(updated.duration, 15);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(store.workout(&created.id).unwrap(), updated);
    }

    #[test]
    fn test_default_workouts_are_read_only() {
        let store = seeded();
        let update = WorkoutUpdate {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            store.update_workout("morning-hiit", update.clone()),
            Err(Error::DefaultWorkout(_))
        ));
        assert!(matches!(
            store.delete_workout("morning-hiit", "2026-01-10T07:00:00Z"),
            Err(Error::DefaultWorkout(_))
        ));
        assert!(matches!(
            store.update_workout("non-existent-id", update),
            Err(Error::WorkoutNotFound(_))
        ));
        assert!(matches!(
            store.delete_workout("non-existent-id", "2026-01-10T07:00:00Z"),
            Err(Error::WorkoutNotFound(_))
        ));
        assert_eq!(store.workout("morning-hiit").unwrap().name, "Morning HIIT");
    }

    #[test]
    fn test_delete_moves_to_trash_and_restore() {
        let store = seeded();
        let created = store
            .add_custom_workout(draft("To Delete"), "2026-01-01T07:00:00Z")
            .unwrap();

        let deleted = store
            .delete_workout(&created.id, "2026-01-10T09:00:00Z")
            .unwrap();
        assert_eq!(deleted.expires_at, day("2026-02-09"));
        assert!(store.workout(&created.id).is_err());
        assert_eq!(store.trash(day("2026-01-10")).unwrap(), vec![deleted]);

        let restored = store.restore_workout(&created.id, day("2026-01-20")).unwrap();
        assert_eq!(restored, created);
        assert_eq!(store.workout(&created.id).unwrap(), created);
        assert!(store.deleted_workouts().unwrap().is_empty());
        assert!(store.restore_workout(&created.id, day("2026-01-20")).is_err());
    }

    #[test]
    fn test_expired_trash_cannot_be_restored() {
        let store = seeded();
        let created = store
            .add_custom_workout(draft("Old"), "2026-01-01T07:00:00Z")
            .unwrap();
        store.delete_workout(&created.id, "2026-01-01T09:00:00Z").unwrap();

        let last_day = day("2026-01-31");
        assert_eq!(store.trash(last_day).unwrap().len(), 1);
        assert!(store.trash(last_day.succ()).unwrap().is_empty());
        assert!(matches!(
            store.restore_workout(&created.id, last_day.succ()),
            Err(Error::WorkoutNotFound(_))
        ));

        assert_eq!(store.purge_expired_trash(last_day).unwrap(), 0);
        assert_eq!(store.purge_expired_trash(last_day.succ()).unwrap(), 1);
        assert!(store.deleted_workouts().unwrap().is_empty());
    }

    #[test]
    fn test_permanent_delete_and_empty_trash() {
        let store = seeded();
        let a = store.add_custom_workout(draft("A"), "2026-01-01T07:00:00Z").unwrap();
        let b = store.add_custom_workout(draft("B"), "2026-01-01T07:00:00Z").unwrap();
        let c = store.add_custom_workout(draft("C"), "2026-01-01T07:00:00Z").unwrap();
        for w in [&a, &b, &c] {
            store.delete_workout(&w.id, "2026-01-02T07:00:00Z").unwrap();
        }

        let removed = store.permanently_delete_workout(&a.id).unwrap();
        assert_eq!(removed.workout, a);
        assert!(store.permanently_delete_workout(&a.id).is_err());
        assert_eq!(store.deleted_workouts().unwrap().len(), 2);

        assert_eq!(store.empty_trash().unwrap(), 2);
        assert!(store.deleted_workouts().unwrap().is_empty());
        assert_eq!(store.workouts().unwrap().len(), default_workouts().len());
    }

    #[test]
    fn test_record_workout_estimates_calories() {
        let store = seeded();
        let done = store
            .record_workout("morning-hiit", 20, "2026-01-10T07:00:00.000Z")
            .unwrap();
        assert_eq!(done.workout_name, "Morning HIIT");
        assert_eq!(done.calories_burned, 240);
        assert_eq!(done.exercises, 5);

        let stretch = store
            .record_workout("evening-stretch", 20, "2026-01-10T21:00:00.000Z")
            .unwrap();
        assert_eq!(stretch.calories_burned, 100);

        assert_eq!(store.completed_workouts().unwrap().len(), 2);
    }

    #[test]
    fn test_record_workout_errors() {
        let store = seeded();
        assert!(matches!(
            store.record_workout("nope", 20, "2026-01-10T07:00:00Z"),
            Err(Error::WorkoutNotFound(_))
        ));
        assert!(matches!(
            store.record_workout("morning-hiit", 20, "yesterday"),
            Err(Error::InvalidDate(_))
        ));
        assert!(store.completed_workouts().unwrap().is_empty());
    }

    #[test]
    fn test_delete_completed_workout() {
        let store = seeded();
        let done = store
            .record_workout("core-crusher", 15, "2026-01-10T07:00:00Z")
            .unwrap();
        let removed = store.delete_completed_workout(&done.id).unwrap();
        assert_eq!(removed, done);
        assert!(store.completed_workouts().unwrap().is_empty());
        assert!(store.delete_completed_workout(&done.id).is_err());
    }

    #[test]
    fn test_check_in_persists_once_per_day() {
        let store = seeded();
        let today = day("2026-01-10");

        let (first, _) = store.check_in(today).unwrap();
        assert_eq!(first, CheckInOutcome::CheckedIn { current_streak: 1 });
        let (second, data) = store.check_in(today).unwrap();
        assert_eq!(second, CheckInOutcome::AlreadyCheckedIn);
        assert_eq!(data.check_ins.len(), 1);

        let (_, data) = store.check_in(today.succ()).unwrap();
        assert_eq!(data.current_streak, 2);
        assert_eq!(store.check_in_data().unwrap(), data);
    }

    #[test]
    fn test_add_weight_validation() {
        let store = seeded();
        assert!(matches!(
            store.add_weight(-3.0, "2026-01-10", None),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            store.add_weight(f64::NAN, "2026-01-10", None),
            Err(Error::Validation(_))
        ));
        let entry = store
            .add_weight(81.2, "2026-01-10T08:00:00Z", Some(" after run "))
            .unwrap();
        assert_eq!(entry.note.as_deref(), Some("after run"));
        let blank = store.add_weight(81.0, "2026-01-11T08:00:00Z", Some("  ")).unwrap();
        assert!(blank.note.is_none());
        assert_eq!(store.weight_entries().unwrap().len(), 2);
    }

    #[test]
    fn test_weekly_goal() {
        let store = seeded();
        assert_eq!(store.user_profile().unwrap().weekly_goal, 3);
        assert!(store.inner().get_raw(keys::USER_PROFILE).unwrap().is_none());

        assert_eq!(store.set_weekly_goal(5).unwrap().weekly_goal, 5);
        assert_eq!(store.user_profile().unwrap().weekly_goal, 5);

        assert!(matches!(store.set_weekly_goal(0), Err(Error::Validation(_))));
        assert!(matches!(store.set_weekly_goal(15), Err(Error::Validation(_))));
        assert_eq!(store.user_profile().unwrap().weekly_goal, 5);
    }

    #[test]
    fn test_backup_round_trip_between_stores() {
        let source = seeded();
        source
            .record_workout("cardio-blast", 25, "2026-01-10T07:00:00Z")
            .unwrap();
        source.check_in(day("2026-01-10")).unwrap();
        source.add_weight(80.0, "2026-01-10T07:00:00Z", None).unwrap();
        source.set_weekly_goal(4).unwrap();
        let custom = source
            .add_custom_workout(draft("Trashed"), "2026-01-10T07:00:00Z")
            .unwrap();
        source.delete_workout(&custom.id, "2026-01-10T08:00:00Z").unwrap();

        let backup = source.export_backup("2026-01-10T12:00:00.000Z").unwrap();
        let json = backup.to_json_pretty().unwrap();

        let target = FitnessStore::new(MemoryStore::new());
        target.import_backup(&Backup::from_json(&json).unwrap()).unwrap();

        assert_eq!(target.export_backup("2026-01-10T12:00:00.000Z").unwrap(), backup);
        assert_eq!(target.user_profile().unwrap().weekly_goal, 4);
        assert_eq!(target.deleted_workouts().unwrap().len(), 1);
    }

    #[test]
    fn test_import_keeps_collections_missing_from_backup() {
        let store = seeded();
        store.add_weight(80.0, "2026-01-10T07:00:00Z", None).unwrap();

        let raw = r#"{"version": "1.0", "exportDate": "2026-01-12T00:00:00Z", "data": {
            "completed_workouts": []
        }}"#;
        store.import_backup(&Backup::from_json(raw).unwrap()).unwrap();

        assert_eq!(store.weight_entries().unwrap().len(), 1);
        assert_eq!(store.workouts().unwrap().len(), default_workouts().len());
    }

    #[test]
    fn test_import_rejects_out_of_range_goal() {
        let store = seeded();
        let raw = r#"{"version": "1.0", "exportDate": "2026-01-12T00:00:00Z", "data": {
            "user_profile": {"weeklyGoal": 40}
        }}"#;
        assert!(matches!(
            store.import_backup(&Backup::from_json(raw).unwrap()),
            Err(Error::Validation(_))
        ));
    }
}
