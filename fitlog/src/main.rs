//! fitlog - personal workout log
//!
//! Log workouts and daily check-ins, then see streaks, activity charts and
//! totals. All data stays on this machine.
//!
//! Uses XDG Base Directory specification for file locations:
//! - Database: $XDG_DATA_HOME/fitlog/data.db (~/.local/share/fitlog/data.db)
//! - Config: $XDG_CONFIG_HOME/fitlog/config.toml (~/.config/fitlog/config.toml)
//! - Logs: $XDG_STATE_HOME/fitlog/fitlog.YYYY-MM-DD.log

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitlog_core::checkin::CheckInOutcome;
use fitlog_core::clock::{Clock, FixedClock, SystemClock};
use fitlog_core::config::StatsConfig;
use fitlog_core::format::{format_calories, format_duration};
use fitlog_core::health::{self, BmiCategory};
use fitlog_core::logging;
use fitlog_core::stats::{self, DailyActivity, WeeklyProgress};
use fitlog_core::store::{Backup, FitnessStore, TRASH_RETENTION_DAYS};
use fitlog_core::{
    Config, Database, Day, Difficulty, Exercise, WorkoutCategory, WorkoutDraft, WorkoutUpdate,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "fitlog")]
#[command(about = "Personal workout log with streaks and progress statistics")]
#[command(version)]
struct Args {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE")]
    as_of: Option<Day>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List workouts in the library
    Library,

    /// Create, edit or delete custom workouts
    Workout {
        #[command(subcommand)]
        command: WorkoutCommand,
    },

    /// Deleted custom workouts
    Trash {
        #[command(subcommand)]
        command: TrashCommand,
    },

    /// Log a completed workout
    Log {
        /// Workout id from the library
        workout_id: String,

        /// Minutes spent (default: the workout's planned duration)
        #[arg(short, long)]
        duration: Option<u32>,

        /// Day the workout happened (default: today)
        #[arg(long, value_name = "DATE")]
        date: Option<Day>,
    },

    /// Show completed workouts, newest first
    History {
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Delete a completed workout by id
    Delete { id: String },

    /// Check in for today
    Checkin,

    /// Show totals, streaks and progress toward the weekly goal
    Stats,

    /// Show or set the weekly workout goal
    Goal {
        /// New goal in workouts per week (1-14)
        workouts: Option<u32>,
    },

    /// Show workout and check-in streaks
    Streak,

    /// Show daily activity for the last N days
    Activity {
        /// Number of days (default: from config)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Show weekly progress for the last N weeks
    Weekly {
        /// Number of weeks (default: from config)
        #[arg(short, long)]
        weeks: Option<u32>,
    },

    /// Record or show body weight
    Weight {
        #[command(subcommand)]
        command: WeightCommand,
    },

    /// Body-mass index (and BMR when age and sex are configured)
    Bmi {
        /// Weight in kg (default: latest logged weight)
        weight_kg: Option<f64>,

        /// Height in cm (default: profile.height_cm)
        #[arg(long)]
        height: Option<f64>,
    },

    /// Write all data to a JSON backup file
    Export { path: PathBuf },

    /// Replace stored data with the collections in a JSON backup file
    Import { path: PathBuf },

    /// Show file locations and settings
    Status,
}

#[derive(Subcommand, Debug)]
enum WorkoutCommand {
    /// Add a custom workout
    Add {
        name: String,

        #[arg(short, long)]
        category: WorkoutCategory,

        #[arg(long, default_value = "beginner")]
        difficulty: Difficulty,

        /// Planned minutes
        #[arg(short, long)]
        duration: u32,

        #[arg(long, default_value = "")]
        description: String,

        /// NAME:SECONDS[:REST] or NAME:REPSx[:REST], repeatable
        #[arg(short, long = "exercise", value_parser = parse_exercise)]
        exercises: Vec<Exercise>,
    },

    /// Change fields of a custom workout
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        category: Option<WorkoutCategory>,

        #[arg(long)]
        difficulty: Option<Difficulty>,

        #[arg(short, long)]
        duration: Option<u32>,

        #[arg(long)]
        description: Option<String>,

        /// Replaces the exercise list when given
        #[arg(short, long = "exercise", value_parser = parse_exercise)]
        exercises: Vec<Exercise>,
    },

    /// Move a custom workout to the trash
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum TrashCommand {
    /// List restorable workouts
    List,

    /// Put a workout back into the library
    Restore { id: String },

    /// Remove one workout from the trash for good
    Delete { id: String },

    /// Remove everything from the trash
    Empty,
}

#[derive(Subcommand, Debug)]
enum WeightCommand {
    /// Log a weight in kg
    Add {
        weight_kg: f64,

        #[arg(long, value_name = "DATE")]
        date: Option<Day>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Show recent weights and the trend
    Show {
        /// Number of days (default: from config)
        #[arg(short, long)]
        days: Option<u32>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = fitlog_core::logging::init(&config.logging).ok();

    let db = Database::open(&Config::database_path()).context("failed to open database")?;
    db.migrate().context("failed to run migrations")?;
    let store = FitnessStore::new(db);
    store
        .seed_defaults()
        .context("failed to seed workout library")?;

    let clock: Box<dyn Clock> = match args.as_of {
        Some(day) => Box::new(FixedClock::new(day)),
        None => Box::new(SystemClock),
    };

    let ctx = Ctx {
        store,
        config,
        clock,
        json: args.json,
    };

    match args.command {
        Command::Library => ctx.cmd_library(),
        Command::Workout { command } => match command {
            WorkoutCommand::Add {
                name,
                category,
                difficulty,
                duration,
                description,
                exercises,
            } => ctx.cmd_workout_add(WorkoutDraft {
                name,
                description,
                category,
                difficulty,
                duration,
                exercises,
            }),
            WorkoutCommand::Edit {
                id,
                name,
                category,
                difficulty,
                duration,
                description,
                exercises,
            } => ctx.cmd_workout_edit(
                &id,
                WorkoutUpdate {
                    name,
                    description,
                    category,
                    difficulty,
                    duration,
                    exercises: (!exercises.is_empty()).then_some(exercises),
                },
            ),
            WorkoutCommand::Delete { id } => ctx.cmd_workout_delete(&id),
        },
        Command::Trash { command } => match command {
            TrashCommand::List => ctx.cmd_trash_list(),
            TrashCommand::Restore { id } => ctx.cmd_trash_restore(&id),
            TrashCommand::Delete { id } => ctx.cmd_trash_delete(&id),
            TrashCommand::Empty => ctx.cmd_trash_empty(),
        },
        Command::Log {
            workout_id,
            duration,
            date,
        } => ctx.cmd_log(&workout_id, duration, date),
        Command::History { limit } => ctx.cmd_history(limit),
        Command::Delete { id } => ctx.cmd_delete(&id),
        Command::Checkin => ctx.cmd_checkin(),
        Command::Stats => ctx.cmd_stats(),
        Command::Goal { workouts } => ctx.cmd_goal(workouts),
        Command::Streak => ctx.cmd_streak(),
        Command::Activity { days } => ctx.cmd_activity(days),
        Command::Weekly { weeks } => ctx.cmd_weekly(weeks),
        Command::Weight { command } => match command {
            WeightCommand::Add {
                weight_kg,
                date,
                note,
            } => ctx.cmd_weight_add(weight_kg, date, note.as_deref()),
            WeightCommand::Show { days } => ctx.cmd_weight_show(days),
        },
        Command::Bmi { weight_kg, height } => ctx.cmd_bmi(weight_kg, height),
        Command::Export { path } => ctx.cmd_export(&path),
        Command::Import { path } => ctx.cmd_import(&path),
        Command::Status => ctx.cmd_status(),
    }
}

struct Ctx {
    store: FitnessStore<Database>,
    config: Config,
    clock: Box<dyn Clock>,
    json: bool,
}

impl Ctx {
    fn today(&self) -> Day {
        self.clock.today()
    }

    /// Timestamp for a new record on `date`, or now.
    fn timestamp_for(&self, date: Option<Day>) -> String {
        match date {
            Some(day) => FixedClock::new(day).timestamp(),
            None => self.clock.timestamp(),
        }
    }

    fn print_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn cmd_library(&self) -> Result<()> {
        let workouts = self.store.workouts()?;
        if self.json {
            return self.print_json(&workouts);
        }

        println!("WORKOUT LIBRARY");
        for workout in &workouts {
            println!(
                "   {:<20} {:<20} {:<12} {:<13} {:>8}{}",
                workout.id,
                workout.name,
                workout.category,
                workout.difficulty.as_str(),
                format_duration(workout.duration),
                if workout.is_custom { "  (custom)" } else { "" }
            );
        }
        Ok(())
    }

    fn cmd_workout_add(&self, draft: WorkoutDraft) -> Result<()> {
        let workout = self
            .store
            .add_custom_workout(draft, &self.clock.timestamp())
            .context("failed to add workout")?;
        if self.json {
            return self.print_json(&workout);
        }
        println!("Added {} ({})", workout.name, workout.id);
        Ok(())
    }

    fn cmd_workout_edit(&self, id: &str, update: WorkoutUpdate) -> Result<()> {
        let workout = self
            .store
            .update_workout(id, update)
            .with_context(|| format!("failed to edit workout {}", id))?;
        if self.json {
            return self.print_json(&workout);
        }
        println!("Updated {} ({})", workout.name, workout.id);
        Ok(())
    }

    fn cmd_workout_delete(&self, id: &str) -> Result<()> {
        let deleted = self
            .store
            .delete_workout(id, &self.clock.timestamp())
            .with_context(|| format!("failed to delete workout {}", id))?;
        if self.json {
            return self.print_json(&deleted);
        }
        println!(
            "Moved {} to the trash; restorable until {}",
            deleted.workout.name, deleted.expires_at
        );
        Ok(())
    }

    fn cmd_trash_list(&self) -> Result<()> {
        let today = self.today();
        self.store.purge_expired_trash(today)?;
        let trash = self.store.trash(today)?;

        if self.json {
            return self.print_json(&trash);
        }
        if trash.is_empty() {
            println!("Trash is empty.");
            return Ok(());
        }

        println!("TRASH (kept {} days)", TRASH_RETENTION_DAYS);
        for entry in &trash {
            let remaining = entry.days_remaining(today);
            println!(
                "   {:<40} {:<20} {} day{} left",
                entry.workout.id,
                entry.workout.name,
                remaining,
                if remaining == 1 { "" } else { "s" }
            );
        }
        Ok(())
    }

    fn cmd_trash_restore(&self, id: &str) -> Result<()> {
        let workout = self
            .store
            .restore_workout(id, self.today())
            .with_context(|| format!("failed to restore workout {}", id))?;
        if self.json {
            return self.print_json(&workout);
        }
        println!("Restored {} ({})", workout.name, workout.id);
        Ok(())
    }

    fn cmd_trash_delete(&self, id: &str) -> Result<()> {
        let removed = self
            .store
            .permanently_delete_workout(id)
            .with_context(|| format!("failed to delete workout {}", id))?;
        if self.json {
            return self.print_json(&removed);
        }
        println!("Permanently deleted {}", removed.workout.name);
        Ok(())
    }

    fn cmd_trash_empty(&self) -> Result<()> {
        let count = self.store.empty_trash()?;
        if self.json {
            return self.print_json(&serde_json::json!({ "removed": count }));
        }
        println!("Removed {} workout{} from the trash", count, if count == 1 { "" } else { "s" });
        Ok(())
    }

    fn cmd_log(&self, workout_id: &str, duration: Option<u32>, date: Option<Day>) -> Result<()> {
        let template = self
            .store
            .workout(workout_id)
            .with_context(|| format!("unknown workout '{}', see `fitlog library`", workout_id))?;
        let minutes = duration.unwrap_or(template.duration);
        let completed = self
            .store
            .record_workout(workout_id, minutes, &self.timestamp_for(date))
            .context("failed to record workout")?;

        if self.json {
            return self.print_json(&completed);
        }
        println!(
            "Logged {}: {}, {} kcal",
            completed.workout_name,
            format_duration(completed.duration),
            format_calories(completed.calories_burned)
        );
        Ok(())
    }

    fn cmd_history(&self, limit: usize) -> Result<()> {
        let mut log = self.store.completed_workouts()?;
        // Newest first; malformed dates sink to the bottom
        log.sort_by(|a, b| b.day().cmp(&a.day()).then_with(|| b.date.cmp(&a.date)));
        log.truncate(limit);

        if self.json {
            return self.print_json(&log);
        }
        if log.is_empty() {
            println!("No workouts logged yet.");
            return Ok(());
        }

        println!("HISTORY");
        for workout in &log {
            let date = workout
                .day()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "??????????".to_string());
            println!(
                "   {}  {:<20} {:>8} {:>6} kcal  {}",
                date,
                workout.workout_name,
                format_duration(workout.duration),
                format_calories(workout.calories_burned),
                workout.id
            );
        }
        Ok(())
    }

    fn cmd_delete(&self, id: &str) -> Result<()> {
        let removed = self
            .store
            .delete_completed_workout(id)
            .with_context(|| format!("failed to delete workout {}", id))?;
        if self.json {
            return self.print_json(&removed);
        }
        println!("Deleted {} from {}", removed.workout_name, removed.date);
        Ok(())
    }

    fn cmd_checkin(&self) -> Result<()> {
        let today = self.today();
        let (outcome, data) = self.store.check_in(today).context("failed to check in")?;

        if self.json {
            return self.print_json(&serde_json::json!({
                "checkedIn": matches!(outcome, CheckInOutcome::CheckedIn { .. }),
                "date": today,
                "currentStreak": data.current_streak,
                "longestStreak": data.longest_streak,
                "totalCheckIns": data.check_ins.len(),
            }));
        }

        match outcome {
            CheckInOutcome::CheckedIn { current_streak } => {
                println!("Checked in for {}.", today);
                println!("   Streak: {}", days_label(current_streak));
            }
            CheckInOutcome::AlreadyCheckedIn => {
                println!("Already checked in for {}.", today);
                println!("   Streak: {}", days_label(data.current_streak));
            }
        }
        println!("   Best:   {}", days_label(data.longest_streak));
        Ok(())
    }

    fn cmd_stats(&self) -> Result<()> {
        let today = self.today();
        let log = self.store.completed_workouts()?;
        let streak = stats::workout_streak(&log, today);
        let summary = stats::workout_stats(&log, streak.current_streak, streak.longest_streak);
        let check_ins = self.store.check_in_data()?;
        let goal = self.store.user_profile()?.weekly_goal;
        let this_week = stats::weekly_progress(&log, 1, today)
            .first()
            .map_or(0, |w| w.workouts);
        let check_ins_this_week = check_ins.count_between(today.week_start(), today);

        if self.json {
            return self.print_json(&serde_json::json!({
                "stats": summary,
                "checkIns": {
                    "total": check_ins.check_ins.len(),
                    "currentStreak": check_ins.active_streak(today),
                    "longestStreak": check_ins.longest_streak,
                },
                "goal": {
                    "weeklyGoal": goal,
                    "workoutsThisWeek": this_week,
                    "checkInsThisWeek": check_ins_this_week,
                },
            }));
        }

        println!("SUMMARY");
        println!(
            "   Workouts: {:<10} Time:     {}",
            summary.total_workouts,
            format_duration(summary.total_minutes)
        );
        println!(
            "   Calories: {:<10} Per week: {:.1}",
            format_calories(summary.total_calories),
            summary.average_workouts_per_week
        );
        println!();
        println!("STREAKS");
        println!("   Current:  {}", days_label(summary.current_streak));
        println!("   Longest:  {}", days_label(summary.longest_streak));
        println!(
            "   Check-ins: {} (streak {})",
            check_ins.check_ins.len(),
            days_label(check_ins.active_streak(today))
        );
        println!();
        println!("THIS WEEK");
        println!(
            "   Goal:      {}/{} workouts{}",
            this_week,
            goal,
            if this_week >= goal { " (reached)" } else { "" }
        );
        println!("   Check-ins: {}", check_ins_this_week);
        Ok(())
    }

    fn cmd_goal(&self, workouts: Option<u32>) -> Result<()> {
        let profile = match workouts {
            Some(goal) => self
                .store
                .set_weekly_goal(goal)
                .context("failed to set weekly goal")?,
            None => self.store.user_profile()?,
        };
        if self.json {
            return self.print_json(&serde_json::json!({ "weeklyGoal": profile.weekly_goal }));
        }
        println!("Weekly goal: {} workouts", profile.weekly_goal);
        Ok(())
    }

    fn cmd_streak(&self) -> Result<()> {
        let today = self.today();
        let log = self.store.completed_workouts()?;
        let streak = stats::workout_streak(&log, today);

        let mut days: Vec<Day> = log.iter().filter_map(|w| w.day()).collect();
        days.sort();
        days.dedup();
        let best_run = stats::longest_run(&days);

        let check_ins = self.store.check_in_data()?;
        let check_in_streak = stats::streak_from_days(check_ins.days(), today);

        if self.json {
            return self.print_json(&serde_json::json!({
                "workouts": streak,
                "longestRun": best_run,
                "checkIns": check_in_streak,
            }));
        }

        println!("WORKOUT STREAK");
        println!("   Current:  {}", days_label(streak.current_streak));
        match best_run {
            Some(run) => println!(
                "   Longest:  {} ({} - {})",
                days_label(run.days),
                run.start.short_label(),
                run.end.short_label()
            ),
            None => println!("   Longest:  {}", days_label(0)),
        }
        println!(
            "   Active:   {} day{}",
            days.len(),
            if days.len() == 1 { "" } else { "s" }
        );
        println!();
        println!("CHECK-IN STREAK");
        println!("   Current:  {}", days_label(check_in_streak.current_streak));
        println!("   Longest:  {}", days_label(check_in_streak.longest_streak));
        Ok(())
    }

    fn cmd_activity(&self, days: Option<u32>) -> Result<()> {
        let days = days.unwrap_or(self.config.stats.activity_days);
        StatsConfig {
            activity_days: days,
            ..self.config.stats.clone()
        }
        .validate()
        .context("invalid --days")?;
        let log = self.store.completed_workouts()?;
        let activity = stats::last_n_days_activity(&log, days, self.today());

        if self.json {
            return self.print_json(&activity);
        }

        println!("ACTIVITY (last {})", days_label(days));
        let max_minutes = activity.iter().map(|d| d.minutes).max().unwrap_or(0);
        for entry in &activity {
            print_activity_row(entry, max_minutes);
        }
        Ok(())
    }

    fn cmd_weekly(&self, weeks: Option<u32>) -> Result<()> {
        let weeks = weeks.unwrap_or(self.config.stats.weekly_weeks);
        StatsConfig {
            weekly_weeks: weeks,
            ..self.config.stats.clone()
        }
        .validate()
        .context("invalid --weeks")?;
        let log = self.store.completed_workouts()?;
        let progress = stats::weekly_progress(&log, weeks, self.today());

        if self.json {
            return self.print_json(&progress);
        }

        println!("WEEKLY PROGRESS");
        for week in &progress {
            print_week_row(week);
        }
        Ok(())
    }

    fn cmd_weight_add(&self, weight_kg: f64, date: Option<Day>, note: Option<&str>) -> Result<()> {
        let entry = self
            .store
            .add_weight(weight_kg, &self.timestamp_for(date), note)
            .context("failed to record weight")?;
        if self.json {
            return self.print_json(&entry);
        }
        println!("Logged {:.1} kg", entry.weight_kg);
        Ok(())
    }

    fn cmd_weight_show(&self, days: Option<u32>) -> Result<()> {
        let days = days.unwrap_or(self.config.stats.weight_days);
        StatsConfig {
            weight_days: days,
            ..self.config.stats.clone()
        }
        .validate()
        .context("invalid --days")?;
        let entries = self.store.weight_entries()?;
        let trend = health::weight_trend(&entries, self.today(), days);

        if self.json {
            return self.print_json(&trend);
        }
        if trend.latest.is_none() {
            println!("No weight logged yet.");
            return Ok(());
        }

        println!("WEIGHT (last {})", days_label(days));
        for entry in &trend.entries {
            let date = entry.day().map(|d| d.to_string()).unwrap_or_default();
            match &entry.note {
                Some(note) => println!("   {}  {:>6.1} kg  {}", date, entry.weight_kg, note),
                None => println!("   {}  {:>6.1} kg", date, entry.weight_kg),
            }
        }
        if let Some(change) = trend.change_kg {
            println!("   Change: {:+.1} kg", change);
        }
        Ok(())
    }

    fn cmd_bmi(&self, weight_kg: Option<f64>, height: Option<f64>) -> Result<()> {
        let weight_kg = match weight_kg {
            Some(w) => w,
            None => {
                let entries = self.store.weight_entries()?;
                health::weight_trend(&entries, self.today(), 1)
                    .latest
                    .map(|e| e.weight_kg)
                    .context("no weight given and none logged; pass a weight in kg")?
            }
        };
        let profile = self.config.profile.as_ref();
        let height_cm = height
            .or_else(|| profile.map(|p| p.height_cm))
            .context("no height given; pass --height or set profile.height_cm in config")?;

        let bmi = health::bmi(weight_kg, height_cm).context("height must be positive")?;
        let category = BmiCategory::from_bmi(bmi);
        let bmr = profile.and_then(|p| match (p.age, p.sex) {
            (Some(age), Some(sex)) => Some(health::bmr(weight_kg, height_cm, age, sex)),
            _ => None,
        });

        if self.json {
            return self.print_json(&serde_json::json!({
                "weightKg": weight_kg,
                "heightCm": height_cm,
                "bmi": (bmi * 10.0).round() / 10.0,
                "category": category,
                "bmr": bmr.map(|v| v.round()),
            }));
        }

        println!("BMI: {:.1} ({})", bmi, category.label());
        if let Some(bmr) = bmr {
            println!("BMR: {:.0} kcal/day", bmr);
        }
        Ok(())
    }

    fn cmd_export(&self, path: &Path) -> Result<()> {
        let backup = self.store.export_backup(&self.clock.timestamp())?;
        std::fs::write(path, backup.to_json_pretty()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Exported backup");
        println!(
            "Exported {} workouts and {} check-ins to {}",
            backup.completed_count(),
            backup.check_in_count(),
            path.display()
        );
        Ok(())
    }

    fn cmd_import(&self, path: &Path) -> Result<()> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let backup = Backup::from_json(&raw).context("invalid backup file")?;
        self.store.import_backup(&backup)?;
        println!(
            "Imported {} workouts and {} check-ins from {}",
            backup.completed_count(),
            backup.check_in_count(),
            path.display()
        );
        Ok(())
    }

    fn cmd_status(&self) -> Result<()> {
        let profile = self.store.user_profile()?;
        let log_file = logging::log_file_path(Day::from(chrono::Utc::now().date_naive()));

        if self.json {
            return self.print_json(&serde_json::json!({
                "configPath": Config::config_path(),
                "databasePath": Config::database_path(),
                "logDir": Config::state_dir(),
                "logFile": log_file,
                "weeklyGoal": profile.weekly_goal,
                "activityDays": self.config.stats.activity_days,
                "weeklyWeeks": self.config.stats.weekly_weeks,
                "weightDays": self.config.stats.weight_days,
            }));
        }

        println!("fitlog status");
        println!("=============");
        println!();
        println!("Config:        {}", Config::config_path().display());
        println!("Database:      {}", Config::database_path().display());
        println!("Log dir:       {}", Config::state_dir().display());
        println!("Today's log:   {}", log_file.display());
        println!();
        println!("Weekly goal:   {} workouts", profile.weekly_goal);
        println!("Activity days: {}", self.config.stats.activity_days);
        println!("Weekly weeks:  {}", self.config.stats.weekly_weeks);
        println!("Weight days:   {}", self.config.stats.weight_days);
        Ok(())
    }
}

/// Parse `NAME:SECONDS[:REST]` or `NAME:REPSx[:REST]`.
fn parse_exercise(spec: &str) -> std::result::Result<Exercise, String> {
    let mut parts = spec.split(':').map(str::trim);
    let name = parts.next().filter(|n| !n.is_empty()).ok_or("missing exercise name")?;
    let amount = parts
        .next()
        .ok_or_else(|| format!("missing seconds or reps in '{}'", spec))?;
    let rest = match parts.next() {
        Some(r) => r
            .parse::<u32>()
            .map_err(|_| format!("invalid rest seconds '{}'", r))?,
        None => 0,
    };
    if parts.next().is_some() {
        return Err(format!("too many fields in '{}'", spec));
    }

    match amount.strip_suffix(['x', 'X']) {
        Some(reps) => reps
            .parse()
            .map(|reps| Exercise::counted(name, reps, rest))
            .map_err(|_| format!("invalid reps '{}'", amount)),
        None => amount
            .parse()
            .map(|secs| Exercise::timed(name, secs, rest))
            .map_err(|_| format!("invalid seconds '{}'", amount)),
    }
}

fn days_label(days: u32) -> String {
    format!("{} day{}", days, if days == 1 { "" } else { "s" })
}

fn bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).ceil() as usize;
    "█".repeat(filled.clamp(1, width))
}

fn print_activity_row(entry: &DailyActivity, max_minutes: u32) {
    println!(
        "   {} {}  {:<20} {:>8} {:>6} kcal",
        entry.date.naive().format("%a"),
        entry.date.short_label(),
        bar(entry.minutes, max_minutes, 20),
        format_duration(entry.minutes),
        format_calories(entry.calories)
    );
}

fn print_week_row(week: &WeeklyProgress) {
    println!(
        "   Week of {}  {:>2} workout{}  {:>8} {:>6} kcal",
        week.week_start.short_label(),
        week.workouts,
        if week.workouts == 1 { " " } else { "s" },
        format_duration(week.minutes),
        format_calories(week.calories)
    );
}
