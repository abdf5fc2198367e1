//! # fitlog-core
//!
//! Core library for fitlog - a local, single-user workout log.
//!
//! This library provides:
//! - Domain types for workouts, completed sessions, check-ins and weight
//! - A statistics engine: daily/weekly activity buckets, streaks and totals
//! - Daily check-ins with incremental streak tracking
//! - Formatters and calorie estimates
//! - Key-value storage with SQLite, default library seeding and backups
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows one way:
//! - **Stored:** JSON documents behind [`store::KeyValueStore`]
//! - **Loaded:** plain `Vec<CompletedWorkout>` / [`CheckInData`] values
//! - **Derived:** [`stats`] aggregates, recomputed on every call
//!
//! The [`stats`] functions are pure; "today" is passed in from a
//! [`clock::Clock`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitlog_core::clock::{Clock, SystemClock};
//! use fitlog_core::store::FitnessStore;
//! use fitlog_core::{stats, Config, Database};
//!
//! let db = Database::open(&Config::database_path()).expect("failed to open database");
//! db.migrate().expect("failed to run migrations");
//!
//! let store = FitnessStore::new(db);
//! store.seed_defaults().expect("failed to seed library");
//!
//! let today = SystemClock.today();
//! let log = store.completed_workouts().expect("failed to read log");
//! let streak = stats::workout_streak(&log, today);
//! let summary = stats::workout_stats(&log, streak.current_streak, streak.longest_streak);
//! println!("{} workouts so far", summary.total_workouts);
//! ```

// Re-export commonly used items at the crate root
pub use calendar::Day;
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod calendar;
pub mod checkin;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod health;
pub mod logging;
pub mod stats;
pub mod store;
pub mod types;
