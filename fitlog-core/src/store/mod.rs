//! Persistence for fitlog
//!
//! Everything is stored as JSON documents under a handful of keys through
//! the [`KeyValueStore`] interface. [`crate::Database`] is the SQLite
//! implementation; [`MemoryStore`] keeps documents in a map for tests.
//!
//! [`FitnessStore`] is the typed repository on top. The statistics engine
//! never touches it: callers load the log here and pass plain values to
//! [`crate::stats`].

pub mod backup;
pub mod fitness;
pub mod seed;

pub use backup::{Backup, BackupData, BACKUP_VERSION};
pub use fitness::{FitnessStore, TRASH_RETENTION_DAYS};
pub use seed::default_workouts;

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Storage keys, shared with the backup `data` object
pub mod keys {
    pub const USER_PROFILE: &str = "user_profile";
    pub const CHECK_INS: &str = "check_ins";
    pub const COMPLETED_WORKOUTS: &str = "completed_workouts";
    pub const WORKOUTS: &str = "workouts";
    pub const WEIGHT_ENTRIES: &str = "weight_entries";
    pub const DELETED_WORKOUTS: &str = "deleted_workouts";
}

/// Minimal get/put document store.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    fn put_raw(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// All keys, sorted
    fn keys(&self) -> Result<Vec<String>>;

    /// Read and deserialize a document.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write a document.
    fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries().keys().cloned().collect())
    }
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        (**self).get_raw(key)
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        (**self).put_raw(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_json_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get_json::<Vec<u32>>("nums").unwrap(), None);

        store.put_json("nums", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(store.get_json::<Vec<u32>>("nums").unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(store.keys().unwrap(), vec!["nums"]);
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let store = MemoryStore::new();
        store.put_raw("nums", "{not json").unwrap();
        assert!(matches!(
            store.get_json::<Vec<u32>>("nums"),
            Err(crate::Error::Json(_))
        ));
    }
}
