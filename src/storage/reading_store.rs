//! Sled-backed per-user reading store

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::classifier;
use crate::types::{Reading, ReadingPatch, UserSettings};

use super::StorageError;

const READINGS_TREE_PREFIX: &str = "readings/";
const SETTINGS_TREE_PREFIX: &str = "settings/";
const SETTINGS_KEY: &[u8] = b"current";

/// Per-user storage usage summary.
#[derive(Debug, Clone, Serialize)]
pub struct StorageStats {
    pub readings_count: usize,
    pub readings_bytes: u64,
    pub settings_bytes: u64,
    pub total_bytes: u64,
}

/// Embedded store for readings and settings, partitioned per user.
///
/// Each user gets a `readings/<user>` tree keyed by
/// `timestamp_millis (u64 BE) ++ reading id (16 bytes)` so plain iteration
/// is chronological, and a `settings/<user>` tree with a single document.
///
/// Note: writes are not flushed individually. Sled provides durability via
/// background flushing; on crash at most the last few writes may be lost.
#[derive(Clone)]
pub struct ReadingStore {
    db: Arc<sled::Db>,
}

impl ReadingStore {
    /// Open or create the store at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(Self { db: Arc::new(db) })
    }

    fn readings_tree(&self, user_id: &str) -> Result<sled::Tree, StorageError> {
        Ok(self
            .db
            .open_tree(format!("{READINGS_TREE_PREFIX}{user_id}"))?)
    }

    fn settings_tree(&self, user_id: &str) -> Result<sled::Tree, StorageError> {
        Ok(self
            .db
            .open_tree(format!("{SETTINGS_TREE_PREFIX}{user_id}"))?)
    }

    /// Chronological key: big-endian millis then the id for uniqueness.
    fn key_for(timestamp: DateTime<Utc>, id: Uuid) -> [u8; 24] {
        let millis = u64::try_from(timestamp.timestamp_millis()).unwrap_or(0);
        let mut key = [0u8; 24];
        key[..8].copy_from_slice(&millis.to_be_bytes());
        key[8..].copy_from_slice(id.as_bytes());
        key
    }

    /// Persist a reading into the user's partition.
    pub fn save_reading(&self, user_id: &str, reading: &Reading) -> Result<(), StorageError> {
        let tree = self.readings_tree(user_id)?;
        let key = Self::key_for(reading.timestamp, reading.id);
        let value = serde_json::to_vec(reading)?;
        tree.insert(key, value)?;
        Ok(())
    }

    /// All readings for a user, oldest first.
    ///
    /// Values that fail to deserialize (from a future format change) are
    /// skipped rather than failing the whole load.
    pub fn load_readings(&self, user_id: &str) -> Result<Vec<Reading>, StorageError> {
        let tree = self.readings_tree(user_id)?;
        let mut readings = Vec::with_capacity(tree.len());

        for item in tree.iter() {
            let (_key, value) = item?;
            match serde_json::from_slice::<Reading>(&value) {
                Ok(reading) => readings.push(reading),
                Err(e) => {
                    tracing::warn!(user = user_id, error = %e, "Skipping undecodable reading");
                }
            }
        }

        Ok(readings)
    }

    /// Look up one reading by id.
    pub fn get_reading(
        &self,
        user_id: &str,
        id: Uuid,
    ) -> Result<Option<Reading>, StorageError> {
        let tree = self.readings_tree(user_id)?;
        for item in tree.iter() {
            let (key, value) = item?;
            if key.len() == 24 && &key[8..] == id.as_bytes().as_slice() {
                return Ok(Some(serde_json::from_slice(&value)?));
            }
        }
        Ok(None)
    }

    /// Merge a partial update into a stored reading.
    ///
    /// Re-classifies when the value or unit changed so the stored status
    /// stays equal to what the classifier would produce at save time, and
    /// re-keys when the timestamp changed.
    pub fn update_reading(
        &self,
        user_id: &str,
        id: Uuid,
        patch: &ReadingPatch,
    ) -> Result<Reading, StorageError> {
        let mut reading = self
            .get_reading(user_id, id)?
            .ok_or(StorageError::NotFound(id))?;

        let old_key = Self::key_for(reading.timestamp, reading.id);

        let reclassify = patch.value.is_some() || patch.unit.is_some();
        if let Some(value) = patch.value {
            reading.value = value;
        }
        if let Some(unit) = &patch.unit {
            reading.unit = unit.clone();
        }
        if let Some(timestamp) = patch.timestamp {
            reading.timestamp = timestamp;
        }
        if let Some(notes) = &patch.notes {
            reading.notes = Some(notes.clone());
        }
        if reclassify {
            reading.status =
                classifier::classify(reading.vital_type, &reading.value, &reading.unit);
        }

        let tree = self.readings_tree(user_id)?;
        let new_key = Self::key_for(reading.timestamp, reading.id);
        if new_key != old_key {
            tree.remove(old_key)?;
        }
        tree.insert(new_key, serde_json::to_vec(&reading)?)?;

        Ok(reading)
    }

    /// Delete a reading. Returns false when the id was absent.
    pub fn delete_reading(&self, user_id: &str, id: Uuid) -> Result<bool, StorageError> {
        let tree = self.readings_tree(user_id)?;
        for item in tree.iter() {
            let (key, _value) = item?;
            if key.len() == 24 && &key[8..] == id.as_bytes().as_slice() {
                tree.remove(key)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Delete readings older than the cutoff. Returns the removed count.
    pub fn cleanup_before(
        &self,
        user_id: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<usize, StorageError> {
        let tree = self.readings_tree(user_id)?;
        let cutoff_millis = u64::try_from(cutoff.timestamp_millis()).unwrap_or(0);
        let mut deleted = 0;

        // Keys sort by timestamp, so everything before the cutoff is a
        // contiguous prefix of the tree.
        let keys_to_delete: Vec<Vec<u8>> = tree
            .range(..cutoff_millis.to_be_bytes().to_vec())
            .filter_map(|item| item.ok().map(|(key, _)| key.to_vec()))
            .collect();

        for key in keys_to_delete {
            tree.remove(key)?;
            deleted += 1;
        }

        if deleted > 0 {
            tree.flush()?;
            tracing::info!(user = user_id, deleted, "Cleaned up expired readings");
        }

        Ok(deleted)
    }

    /// Case-insensitive substring search over type labels and notes.
    pub fn search(&self, user_id: &str, query: &str) -> Result<Vec<Reading>, StorageError> {
        let needle = query.to_lowercase();
        let readings = self.load_readings(user_id)?;

        Ok(readings
            .into_iter()
            .filter(|r| {
                r.vital_type.as_str().to_lowercase().contains(&needle)
                    || r.notes
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&needle))
            })
            .collect())
    }

    /// Per-user storage usage.
    pub fn usage(&self, user_id: &str) -> Result<StorageStats, StorageError> {
        let readings = self.readings_tree(user_id)?;
        let mut readings_count = 0;
        let mut readings_bytes: u64 = 0;
        for item in readings.iter() {
            let (_key, value) = item?;
            readings_count += 1;
            readings_bytes += value.len() as u64;
        }

        let settings_bytes = self
            .settings_tree(user_id)?
            .get(SETTINGS_KEY)?
            .map_or(0, |v| v.len() as u64);

        Ok(StorageStats {
            readings_count,
            readings_bytes,
            settings_bytes,
            total_bytes: readings_bytes + settings_bytes,
        })
    }

    /// Remove every reading in a user's partition, keeping settings.
    pub fn clear_readings(&self, user_id: &str) -> Result<(), StorageError> {
        let tree = self.readings_tree(user_id)?;
        tree.clear()?;
        tree.flush()?;
        Ok(())
    }

    /// User ids that have a readings partition.
    pub fn users(&self) -> Vec<String> {
        self.db
            .tree_names()
            .into_iter()
            .filter_map(|name| {
                let name = String::from_utf8(name.to_vec()).ok()?;
                name.strip_prefix(READINGS_TREE_PREFIX)
                    .map(str::to_string)
            })
            .collect()
    }

    /// The user's settings, falling back to defaults when never saved.
    pub fn load_settings(&self, user_id: &str) -> Result<UserSettings, StorageError> {
        let tree = self.settings_tree(user_id)?;
        match tree.get(SETTINGS_KEY)? {
            Some(value) => Ok(serde_json::from_slice(&value)?),
            None => Ok(UserSettings::default()),
        }
    }

    /// Persist the user's settings.
    pub fn save_settings(
        &self,
        user_id: &str,
        settings: &UserSettings,
    ) -> Result<(), StorageError> {
        let tree = self.settings_tree(user_id)?;
        tree.insert(SETTINGS_KEY, serde_json::to_vec(settings)?)?;
        Ok(())
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }

    pub(super) fn db(&self) -> &sled::Db {
        &self.db
    }
}
