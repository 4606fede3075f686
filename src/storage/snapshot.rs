//! Versioned export/import snapshot document
//!
//! The export format is the interchange boundary with other installs and
//! with client-side backups: `{readings, settings, exportDate, version}`.
//! The classifier and analytics operate identically on imported readings —
//! they are pure functions of the reading list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Reading, UserSettings};

use super::{ReadingStore, StorageError};

/// Current snapshot document version.
pub const SNAPSHOT_VERSION: &str = "1.0";

const BACKUP_TREE_PREFIX: &str = "backup/";
const BACKUP_KEY: &[u8] = b"latest";

/// Complete portable dump of one user's partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub readings: Vec<Reading>,
    #[serde(default)]
    pub settings: UserSettings,
    pub export_date: DateTime<Utc>,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    SNAPSHOT_VERSION.to_string()
}

impl ReadingStore {
    /// Export a user's readings and settings as a snapshot document.
    pub fn export_snapshot(&self, user_id: &str) -> Result<Snapshot, StorageError> {
        Ok(Snapshot {
            readings: self.load_readings(user_id)?,
            settings: self.load_settings(user_id)?,
            export_date: Utc::now(),
            version: SNAPSHOT_VERSION.to_string(),
        })
    }

    /// Replace a user's partition with the snapshot's contents.
    ///
    /// The current data is first written to the user's backup tree so a bad
    /// import can be recovered by hand. Returns the imported reading count.
    pub fn import_snapshot(
        &self,
        user_id: &str,
        snapshot: &Snapshot,
    ) -> Result<usize, StorageError> {
        if !snapshot.version.starts_with("1.") {
            return Err(StorageError::InvalidSnapshot(format!(
                "unsupported snapshot version: {}",
                snapshot.version
            )));
        }

        let backup = self.export_snapshot(user_id)?;
        let backup_tree = self
            .db()
            .open_tree(format!("{BACKUP_TREE_PREFIX}{user_id}"))?;
        backup_tree.insert(BACKUP_KEY, serde_json::to_vec(&backup)?)?;

        self.clear_readings(user_id)?;
        for reading in &snapshot.readings {
            self.save_reading(user_id, reading)?;
        }
        self.save_settings(user_id, &snapshot.settings)?;

        tracing::info!(
            user = user_id,
            imported = snapshot.readings.len(),
            replaced = backup.readings.len(),
            "Imported snapshot"
        );

        Ok(snapshot.readings.len())
    }

    /// The backup written by the last import, when one exists.
    pub fn last_import_backup(&self, user_id: &str) -> Result<Option<Snapshot>, StorageError> {
        let tree = self
            .db()
            .open_tree(format!("{BACKUP_TREE_PREFIX}{user_id}"))?;
        match tree.get(BACKUP_KEY)? {
            Some(value) => Ok(Some(serde_json::from_slice(&value)?)),
            None => Ok(None),
        }
    }
}
