//! Persistent reading storage
//!
//! Embedded sled database with one tree per user partition. The analytics
//! core never touches this module — it receives materialized reading
//! collections loaded here by the API layer.

mod reading_store;
mod snapshot;

pub use reading_store::{ReadingStore, StorageStats};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};

use thiserror::Error;

/// Error type for storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Reading not found: {0}")]
    NotFound(uuid::Uuid),

    #[error("Invalid snapshot document: {0}")]
    InvalidSnapshot(String),
}
