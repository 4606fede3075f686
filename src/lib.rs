//! Vitaltrack: vital-sign tracking and classification
//!
//! Self-hosted service for logging vital-sign measurements, classifying
//! them against fixed medical-reference ranges, and serving dashboard
//! statistics over reading history.
//!
//! ## Architecture
//!
//! - **Classifier**: pure threshold-band classification of raw measurements
//! - **Analytics**: latest-value lookup and window statistics with trend
//! - **Storage**: embedded per-user reading store with retention cleanup
//! - **API**: axum dashboard endpoints over the pure core

pub mod analytics;
pub mod api;
pub mod background;
pub mod classifier;
pub mod config;
pub mod storage;
pub mod types;

// Re-export app configuration
pub use config::AppConfig;

// Re-export commonly used types
pub use types::{
    PressureValue, Reading, ReadingPatch, ReadingValue, SeriesStatistics, Severity,
    UserSettings, VitalStatus, VitalType,
};

// Re-export storage
pub use storage::{ReadingStore, Snapshot, StorageError, StorageStats};

// Re-export the API surface
pub use api::{create_app, DashboardState};
