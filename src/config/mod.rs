//! Application Configuration Module
//!
//! Deployment-level settings loaded from TOML files. Clinical reference
//! ranges are deliberately NOT configurable — see
//! [`crate::types::reference_ranges`].
//!
//! ## Loading Order
//!
//! 1. `VITALTRACK_CONFIG` environment variable (path to TOML file)
//! 2. `vitaltrack.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(AppConfig::load());
//!
//! // Anywhere in the codebase:
//! let window = config::get().analytics.default_window_days;
//! ```

mod app_config;

pub use app_config::*;

use std::sync::OnceLock;

/// Global application configuration, initialized once at startup.
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Initialize the global configuration.
///
/// Must be called exactly once before any calls to `get()`; a second call
/// is ignored with a warning.
pub fn init(config: AppConfig) {
    if APP_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once — ignoring");
    }
}

/// Get a reference to the global configuration.
///
/// Falls back to built-in defaults when `init()` was never called, so
/// library consumers and tests work without a startup sequence.
pub fn get() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::default)
}

/// Check whether the config has been initialized.
pub fn is_initialized() -> bool {
    APP_CONFIG.get().is_some()
}
