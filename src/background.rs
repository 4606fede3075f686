//! Background maintenance tasks
//!
//! Currently one task: the retention sweeper, which periodically removes
//! readings older than each user's `data_retention_days` horizon.

use chrono::{Duration, Utc};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::storage::{ReadingStore, StorageError};

/// Remove readings past each user's retention horizon.
///
/// Returns the total number of deleted readings across all partitions.
pub fn run_retention_sweep(store: &ReadingStore) -> Result<usize, StorageError> {
    let mut total = 0;
    for user in store.users() {
        let settings = store.load_settings(&user)?;
        let cutoff = Utc::now() - Duration::days(i64::from(settings.data_retention_days));
        total += store.cleanup_before(&user, cutoff)?;
    }
    Ok(total)
}

/// Spawn the periodic retention sweeper.
///
/// The first sweep runs immediately; the task exits when the token is
/// cancelled. Sweep failures are logged and retried on the next tick.
pub fn spawn_retention_sweeper(
    store: ReadingStore,
    interval_secs: u64,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs.max(1)));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        info!(interval_secs, "[RetentionSweeper] Task starting");
        loop {
            tokio::select! {
                () = cancel_token.cancelled() => {
                    info!("[RetentionSweeper] Received shutdown signal");
                    break;
                }
                _ = ticker.tick() => {
                    match run_retention_sweep(&store) {
                        Ok(0) => {}
                        Ok(deleted) => info!(deleted, "[RetentionSweeper] Removed expired readings"),
                        Err(e) => warn!(error = %e, "[RetentionSweeper] Sweep failed, will retry"),
                    }
                }
            }
        }
    })
}
