use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::tracking::{StopOutcome, TrackingService};
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_elapsed;

/// Stop the active tracking session.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let mut service = TrackingService::new(pool, SystemClock);

    match service.stop_tracking()? {
        StopOutcome::Stopped(entry) => {
            success(format!(
                "Stopped tracking '{}' after {}",
                entry.project_name,
                format_elapsed(entry.elapsed_seconds.unwrap_or(0))
            ));
        }
        StopOutcome::NotTracking => {
            warning("No active tracking session to stop.");
        }
    }

    Ok(())
}
