use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::tracking::TrackingService;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::time::format_elapsed;

/// Show the active tracking session, if any.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let service = TrackingService::new(pool, SystemClock);

    match service.get_current_status()? {
        Some(entry) => {
            info(format!("Tracking '{}'", entry.project_name));
            println!("  started: {}", entry.formatted_start());
            println!(
                "  elapsed: {}",
                format_elapsed(entry.current_elapsed(service.now()))
            );
        }
        None => {
            info("Not tracking.");
        }
    }

    Ok(())
}
