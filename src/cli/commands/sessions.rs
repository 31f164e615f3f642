use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::tracking::TrackingService;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use crate::utils::time::{format_datetime_short, format_elapsed};

/// Detail report: one row per session, most recent first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sessions { project } = cmd {
        let pool = open_store(cfg)?;
        let service = TrackingService::new(pool, SystemClock);

        let entries = service.get_detail_report(project.as_deref())?;
        if entries.is_empty() {
            info("No sessions recorded.");
            return Ok(());
        }

        header("Sessions");

        let now = service.now();
        let mut table = Table::new(&["Project", "Start", "Stop", "Elapsed"]);
        for entry in &entries {
            let stop = match entry.stop_time {
                Some(ts) => format_datetime_short(ts),
                None => "Active".to_string(),
            };
            table.add_row(vec![
                entry.project_name.clone(),
                format_datetime_short(entry.start_time),
                stop,
                format_elapsed(entry.current_elapsed(now)),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
