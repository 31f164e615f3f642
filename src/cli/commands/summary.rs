use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::tracking::TrackingService;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use crate::utils::time::format_elapsed;

/// Per-project totals, including the live contribution of an active session.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let service = TrackingService::new(pool, SystemClock);

    let summary = service.get_summary_report()?;
    if summary.is_empty() {
        info("No tracked time yet.");
        return Ok(());
    }

    header("Summary");

    let mut table = Table::new(&["Project", "Total"]);
    for (project, seconds) in &summary {
        table.add_row(vec![project.clone(), format_elapsed(*seconds)]);
    }
    print!("{}", table.render());

    Ok(())
}
