use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::tracking::TrackingService;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::models::transaction::Transaction;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

/// Print the start/stop audit trail.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        project,
        limit,
        last,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let service = TrackingService::new(pool, SystemClock);

        let records: Vec<Transaction> = match (project, *last) {
            (Some(p), true) => service
                .last_transaction_for_project(p)?
                .into_iter()
                .collect(),
            (Some(p), false) => service.transactions_for_project(p)?,
            (None, _) => service.recent_transactions((*limit).unwrap_or(cfg.recent_limit))?,
        };

        if records.is_empty() {
            info("No transactions recorded.");
            return Ok(());
        }

        header("Transactions");

        let mut table = Table::new(&["Id", "Action", "Time", "Project"]);
        for t in &records {
            table.add_row(vec![
                t.id.to_string(),
                t.action.to_db_str().to_string(),
                t.formatted_timestamp(),
                t.project_name.clone(),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
