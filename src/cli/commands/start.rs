use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::projects::{is_known_project, load_projects};
use crate::core::tracking::{StartOutcome, TrackingService};
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Start tracking a project.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { project } = cmd {
        // Unknown names are allowed by the core; the shell just points it out.
        let projects = load_projects(&cfg.projects_file)?;
        if !is_known_project(project, &projects) {
            warning(format!("'{}' is not in the project list.", project.trim()));
        }

        let pool = open_store(cfg)?;
        let mut service = TrackingService::new(pool, SystemClock);

        match service.start_tracking(project)? {
            StartOutcome::Started(entry) => {
                success(format!(
                    "Started tracking '{}' at {}",
                    entry.project_name,
                    entry.formatted_start()
                ));
            }
            StartOutcome::AlreadyTracking(active) => {
                warning(format!(
                    "Already tracking '{}'. Stop it first.",
                    active.project_name
                ));
            }
        }
    }

    Ok(())
}
