use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::projects::load_projects;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command.
///
/// Creates the config directory and file (skipped in test mode), the
/// project list with its default entry, and the database with its schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::init_all(cli.db.clone(), cli.test)?;
    if let Some(custom_projects) = &cli.projects_file {
        cfg.projects_file = custom_projects.clone();
    }

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", &cfg.database));
    info(format!("Projects    : {}", &cfg.projects_file));

    // Opening the store creates the file and the schema.
    open_store(&cfg)?;
    load_projects(&cfg.projects_file)?;

    success("timetrack initialized.");
    Ok(())
}
