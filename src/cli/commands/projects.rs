use crate::config::Config;
use crate::core::projects::load_projects;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// List the known project names, creating the default list when missing.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let projects = load_projects(&cfg.projects_file)?;

    header("Projects");
    for p in &projects {
        println!("  {}", p);
    }

    Ok(())
}
