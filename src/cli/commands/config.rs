use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(
        cmd,
        Commands::Config {
            print_config: true
        }
    ) {
        let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
        println!("{}", yaml);
    }

    Ok(())
}
