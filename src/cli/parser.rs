use clap::{Parser, Subcommand};

/// Command-line interface definition for timetrack
#[derive(Parser)]
#[command(
    name = "timetrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple terminal time tracker: start/stop project timers and review reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the project list file
    #[arg(global = true, long = "projects-file")]
    pub projects_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, project list and database
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Start tracking time for a project
    Start {
        /// Name of the project to track
        project: String,
    },

    /// Stop the active tracking session
    Stop,

    /// Show the active tracking session, if any
    Status,

    /// Per-project totals, including the live session
    Summary,

    /// Session history, optionally filtered to one project
    Sessions {
        #[arg(long = "project", help = "Only show sessions of this project")]
        project: Option<String>,
    },

    /// Print the start/stop audit trail
    Log {
        #[arg(long = "project", help = "Only show records of this project")]
        project: Option<String>,

        #[arg(long = "limit", help = "Maximum number of records to print")]
        limit: Option<usize>,

        #[arg(
            long = "last",
            help = "Only the most recent record (requires --project)",
            requires = "project"
        )]
        last: bool,
    },

    /// List the known project names
    Projects,
}
