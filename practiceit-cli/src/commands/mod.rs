//! Command implementations for the practiceit CLI

use std::path::PathBuf;

use clap::Args;

pub mod dump;
pub mod migrate;
pub mod serve;

pub use dump::run_dump;
pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// SQLite database file, or ":memory:" (overrides config file)
    #[arg(long = "db", env = "PRACTICEIT_DB")]
    pub db: Option<PathBuf>,
}
