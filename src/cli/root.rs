use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use pagewise::Config;

use super::browse::BrowseCommand;
use super::show::ShowCommand;

/// Page through the lines of a file
#[derive(Parser)]
#[command(
    name = "pagewise",
    version,
    about = "Page through the lines of a file",
    long_about = r#"pagewise splits a file into pages and shows one page at a time.

Examples:
  pagewise show notes.txt --page 3        # Print page 3
  cat log.txt | pagewise show - -s 50     # Page stdin, 50 lines per page
  pagewise browse notes.txt               # Interactive browser"#
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Path to a config file
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a single page and exit
    Show(ShowCommand),
    /// Browse pages interactively
    Browse(BrowseCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = Config::init(self.config.as_deref())
            .await
            .context("Failed to load configuration")?;
        debug!("Configuration initialized: {:?}", config);

        match self.command {
            Commands::Show(cmd) => cmd.execute(&config).await,
            Commands::Browse(cmd) => cmd.execute(&config).await,
        }
    }
}
