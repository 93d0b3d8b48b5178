use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use pagewise::{Config, Paginator};

use super::input::load_lines;
use crate::tui::{self, Browser};

/// Browse a file page by page
#[derive(Args)]
pub struct BrowseCommand {
    /// File to paginate
    pub file: PathBuf,

    /// Lines per page (defaults to the configured page size)
    #[arg(short = 's', long = "page-size", allow_negative_numbers = true)]
    pub page_size: Option<i64>,
}

impl BrowseCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        if self.file.as_os_str() == "-" {
            bail!("browse reads keys from the terminal and cannot page stdin; use `show -` instead");
        }

        let items = load_lines(&self.file).await?;
        info!("Browsing {} lines from {}", items.len(), self.file.display());

        let paginator = match self.page_size {
            Some(size) => Paginator::new(size),
            None => Paginator::from_config(config),
        };
        let title = self.file.display().to_string();
        let mut browser = Browser::new(title, items, paginator, config.pagination.clone());

        tui::run(&mut browser)?;
        info!("Closed on page {}", browser.paginator().page());
        Ok(())
    }
}
