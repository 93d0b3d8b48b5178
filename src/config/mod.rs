//! Configuration loading: defaults, JSON file, environment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{PagewiseError, Result};
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Application configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pagination defaults
    pub pagination: PaginationConfig,
}

/// Pagination defaults
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size a new paginator starts with
    pub default_page_size: usize,

    /// Sizes the page-size key cycles through
    pub available_page_sizes: Vec<usize>,

    /// Pages skipped by PageUp/PageDown
    pub jump_pages: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            available_page_sizes: vec![10, 20, 50, 100],
            jump_pages: 5,
        }
    }
}

impl PaginationConfig {
    /// The size following `current` in `available_page_sizes`, wrapping
    /// around. A size not in the list jumps to the first entry.
    pub fn next_page_size(&self, current: usize) -> usize {
        let sizes = &self.available_page_sizes;
        match sizes.iter().position(|size| *size == current) {
            Some(index) => sizes[(index + 1) % sizes.len()],
            None => sizes.first().copied().unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl Config {
    /// Initialize configuration from defaults, a config file and the
    /// environment, in that order of precedence (lowest first).
    pub async fn init(explicit_path: Option<&Path>) -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = match explicit_path {
            Some(path) => Self::load_from_path(path).await?,
            None => match Self::find_config_file() {
                Some(path) => Self::load_from_path(&path).await?,
                None => Self::default(),
            },
        };

        config.load_from_env();
        config.validate()?;

        Ok(config)
    }

    /// Candidate config file locations, highest priority first.
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("./.pagewise.json"),
            PathBuf::from("./pagewise.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("pagewise").join("pagewise.json"));
        }

        paths
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::config_paths().into_iter().find(|path| path.exists())
    }

    /// Load a config file. Missing fields take their defaults.
    pub async fn load_from_path(path: &Path) -> Result<Self> {
        debug!("Loading configuration from: {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(|source| PagewiseError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `PAGEWISE_*` environment overrides.
    pub fn load_from_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup("PAGEWISE_PAGE_SIZE") {
            match raw.parse() {
                Ok(size) => self.pagination.default_page_size = size,
                Err(_) => warn!("Ignoring unparsable PAGEWISE_PAGE_SIZE: {}", raw),
            }
        }

        if let Some(raw) = lookup("PAGEWISE_JUMP_PAGES") {
            match raw.parse() {
                Ok(pages) => self.pagination.jump_pages = pages,
                Err(_) => warn!("Ignoring unparsable PAGEWISE_JUMP_PAGES: {}", raw),
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let pagination = &self.pagination;

        if pagination.default_page_size == 0 {
            return Err(PagewiseError::InvalidConfig(
                "default_page_size must be at least 1".to_string(),
            ));
        }

        if pagination.available_page_sizes.is_empty() {
            return Err(PagewiseError::InvalidConfig(
                "available_page_sizes must not be empty".to_string(),
            ));
        }

        if pagination.available_page_sizes.contains(&0) {
            return Err(PagewiseError::InvalidConfig(
                "available_page_sizes must not contain 0".to_string(),
            ));
        }

        Ok(())
    }
}
