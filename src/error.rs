//! Error types for configuration and input loading

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagewiseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PagewiseError>;
