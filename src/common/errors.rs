use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Assets directory {0:?} not found")]
    MissingAssets(PathBuf),

    #[error("Stylesheet {0:?} not found")]
    MissingStylesheet(PathBuf),
}
