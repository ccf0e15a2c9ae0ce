use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteamWatchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open content log {path}: {source}")]
    LogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read content log {path}: {source}")]
    LogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Steam installation not found: {details}")]
    SteamNotFound { details: String },

    #[error("Downloading directory not found at {path}")]
    DownloadingDirMissing { path: PathBuf },

    #[error("Failed to list downloading directory {path}: {reason}")]
    DownloadingDirList { path: PathBuf, reason: String },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
