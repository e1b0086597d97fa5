use thiserror::Error;

use retro_sync_lib::{ConfigError, FrontendError, FrontendKind, LevelParseError, SyncError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Unknown frontend key
    #[error("{0}\nAvailable: {available}", available = FrontendKind::available())]
    UnknownFrontend(#[from] FrontendError),

    /// Level that is not 1-5
    #[error("{0}")]
    InvalidLevel(#[from] LevelParseError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Transfer could not run
    #[error("{0}")]
    Sync(#[from] SyncError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
