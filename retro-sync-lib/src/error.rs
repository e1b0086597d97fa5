use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating or reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },

    #[error("TOML error in {path}: {message}")]
    Settings { path: String, message: String },

    #[error("No source config found (looked in: {})", format_paths(.0))]
    NotFound(Vec<PathBuf>),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur while running transfers.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The external program could not be started at all.
    #[error("Failed to execute '{program}'. Is it installed? ({source})")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

impl SyncError {
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }
}
