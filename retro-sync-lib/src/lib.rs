//! Copy BIOS and ROM files from a source library into emulation frontends.
//!
//! The heavy lifting is done by `rsync`; this crate decides what to copy
//! where. A [`SourceConfig`] describes the library, a
//! [`Frontend`](retro_sync_frontend::Frontend) describes the target layout,
//! and [`FileCopier`] turns a list of systems into rsync transfers.

pub mod copier;
pub mod error;
pub mod runner;
pub mod settings;
pub mod sizes;
pub mod source_config;

pub use copier::{FileCopier, RSYNC_FLAGS, SyncJob, SyncKind, SyncSummary, is_remote_path};
pub use error::{ConfigError, SyncError};
pub use runner::{
    CommandRunner, CommandSpec, DryRunRunner, ProcessRunner, RecordingRunner, RunOutcome,
    capture_stdout,
};
pub use sizes::{display_sizes, size_command};
pub use source_config::SourceConfig;

// Re-export the identifier and layout crates so the CLI needs one dependency.
pub use retro_sync_core::{Level, LevelParseError, System, SystemParseError};
pub use retro_sync_frontend::{Frontend, FrontendError, FrontendKind, LayoutFrontend, tables};
