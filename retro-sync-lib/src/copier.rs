//! BIOS and ROM transfer planning and execution.
//!
//! Trailing slashes decide what rsync copies, so they are fixed here:
//!
//! | kind | source | destination |
//! |------|--------|-------------|
//! | BIOS | `<bios_dir>/<sub>/` | `<frontend bios dir>/` |
//! | ROMs | `<roms_dir>/<sub>//` | `<frontend roms dir>` |
//! | ROMs, copying the source directory | `<roms_dir>/<sub>/` | `<frontend roms dir>` |

use retro_sync_core::{System, join_posix, with_trailing_slash};
use retro_sync_frontend::Frontend;

use crate::error::SyncError;
use crate::runner::{CommandRunner, CommandSpec, RunOutcome};
use crate::source_config::SourceConfig;

/// Flags passed to every rsync transfer.
pub const RSYNC_FLAGS: &[&str] = &["-avP", "--size-only"];

/// Whether an rsync path names another host (`host:/path`).
///
/// When the destination is remote the source must be local, since rsync
/// cannot copy between two remote hosts.
pub fn is_remote_path(path: &str) -> bool {
    path.contains(':')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    Bios,
    Roms,
}

impl std::fmt::Display for SyncKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bios => write!(f, "BIOS"),
            Self::Roms => write!(f, "ROMs"),
        }
    }
}

/// One planned rsync transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncJob {
    pub system: System,
    pub kind: SyncKind,
    pub source: String,
    pub destination: String,
}

impl SyncJob {
    pub fn command(&self) -> CommandSpec {
        RSYNC_FLAGS
            .iter()
            .fold(CommandSpec::new("rsync"), |cmd, flag| cmd.arg(*flag))
            .quoted_arg(&self.source)
            .quoted_arg(&self.destination)
    }
}

/// Counts from one copy pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Jobs not executed because of a dry run.
    pub skipped: usize,
}

impl SyncSummary {
    fn record(&mut self, outcome: RunOutcome) {
        match outcome {
            RunOutcome::Success => self.succeeded += 1,
            RunOutcome::Failed(_) => self.failed += 1,
            RunOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.skipped
    }

    pub fn merge(self, other: SyncSummary) -> SyncSummary {
        SyncSummary {
            succeeded: self.succeeded + other.succeeded,
            failed: self.failed + other.failed,
            skipped: self.skipped + other.skipped,
        }
    }
}

/// Copies BIOS and ROM files from a source library into a frontend layout.
pub struct FileCopier<'a, R: CommandRunner> {
    frontend: &'a dyn Frontend,
    source: &'a SourceConfig,
    runner: R,
}

impl<'a, R: CommandRunner> FileCopier<'a, R> {
    pub fn new(frontend: &'a dyn Frontend, source: &'a SourceConfig, runner: R) -> Self {
        Self {
            frontend,
            source,
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// BIOS transfers for `systems`. Systems without a source BIOS folder or
    /// a frontend BIOS destination are skipped silently.
    pub fn plan_bios(&self, systems: &[System]) -> Vec<SyncJob> {
        let bios_dir = self.source.bios_dir();
        systems
            .iter()
            .filter_map(|&system| {
                let subdir = self.source.bios_subdir(system)?;
                let destination = self.frontend.bios_directory(system)?;
                Some(SyncJob {
                    system,
                    kind: SyncKind::Bios,
                    source: with_trailing_slash(&join_posix(&bios_dir, [subdir])),
                    destination: with_trailing_slash(&destination),
                })
            })
            .collect()
    }

    /// ROM transfers for `systems`, logging each system that is skipped.
    ///
    /// By default the source gets a doubled trailing slash; with
    /// `copy_source_directory` it gets a single one.
    pub fn plan_roms(&self, systems: &[System], copy_source_directory: bool) -> Vec<SyncJob> {
        let roms_dir = self.source.roms_dir();
        let mut jobs = Vec::new();

        for &system in systems {
            let Some(subdir) = self.source.roms_subdir(system) else {
                log::info!("No source ROMS for {}.", system.id());
                continue;
            };
            let Some(destination) = self.frontend.roms_directory(system) else {
                log::info!(
                    "No destination directory for {} on {}.",
                    system.id(),
                    self.frontend.name()
                );
                continue;
            };

            let mut source = with_trailing_slash(&join_posix(&roms_dir, [subdir]));
            if !copy_source_directory {
                source.push('/');
            }
            jobs.push(SyncJob {
                system,
                kind: SyncKind::Roms,
                source,
                destination,
            });
        }

        jobs
    }

    pub fn copy_bios_files(&mut self, systems: &[System]) -> Result<SyncSummary, SyncError> {
        let jobs = self.plan_bios(systems);
        self.execute(&jobs)
    }

    pub fn copy_rom_files(
        &mut self,
        systems: &[System],
        copy_source_directory: bool,
    ) -> Result<SyncSummary, SyncError> {
        let jobs = self.plan_roms(systems, copy_source_directory);
        self.execute(&jobs)
    }

    /// Run each job in order. A failed rsync is logged and the pass
    /// continues; only a failure to start rsync aborts.
    pub fn execute(&mut self, jobs: &[SyncJob]) -> Result<SyncSummary, SyncError> {
        let mut summary = SyncSummary::default();
        for job in jobs {
            let command = job.command();
            log::info!("{}", command.display());
            let outcome = self.runner.run(&command)?;
            if let RunOutcome::Failed(code) = outcome {
                let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                log::warn!(
                    "rsync failed for {} {} (exit {})",
                    job.system.id(),
                    job.kind,
                    code
                );
            }
            summary.record(outcome);
        }
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "tests/copier_tests.rs"]
mod tests;
