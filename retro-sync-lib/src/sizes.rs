//! Source ROM directory sizes, measured with `du` on the source host.

use retro_sync_core::{System, join_posix};

use crate::error::SyncError;
use crate::runner::{CommandRunner, CommandSpec, RunOutcome};
use crate::source_config::SourceConfig;

/// Build the `ssh <host> "du ..."` command for `systems`.
///
/// Systems are sorted by id and those without a ROM folder are dropped.
/// Returns `None` when nothing is left to measure.
pub fn size_command(systems: &[System], source: &SourceConfig) -> Option<CommandSpec> {
    let mut sorted = systems.to_vec();
    sorted.sort_by_key(|s| s.id());

    let directories: Vec<String> = sorted
        .iter()
        .filter_map(|&system| {
            let subdir = source.roms_subdir(system)?;
            Some(format!(
                "'{}/'",
                join_posix(source.source_roms_dir(), [subdir])
            ))
        })
        .collect();

    if directories.is_empty() {
        return None;
    }

    let remote = format!(
        "du --total --summarize --human-readable {}",
        directories.join(" ")
    );
    Some(
        CommandSpec::new("ssh")
            .arg(source.remote_hostname())
            .quoted_arg(remote),
    )
}

/// Print the size of each source ROM directory (and the total).
pub fn display_sizes<R: CommandRunner>(
    systems: &[System],
    source: &SourceConfig,
    runner: &mut R,
) -> Result<RunOutcome, SyncError> {
    let Some(command) = size_command(systems, source) else {
        log::debug!("No source ROM directories to measure");
        return Ok(RunOutcome::Skipped);
    };
    log::info!("{}", command.display());
    runner.run(&command)
}

#[cfg(test)]
#[path = "tests/sizes_tests.rs"]
mod tests;
