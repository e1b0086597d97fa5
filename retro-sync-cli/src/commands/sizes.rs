use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_sync_lib::{DryRunRunner, RunOutcome, capture_stdout, display_sizes, size_command};

use crate::error::CliError;
use crate::spinner;

use super::{level_or_default, load_source, systems_for};

/// Show how much space a level's source ROM folders take on the source host.
pub(crate) fn run_sizes(
    config: Option<PathBuf>,
    level: Option<&str>,
    dry_run: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let level = level_or_default(level)?;
    let source = load_source(config)?;
    let systems = systems_for(level);

    if dry_run {
        display_sizes(&systems, &source, &mut DryRunRunner)?;
        return Ok(());
    }

    let Some(command) = size_command(&systems, &source) else {
        log::info!("No source ROM folders to measure.");
        return Ok(());
    };
    log::debug!("{}", command.display());

    let pb = spinner::start(
        format!("Measuring ROM folders on {}...", source.remote_hostname()),
        quiet,
    );
    let result = capture_stdout(&command);
    pb.finish_and_clear();
    let (outcome, stdout) = result?;

    for line in stdout.lines() {
        match line.split_once('\t') {
            Some((size, "total")) => log::info!(
                "{:>6}  {}",
                size.if_supports_color(Stdout, |t| t.bold()),
                "total".if_supports_color(Stdout, |t| t.bold()),
            ),
            Some((size, dir)) => log::info!(
                "{:>6}  {}",
                size.if_supports_color(Stdout, |t| t.cyan()),
                dir
            ),
            None => log::info!("{line}"),
        }
    }

    if let RunOutcome::Failed(code) = outcome {
        log::warn!(
            "du on {} exited with {}",
            source.remote_hostname(),
            code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}")),
        );
    }
    Ok(())
}
