use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_sync_lib::{
    CommandRunner, DryRunRunner, FileCopier, FrontendKind, ProcessRunner, SyncSummary,
    is_remote_path,
};

use crate::error::CliError;

use super::{level_or_default, load_source};

/// Flags for `retro-sync copy`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CopyOptions {
    pub dry_run: bool,
    pub copy_source_dir: bool,
    pub skip_bios: bool,
    pub skip_roms: bool,
}

/// Copy BIOS and ROM files for a level into a frontend's layout.
pub(crate) fn run_copy(
    config: Option<PathBuf>,
    frontend: &str,
    destination_dir: &str,
    level: Option<&str>,
    options: CopyOptions,
) -> Result<(), CliError> {
    let level = level_or_default(level)?;
    let kind: FrontendKind = frontend.parse()?;
    let Some(level) = level else {
        log::info!("No ROM pack level given; nothing to copy.");
        return Ok(());
    };
    let source = load_source(config)?.with_remote_source(!is_remote_path(destination_dir));
    let frontend = kind.create(destination_dir);
    let systems = level.systems();

    log::info!(
        "{} {} to {} ({})",
        if options.dry_run { "Planning" } else { "Copying" },
        level.if_supports_color(Stdout, |t| t.bold()),
        kind.name().if_supports_color(Stdout, |t| t.cyan()),
        destination_dir,
    );
    log::debug!(
        "Source is {}",
        if source.is_remote() {
            format!("remote ({})", source.remote_hostname())
        } else {
            "local".to_string()
        }
    );

    let runner: Box<dyn CommandRunner> = if options.dry_run {
        Box::new(DryRunRunner)
    } else {
        Box::new(ProcessRunner)
    };
    let mut copier = FileCopier::new(&frontend, &source, runner);

    let mut summary = SyncSummary::default();
    if !options.skip_bios {
        summary = summary.merge(copier.copy_bios_files(&systems)?);
    }
    if !options.skip_roms {
        summary = summary.merge(copier.copy_rom_files(&systems, options.copy_source_dir)?);
    }

    print_summary(&summary, options.dry_run);
    Ok(())
}

fn print_summary(summary: &SyncSummary, dry_run: bool) {
    log::info!("");
    if dry_run {
        log::info!(
            "{} {} transfers planned (dry run, nothing copied)",
            "Done:".if_supports_color(Stdout, |t| t.bold()),
            summary.total(),
        );
        return;
    }

    let failed = if summary.failed > 0 {
        format!(
            ", {}",
            format!("{} failed", summary.failed).if_supports_color(Stdout, |t| t.red())
        )
    } else {
        String::new()
    };
    log::info!(
        "{} {}{}",
        "Done:".if_supports_color(Stdout, |t| t.bold()),
        format!("{} transferred", summary.succeeded).if_supports_color(Stdout, |t| t.green()),
        failed,
    );
}
