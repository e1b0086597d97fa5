//! retro-sync CLI
//!
//! Copies BIOS and ROM files from a source library into the folder layout
//! of an emulation frontend, one rsync transfer per system.

mod cli_types;
mod commands;
mod error;
mod logging;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_set_level, run_config_show};
use commands::copy::{CopyOptions, run_copy};
use commands::list::run_list;
use commands::sizes::run_sizes;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(log_quiet(&cli), cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Whether `--quiet` applies to logging. The size table is the whole output
/// of `sizes`, so there it only hides the spinner.
fn log_quiet(cli: &Cli) -> bool {
    cli.quiet && !matches!(cli.command, Commands::Sizes { .. })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Copy {
            frontend,
            destination_dir,
            level,
            dry_run,
            copy_source_dir,
            skip_bios,
            skip_roms,
        } => run_copy(
            cli.config,
            &frontend,
            &destination_dir,
            level.as_deref(),
            CopyOptions {
                dry_run,
                copy_source_dir,
                skip_bios,
                skip_roms,
            },
        ),
        Commands::Sizes { level, dry_run } => {
            run_sizes(cli.config, level.as_deref(), dry_run, cli.quiet)
        }
        Commands::List { target, frontend } => run_list(target, frontend.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(cli.config),
            ConfigAction::Path => {
                run_config_path(cli.config);
                Ok(())
            }
            ConfigAction::SetLevel { level } => run_config_set_level(level.as_deref()),
        },
    }
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
