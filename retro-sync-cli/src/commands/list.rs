use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_sync_lib::tables::lookup;
use retro_sync_lib::{Frontend, FrontendKind, Level, System};

use crate::cli_types::ListTarget;
use crate::error::CliError;

pub(crate) fn run_list(target: ListTarget, frontend: Option<&str>) -> Result<(), CliError> {
    match target {
        ListTarget::Frontends => list_frontends(),
        ListTarget::Levels => list_levels(),
        ListTarget::Systems => {
            let kind = frontend.map(str::parse::<FrontendKind>).transpose()?;
            list_systems(kind);
        }
    }
    Ok(())
}

fn list_frontends() {
    log::info!("Supported frontends:");
    log::info!("");
    for kind in FrontendKind::all() {
        let frontend = kind.create("");
        log::info!(
            "  {:<10} {} ({} systems)",
            kind.key().if_supports_color(Stdout, |t| t.bold()),
            kind.name().if_supports_color(Stdout, |t| t.cyan()),
            frontend.supported_systems().len(),
        );
    }
}

fn list_levels() {
    for level in Level::all() {
        log::info!(
            "{} ({} systems)",
            level.if_supports_color(Stdout, |t| t.bold()),
            level.systems().len(),
        );
        let added: Vec<&str> = level.additions().iter().map(|s| s.id()).collect();
        log::info!("  + {}", added.join(", "));
    }
}

fn list_systems(kind: Option<FrontendKind>) {
    match kind {
        Some(kind) => log::info!("Systems and {} ROM folders:", kind.name()),
        None => log::info!("Supported systems:"),
    }
    log::info!("");

    let table = kind.map(|k| k.create("").roms_subdirs());
    let mut current_manufacturer = "";

    for system in System::all() {
        if system.manufacturer() != current_manufacturer {
            if !current_manufacturer.is_empty() {
                log::info!("");
            }
            current_manufacturer = system.manufacturer();
            log::info!(
                "{}:",
                current_manufacturer.if_supports_color(Stdout, |t| t.bold()),
            );
        }

        let folder = match table {
            Some(table) => match lookup(table, *system) {
                Some(dir) => format!(" -> {}", dir.if_supports_color(Stdout, |t| t.green())),
                None => format!(" {}", "(not supported)".if_supports_color(Stdout, |t| t.dimmed())),
            },
            None => String::new(),
        };
        log::info!(
            "  {} [{}]{}",
            system.id().if_supports_color(Stdout, |t| t.bold()),
            system
                .display_name()
                .if_supports_color(Stdout, |t| t.cyan()),
            folder,
        );
    }
}
