use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_sync_lib::Level;
use retro_sync_lib::settings::{
    load_settings, resolve_config_path, save_default_level, settings_path,
};

use crate::error::CliError;

use super::load_source;

/// Show the resolved source config and saved defaults.
pub(crate) fn run_config_show(config: Option<PathBuf>) -> Result<(), CliError> {
    let (path, origin) = resolve_config_path(config.clone())?;
    let source = load_source(config)?;

    log::info!(
        "{}",
        "retro-sync Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    log::info!(
        "  Source config: {} ({})",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        origin,
    );
    log::info!("  Remote host:   {}", source.remote_hostname());
    log::info!("  BIOS dir:      {}", source.bios_dir());
    log::info!("  ROMs dir:      {}", source.roms_dir());
    if let Some(art) = source.batocera_art_dir() {
        log::info!("  Art dir:       {}", art);
    }
    log::info!(
        "  Mapped:        {} BIOS folders, {} ROM folders",
        source.bios_subdirs().len(),
        source.roms_subdirs().len(),
    );

    let settings_file = settings_path();
    let settings = load_settings(&settings_file);
    log::info!("");
    log::info!(
        "  Settings:      {}",
        settings_file.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    match settings.default_level {
        Some(level) => log::info!("  Default level: {}", level),
        None => log::info!(
            "  Default level: {}",
            "(none)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
    Ok(())
}

/// Print the source config and settings file paths.
pub(crate) fn run_config_path(config: Option<PathBuf>) {
    match resolve_config_path(config) {
        Ok((path, _)) => log::info!("{}", path.display()),
        Err(e) => log::warn!("{}", e),
    }
    log::info!("{}", settings_path().display());
}

/// Save or clear the level used when a command is run without one.
pub(crate) fn run_config_set_level(level: Option<&str>) -> Result<(), CliError> {
    let level = level.map(Level::parse).transpose()?;
    let path = settings_path();
    let value = level.map(|l| l.to_string());
    save_default_level(&path, value.as_deref())?;

    match level {
        Some(level) => log::info!(
            "{} Default level set to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            level.if_supports_color(Stdout, |t| t.bold()),
        ),
        None => log::info!(
            "{} Default level cleared",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
    }
    Ok(())
}
