pub(crate) mod config;
pub(crate) mod copy;
pub(crate) mod list;
pub(crate) mod sizes;

use std::path::PathBuf;

use retro_sync_lib::settings::{load_settings, resolve_config_path, settings_path};
use retro_sync_lib::{Level, SourceConfig, System};

use crate::error::CliError;

/// Pick the level from the argument, falling back to the saved default.
///
/// `Ok(None)` means no level was given anywhere; callers treat that as an
/// empty system list.
pub(crate) fn resolve_level(
    arg: Option<&str>,
    default: Option<&str>,
) -> Result<Option<Level>, CliError> {
    match arg.or(default) {
        Some(name) => Ok(Some(Level::parse(name)?)),
        None => Ok(None),
    }
}

/// Level from the argument or `settings.toml`.
pub(crate) fn level_or_default(arg: Option<&str>) -> Result<Option<Level>, CliError> {
    let settings = load_settings(&settings_path());
    resolve_level(arg, settings.default_level.as_deref())
}

pub(crate) fn systems_for(level: Option<Level>) -> Vec<System> {
    level.map(|l| l.systems()).unwrap_or_default()
}

pub(crate) fn load_source(config: Option<PathBuf>) -> Result<SourceConfig, CliError> {
    let (path, origin) = resolve_config_path(config)?;
    log::debug!("Source config: {} ({})", path.display(), origin);
    Ok(SourceConfig::load(&path)?)
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
