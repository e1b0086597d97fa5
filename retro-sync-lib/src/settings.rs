//! Config file locations and persisted user settings.
//!
//! The source config is `~/.config/retro-sync/source_config.yaml` unless a
//! CLI flag or environment variable points elsewhere. Small user defaults
//! live next to it in `settings.toml`.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable that overrides the source config location.
pub const CONFIG_ENV_VAR: &str = "RETRO_SYNC_CONFIG";

/// File name of the source config in the config and working directories.
pub const SOURCE_CONFIG_FILE: &str = "source_config.yaml";

/// Where the resolved source config path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    CliFlag,
    EnvVar,
    ConfigDir,
    WorkingDir,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CliFlag => write!(f, "--config"),
            Self::EnvVar => write!(f, "env {CONFIG_ENV_VAR}"),
            Self::ConfigDir => write!(f, "config dir"),
            Self::WorkingDir => write!(f, "working dir"),
        }
    }
}

/// `~/.config/retro-sync` (platform equivalent via `dirs`).
pub fn config_dir() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("retro-sync")
}

pub fn default_config_path() -> PathBuf {
    config_dir().join(SOURCE_CONFIG_FILE)
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

/// Resolve the source config path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `RETRO_SYNC_CONFIG`
/// 3. `source_config.yaml` in the config directory
/// 4. `source_config.yaml` in the current working directory
///
/// Explicit choices (1 and 2) must exist; they never fall through.
pub fn resolve_config_path(
    cli_override: Option<PathBuf>,
) -> Result<(PathBuf, ConfigSource), ConfigError> {
    let env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_from(
        cli_override,
        env,
        &default_config_path(),
        &cwd.join(SOURCE_CONFIG_FILE),
    )
}

pub(crate) fn resolve_from(
    cli_override: Option<PathBuf>,
    env: Option<PathBuf>,
    config_dir_file: &Path,
    working_dir_file: &Path,
) -> Result<(PathBuf, ConfigSource), ConfigError> {
    let explicit = cli_override
        .map(|p| (p, ConfigSource::CliFlag))
        .or_else(|| env.map(|p| (p, ConfigSource::EnvVar)));
    if let Some((path, source)) = explicit {
        if path.is_file() {
            return Ok((path, source));
        }
        return Err(ConfigError::NotFound(vec![path]));
    }

    let candidates = [
        (config_dir_file, ConfigSource::ConfigDir),
        (working_dir_file, ConfigSource::WorkingDir),
    ];
    for (path, source) in &candidates {
        if path.is_file() {
            log::debug!("Using source config from {} ({})", path.display(), source);
            return Ok((path.to_path_buf(), source.clone()));
        }
    }
    Err(ConfigError::NotFound(
        candidates.iter().map(|(p, _)| p.to_path_buf()).collect(),
    ))
}

/// User defaults stored in `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Level used when a command is run without one.
    pub default_level: Option<String>,
}

/// Read settings, treating a missing or unreadable file as empty.
pub fn load_settings(path: &Path) -> Settings {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Settings::default();
    };
    let doc: toml::Value = match contents.parse() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("Ignoring malformed {}: {e}", path.display());
            return Settings::default();
        }
    };
    let default_level = doc
        .get("defaults")
        .and_then(|d| d.get("level"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    Settings { default_level }
}

/// Save (or clear) the default level in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated keys survive.
pub fn save_default_level(path: &Path, level: Option<&str>) -> Result<(), ConfigError> {
    let settings_error = |message: String| ConfigError::Settings {
        path: path.display().to_string(),
        message,
    };
    let io_error = |source: std::io::Error| ConfigError::Io {
        path: path.display().to_string(),
        source,
    };

    // A malformed file is reported, never replaced.
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents
            .parse::<toml::Value>()
            .map_err(|e| settings_error(e.to_string()))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(io_error(e)),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| settings_error("root is not a table".to_string()))?;
    let defaults = table
        .entry("defaults")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let defaults = defaults
        .as_table_mut()
        .ok_or_else(|| settings_error("[defaults] is not a table".to_string()))?;

    match level {
        Some(level) => {
            defaults.insert("level".to_string(), toml::Value::String(level.to_string()));
        }
        None => {
            defaults.remove("level");
        }
    }

    // Write atomically
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(|e| settings_error(e.to_string()))?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized).map_err(io_error)?;
    std::fs::rename(&tmp, path).map_err(io_error)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
