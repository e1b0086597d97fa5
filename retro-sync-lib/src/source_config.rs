//! The source library: where BIOS and ROM files are read from.
//!
//! Loaded from a YAML file such as:
//!
//! ```yaml
//! source_bios_dir: /volume1/retro/bios
//! source_roms_dir: /volume1/retro/roms
//! source_batocera_art_dir: /volume1/retro/art
//! remote_hostname: nas
//! bios_subdirs:
//!   sony_playstation: Sony - PlayStation
//! roms_subdirs:
//!   sony_playstation: Sony - PlayStation
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use retro_sync_core::System;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    source_bios_dir: String,
    source_roms_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_batocera_art_dir: Option<String>,
    remote_hostname: String,
    #[serde(default)]
    bios_subdirs: BTreeMap<System, String>,
    #[serde(default)]
    roms_subdirs: BTreeMap<System, String>,

    /// Whether directory accessors carry the `remote_hostname:` prefix.
    #[serde(skip, default = "remote_by_default")]
    remote_source: bool,
}

fn remote_by_default() -> bool {
    true
}

impl SourceConfig {
    /// Parse a config from YAML text. `origin` names the text in errors.
    pub fn from_yaml_str(yaml: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_yml::from_str(yaml).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            source: e,
        })
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_yaml_str(&contents, &path.display().to_string())?;
        log::debug!(
            "Loaded source config from {} ({} BIOS, {} ROM entries)",
            path.display(),
            config.bios_subdirs.len(),
            config.roms_subdirs.len(),
        );
        Ok(config)
    }

    /// Set whether the source is read over SSH.
    pub fn with_remote_source(mut self, remote: bool) -> Self {
        self.remote_source = remote;
        self
    }

    pub fn is_remote(&self) -> bool {
        self.remote_source
    }

    fn prefix(&self, path: &str) -> String {
        if self.remote_source {
            format!("{}:{}", self.remote_hostname, path)
        } else {
            path.to_string()
        }
    }

    /// BIOS root as rsync should see it.
    pub fn bios_dir(&self) -> String {
        self.prefix(&self.source_bios_dir)
    }

    /// ROM root as rsync should see it.
    pub fn roms_dir(&self) -> String {
        self.prefix(&self.source_roms_dir)
    }

    /// Batocera artwork root as rsync should see it, if configured.
    pub fn batocera_art_dir(&self) -> Option<String> {
        self.source_batocera_art_dir
            .as_deref()
            .map(|dir| self.prefix(dir))
    }

    /// ROM root on the source host itself, never prefixed.
    pub fn source_roms_dir(&self) -> &str {
        &self.source_roms_dir
    }

    pub fn remote_hostname(&self) -> &str {
        &self.remote_hostname
    }

    /// BIOS subdirectory for `system`. Empty entries count as missing.
    pub fn bios_subdir(&self, system: System) -> Option<&str> {
        non_empty(self.bios_subdirs.get(&system))
    }

    /// ROM subdirectory for `system`. Empty entries count as missing.
    pub fn roms_subdir(&self, system: System) -> Option<&str> {
        non_empty(self.roms_subdirs.get(&system))
    }

    pub fn bios_subdirs(&self) -> &BTreeMap<System, String> {
        &self.bios_subdirs
    }

    pub fn roms_subdirs(&self) -> &BTreeMap<System, String> {
        &self.roms_subdirs
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "tests/source_config_tests.rs"]
mod tests;
