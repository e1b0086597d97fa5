//! Emulation frontend directory layouts.
//!
//! Each frontend maps a [`System`] to the folder it expects BIOS and ROM
//! files in, relative to a destination root. Layouts are plain data (see
//! [`tables`]); [`LayoutFrontend`] turns a layout plus a root into paths.

pub mod error;
pub mod kind;
pub mod layout;
pub mod tables;

pub use error::FrontendError;
pub use kind::{FrontendKind, create};
pub use layout::{BiosLayout, Layout, LayoutFrontend};

use retro_sync_core::System;
use tables::SubdirTable;

/// Trait for emulation frontends that receive BIOS and ROM files.
pub trait Frontend {
    fn name(&self) -> &'static str;

    /// Destination BIOS directory for `system`, if the frontend has one.
    fn bios_directory(&self, system: System) -> Option<String>;

    /// Destination ROM directory for `system`, if the frontend supports it.
    fn roms_directory(&self, system: System) -> Option<String>;

    /// The system → ROM subdirectory table backing `roms_directory`.
    fn roms_subdirs(&self) -> SubdirTable;

    /// Systems with a ROM directory, in table order.
    fn supported_systems(&self) -> Vec<System> {
        self.roms_subdirs().iter().map(|(system, _)| *system).collect()
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
