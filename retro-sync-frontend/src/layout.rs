use retro_sync_core::{System, join_posix};

use crate::Frontend;
use crate::tables::{self, SubdirTable};

/// Where a frontend expects BIOS files.
#[derive(Debug, Clone, Copy)]
pub enum BiosLayout {
    /// One shared folder for every system, relative to the destination root.
    Shared(&'static [&'static str]),
    /// One folder per system under `root`; systems missing from `table`
    /// have no BIOS destination.
    PerSystem {
        root: &'static [&'static str],
        table: SubdirTable,
    },
}

/// Declarative description of a frontend's directory layout.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub name: &'static str,
    pub bios: BiosLayout,
    /// Folders between the destination root and the per-system ROM folder.
    pub roms_root: &'static [&'static str],
    pub roms: SubdirTable,
}

/// A frontend rooted at a concrete destination directory.
///
/// The destination may be a local path or an rsync remote (`host:/path`).
#[derive(Debug, Clone)]
pub struct LayoutFrontend {
    layout: Layout,
    destination_dir: String,
}

impl LayoutFrontend {
    pub fn new(layout: Layout, destination_dir: impl Into<String>) -> Self {
        Self {
            layout,
            destination_dir: destination_dir.into(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn destination_dir(&self) -> &str {
        &self.destination_dir
    }

    fn under_root(&self, folders: &[&str], leaf: Option<&str>) -> String {
        join_posix(&self.destination_dir, folders.iter().copied().chain(leaf))
    }
}

impl Frontend for LayoutFrontend {
    fn name(&self) -> &'static str {
        self.layout.name
    }

    fn bios_directory(&self, system: System) -> Option<String> {
        match self.layout.bios {
            BiosLayout::Shared(folders) => Some(self.under_root(folders, None)),
            BiosLayout::PerSystem { root, table } => {
                let subdir = tables::lookup(table, system)?;
                Some(self.under_root(root, Some(subdir)))
            }
        }
    }

    fn roms_directory(&self, system: System) -> Option<String> {
        let subdir = tables::lookup(self.layout.roms, system)?;
        Some(self.under_root(self.layout.roms_root, Some(subdir)))
    }

    fn roms_subdirs(&self) -> SubdirTable {
        self.layout.roms
    }
}

pub const BATOCERA: Layout = Layout {
    name: "Batocera",
    bios: BiosLayout::Shared(&["bios"]),
    roms_root: &["roms"],
    roms: tables::BATOCERA_ROMS,
};

/// Knulli is Batocera-based and keeps its folder structure.
pub const KNULLI: Layout = Layout {
    name: "Knulli",
    ..BATOCERA
};

pub const EMUDECK: Layout = Layout {
    name: "EmuDeck",
    bios: BiosLayout::Shared(&["Emulation", "bios"]),
    roms_root: &["Emulation", "roms"],
    roms: tables::EMUDECK_ROMS,
};

pub const ESDE: Layout = Layout {
    name: "ES-DE",
    bios: BiosLayout::Shared(&["BIOS"]),
    roms_root: &["ROMs"],
    roms: tables::ESDE_ROMS,
};

pub const MINUI: Layout = Layout {
    name: "MinUI",
    bios: BiosLayout::PerSystem {
        root: &["Bios"],
        table: tables::MINUI_BIOS,
    },
    roms_root: &["Roms"],
    roms: tables::MINUI_ROMS,
};

pub const MUOS: Layout = Layout {
    name: "MuOS",
    bios: BiosLayout::Shared(&["MUOS", "Bios"]),
    roms_root: &["ROMS"],
    roms: tables::MUOS_ROMS,
};

/// ROCKNIX keeps system folders directly under the roms partition root.
pub const ROCKNIX: Layout = Layout {
    name: "ROCKNIX",
    bios: BiosLayout::Shared(&["bios"]),
    roms_root: &[],
    roms: tables::ESDE_ROMS,
};

pub const ONION: Layout = Layout {
    name: "Onion",
    bios: BiosLayout::Shared(&["BIOS"]),
    roms_root: &["Roms"],
    roms: tables::ONION_ROMS,
};

pub const SPRUCE: Layout = Layout {
    name: "Spruce",
    bios: BiosLayout::Shared(&["BIOS"]),
    roms_root: &["Roms"],
    roms: tables::SPRUCE_ROMS,
};
