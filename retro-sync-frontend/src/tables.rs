//! Per-frontend subdirectory tables.
//!
//! Table order matters: it is the order `supported_systems()` reports.

use retro_sync_core::System;

/// A system → subdirectory table.
pub type SubdirTable = &'static [(System, &'static str)];

/// Batocera and Knulli (<https://wiki.batocera.org/systems>).
pub const BATOCERA_ROMS: SubdirTable = &[
    (System::ArcadeFinalBurnNeo, "fbneo"),
    (System::ArcadeMame2003Plus, "mame"),
    (System::Atari2600, "atari2600"),
    (System::Atari5200, "atari5200"),
    (System::Atari7800, "atari7800"),
    (System::AtariJaguar, "jaguar"),
    (System::AtariLynx, "lynx"),
    (System::CbsColecoVision, "colecovision"),
    (System::Commodore64, "c64"),
    (System::MicrosoftXbox, "xbox"),
    (System::MicrosoftXbox360, "xbox360"),
    (System::NecSuperGrafx, "supergrafx"),
    (System::NecTurboGrafxCd, "pcenginecd"),
    (System::NecTurboGrafx16, "pcengine"),
    (System::Nintendo3ds, "3ds"),
    (System::NintendoDs, "nds"),
    (System::NintendoFamicomDiskSystem, "fds"),
    (System::NintendoGameBoy, "gb"),
    (System::NintendoGameBoyAdvance, "gba"),
    (System::NintendoGameBoyColor, "gbc"),
    (System::NintendoGameCube, "gamecube"),
    (System::Nintendo64, "n64"),
    (System::NintendoNes, "nes"),
    (System::NintendoPokemonMini, "pokemini"),
    (System::NintendoSuperGameBoy, "sgb"),
    (System::NintendoSnes, "snes"),
    (System::NintendoSwitch, "switch"),
    (System::NintendoWii, "wii"),
    (System::NintendoWiiU, "wiiu"),
    (System::Pico8, "pico8"),
    (System::SegaDreamcast, "dreamcast"),
    (System::SegaGameGear, "gamegear"),
    (System::SegaGenesis, "megadrive"),
    (System::SegaMasterSystem, "mastersystem"),
    (System::Sega32x, "sega32x"),
    (System::SegaCd, "segacd"),
    (System::SegaSaturn, "saturn"),
    (System::SegaSg1000, "sg1000"),
    (System::SnkNeoGeo, "neogeo"),
    (System::SnkNeoGeoCd, "neogeocd"),
    (System::SnkNeoGeoPocket, "ngp"),
    (System::SnkNeoGeoPocketColor, "ngpc"),
    (System::SonyPlayStation, "psx"),
    (System::SonyPlayStation2, "ps2"),
    (System::SonyPlayStationPortable, "psp"),
    (System::SonyPlayStationVita, "psvita"),
];

/// EmuDeck (<https://emudeck.github.io>).
pub const EMUDECK_ROMS: SubdirTable = &[
    (System::ArcadeMame2003Plus, "arcade"),
    (System::Atari2600, "atari2600"),
    (System::Atari5200, "atari5200"),
    (System::Atari7800, "atari7800"),
    (System::AtariJaguar, "atarijaguar"),
    (System::AtariLynx, "atarilynx"),
    (System::CbsColecoVision, "colecovision"),
    (System::Commodore64, "c64"),
    (System::NecTurboGrafxCd, "tg-cd"),
    (System::NecTurboGrafx16, "tg16"),
    (System::Nintendo3ds, "n3ds"),
    (System::NintendoDs, "nds"),
    (System::NintendoFamicomDiskSystem, "famicom"),
    (System::NintendoGameBoy, "gb"),
    (System::NintendoGameBoyAdvance, "gba"),
    (System::NintendoGameBoyColor, "gbc"),
    (System::NintendoGameCube, "gamecube"),
    (System::Nintendo64, "n64"),
    (System::NintendoNes, "nes"),
    (System::NintendoPokemonMini, "pokemini"),
    (System::NintendoSnes, "snes"),
    (System::NintendoSwitch, "switch"),
    (System::NintendoWii, "wii"),
    (System::NintendoWiiU, "wiiu/roms"),
    (System::Pico8, "pico8"),
    (System::SegaDreamcast, "dreamcast"),
    (System::SegaGameGear, "gamegear"),
    (System::SegaGenesis, "genesis"),
    (System::SegaMasterSystem, "mastersystem"),
    (System::Sega32x, "sega32x"),
    (System::SegaCd, "segacd"),
    (System::SegaSaturn, "saturn"),
    (System::SegaSg1000, "sg-1000"),
    (System::SnkNeoGeo, "neogeo"),
    (System::SnkNeoGeoCd, "neogeocd"),
    (System::SnkNeoGeoPocket, "ngp"),
    (System::SnkNeoGeoPocketColor, "ngpc"),
    (System::SonyPlayStation, "psx"),
    (System::SonyPlayStation2, "ps2"),
    (System::SonyPlayStationPortable, "psp"),
    (System::SonyPlayStationVita, "psvita"),
];

/// ES-DE (<https://www.es-de.org>). ROCKNIX reuses this table.
pub const ESDE_ROMS: SubdirTable = &[
    (System::ArcadeFinalBurnNeo, "fbneo"),
    (System::ArcadeMame2003Plus, "arcade"),
    (System::Atari2600, "atari2600"),
    (System::Atari5200, "atari5200"),
    (System::Atari7800, "atari7800"),
    (System::AtariJaguar, "atarijaguar"),
    (System::AtariLynx, "atarilynx"),
    (System::CbsColecoVision, "colecovision"),
    (System::Commodore64, "c64"),
    (System::NecTurboGrafxCd, "tg-cd"),
    (System::NecTurboGrafx16, "tg16"),
    (System::Nintendo3ds, "n3ds"),
    (System::NintendoDs, "nds"),
    (System::NintendoFamicomDiskSystem, "fds"),
    (System::NintendoGameBoy, "gb"),
    (System::NintendoGameBoyAdvance, "gba"),
    (System::NintendoGameBoyColor, "gbc"),
    (System::NintendoGameCube, "gc"),
    (System::Nintendo64, "n64"),
    (System::NintendoNes, "nes"),
    (System::NintendoPokemonMini, "pokemini"),
    (System::NintendoSnes, "snes"),
    (System::NintendoSwitch, "switch"),
    (System::NintendoWii, "wii"),
    (System::NintendoWiiU, "wiiu"),
    (System::Pico8, "pico8"),
    (System::SegaDreamcast, "dreamcast"),
    (System::SegaGameGear, "gamegear"),
    (System::SegaGenesis, "genesis"),
    (System::SegaMasterSystem, "mastersystem"),
    (System::Sega32x, "sega32x"),
    (System::SegaCd, "segacd"),
    (System::SegaSaturn, "saturn"),
    (System::SegaSg1000, "sg-1000"),
    (System::SnkNeoGeo, "neogeo"),
    (System::SnkNeoGeoCd, "neogeocd"),
    (System::SnkNeoGeoPocket, "ngp"),
    (System::SnkNeoGeoPocketColor, "ngpc"),
    (System::SonyPlayStation, "psx"),
    (System::SonyPlayStation2, "ps2"),
    (System::SonyPlayStationPortable, "psp"),
    (System::SonyPlayStationVita, "psvita"),
];

/// MinUI BIOS folders under `Bios/`. Dreamcast files sit in `Bios/` itself.
pub const MINUI_BIOS: SubdirTable = &[
    (System::NecTurboGrafxCd, "PCE"),
    (System::NintendoGameBoyAdvance, "GBA"),
    (System::NintendoGameBoyColor, "GBC"),
    (System::NintendoGameBoy, "GB"),
    (System::NintendoPokemonMini, "PKM"),
    (System::NintendoSuperGameBoy, "SGB"),
    (System::SegaDreamcast, "."),
    (System::SonyPlayStation, "PS"),
];

/// MinUI (<https://github.com/shauninman/MinUI>).
pub const MINUI_ROMS: SubdirTable = &[
    (System::Pico8, "Pico-8 (P8)"),
    (System::NecTurboGrafx16, "TurboGrafx-16 (PCE)"),
    (System::NintendoGameBoy, "Game Boy (GB)"),
    (System::NintendoGameBoyAdvance, "Game Boy Advance (GBA)"),
    (System::NintendoGameBoyColor, "Game Boy Color (GBC)"),
    (System::NintendoNes, "Nintendo Entertainment System (FC)"),
    (System::NintendoPokemonMini, "Pokémon mini (PKM)"),
    (System::NintendoSnes, "Super Nintendo Entertainment System (SFC)"),
    (System::NintendoVirtualBoy, "Virtual Boy (VB)"),
    (System::SegaGameGear, "Sega Game Gear (GG)"),
    (System::SegaGenesis, "Sega Genesis (MD)"),
    (System::SegaMasterSystem, "Sega Master System (SMS)"),
    (System::SegaCd, "Sega CD (MD)"),
    (System::SnkNeoGeoPocketColor, "Neo Geo Pocket Color (NGPC)"),
    (System::SonyPlayStation, "Sony PlayStation (PS)"),
];

/// MuOS (<https://muos.dev>).
pub const MUOS_ROMS: SubdirTable = &[
    (System::Pico8, "PICO-8"),
    (System::NecTurboGrafx16, "NEC PC Engine"),
    (System::NecTurboGrafxCd, "NEC PC Engine CD"),
    (System::NintendoGameBoy, "Nintendo Game Boy"),
    (System::NintendoGameBoyAdvance, "Nintendo Game Boy Advance"),
    (System::NintendoGameBoyColor, "Nintendo Game Boy Color"),
    (System::NintendoNes, "Nintendo NES-Famicom"),
    (System::NintendoSnes, "Nintendo SNES-SFC"),
    (System::Sega32x, "Sega 32X"),
    (System::SegaCd, "Sega Mega CD - Sega CD"),
    (System::SegaGameGear, "Sega Game Gear"),
    (System::SegaGenesis, "Sega Mega Drive - Genesis"),
    (System::SegaMasterSystem, "Sega Master System"),
    (System::SnkNeoGeo, "SNK Neo Geo"),
    (System::SnkNeoGeoCd, "SNK Neo Geo CD"),
    (System::SnkNeoGeoPocketColor, "SNK Neo Geo Pocket - Color"),
    (System::SonyPlayStation, "Sony PlayStation"),
];

/// Onion (<https://onionui.github.io>).
pub const ONION_ROMS: SubdirTable = &[
    (System::Atari2600, "ATARI"),
    (System::Atari5200, "FIFTYTWOHUNDRED"),
    (System::Atari7800, "SEVENTYEIGHTHUNDRED"),
    (System::AtariLynx, "LYNX"),
    (System::CbsColecoVision, "COLECO"),
    (System::Commodore64, "COMMODORE"),
    (System::ArcadeMame2003Plus, "ARCADE"),
    (System::NecSuperGrafx, "SGFX"),
    (System::NecTurboGrafx16, "PCE"),
    (System::NecTurboGrafxCd, "PCECD"),
    (System::Nintendo64, "N64"),
    (System::NintendoFamicomDiskSystem, "FDS"),
    (System::NintendoDs, "NDS"),
    (System::NintendoGameBoy, "GB"),
    (System::NintendoGameBoyAdvance, "GBA"),
    (System::NintendoGameBoyColor, "GBC"),
    (System::NintendoNes, "FC"),
    (System::NintendoPokemonMini, "POKE"),
    (System::NintendoSuperGameBoy, "SGB"),
    (System::NintendoSnes, "SFC"),
    (System::Pico8, "PICO"),
    (System::Sega32x, "THIRTYTWOX"),
    (System::SegaCd, "SEGACD"),
    (System::SegaDreamcast, "DC"),
    (System::SegaGameGear, "GG"),
    (System::SegaGenesis, "MD"),
    (System::SegaMasterSystem, "MS"),
    (System::SegaSg1000, "SEGASGONE"),
    (System::SnkNeoGeo, "NEOGEO"),
    (System::SnkNeoGeoCd, "NEOCD"),
    (System::SnkNeoGeoPocket, "NGP"),
    (System::SnkNeoGeoPocketColor, "NGPC"),
    (System::SonyPlayStation, "PS"),
    (System::SonyPlayStationPortable, "PSP"),
];

/// Spruce (<https://spruceui.github.io>). Onion's layout with a few
/// renamed folders.
pub const SPRUCE_ROMS: SubdirTable = &[
    (System::Atari2600, "ATARI"),
    (System::Atari5200, "FIFTYTWOHUNDRED"),
    (System::Atari7800, "SEVENTYEIGHTHUNDRED"),
    (System::AtariLynx, "LYNX"),
    (System::CbsColecoVision, "COLECO"),
    (System::Commodore64, "COMMODORE"),
    (System::ArcadeMame2003Plus, "MAME2003PLUS"),
    (System::NecSuperGrafx, "SGFX"),
    (System::NecTurboGrafx16, "PCE"),
    (System::NecTurboGrafxCd, "PCECD"),
    (System::Nintendo64, "N64"),
    (System::NintendoFamicomDiskSystem, "FDS"),
    (System::NintendoDs, "NDS"),
    (System::NintendoGameBoy, "GB"),
    (System::NintendoGameBoyAdvance, "GBA"),
    (System::NintendoGameBoyColor, "GBC"),
    (System::NintendoNes, "FC"),
    (System::NintendoPokemonMini, "POKE"),
    (System::NintendoSuperGameBoy, "SGB"),
    (System::NintendoSnes, "SFC"),
    (System::Pico8, "PICO8"),
    (System::Sega32x, "THIRTYTWOX"),
    (System::SegaCd, "SEGACD"),
    (System::SegaDreamcast, "DC"),
    (System::SegaGameGear, "GG"),
    (System::SegaGenesis, "MD"),
    (System::SegaMasterSystem, "MS"),
    (System::SegaSg1000, "SEGASGONE"),
    (System::SnkNeoGeo, "NEOGEO"),
    (System::SnkNeoGeoCd, "NEOCD"),
    (System::SnkNeoGeoPocket, "NGP"),
    (System::SnkNeoGeoPocketColor, "NGPC"),
    (System::SonyPlayStation, "PS"),
    (System::SonyPlayStationPortable, "PSP"),
];

/// Look up `system` in `table`.
pub fn lookup(table: SubdirTable, system: System) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == system)
        .map(|(_, subdir)| *subdir)
}
