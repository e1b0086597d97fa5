use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Gaming system identifiers for every console the tool knows how to copy.
///
/// Each system carries a canonical snake_case id (used as the key in source
/// config files), a display name, a manufacturer, and aliases for CLI input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum System {
    // Arcade
    ArcadeFinalBurnNeo,
    ArcadeMame,
    ArcadeMame2003Plus,

    // Atari
    Atari2600,
    Atari5200,
    Atari7800,
    AtariJaguar,
    AtariLynx,

    CbsColecoVision,
    Commodore64,

    // Microsoft
    MicrosoftXbox,
    MicrosoftXbox360,

    // NEC
    NecSuperGrafx,
    NecTurboGrafx16,
    NecTurboGrafxCd,

    // Nintendo
    Nintendo3ds,
    Nintendo64,
    NintendoDs,
    NintendoFamicomDiskSystem,
    NintendoGameBoyAdvance,
    NintendoGameBoyColor,
    NintendoGameBoy,
    NintendoGameCube,
    NintendoNes,
    NintendoPokemonMini,
    NintendoSnes,
    NintendoSuperGameBoy,
    NintendoSwitch,
    NintendoVirtualBoy,
    NintendoWiiU,
    NintendoWii,

    Pico8,

    // Sega
    Sega32x,
    SegaCd,
    SegaDreamcast,
    SegaGameGear,
    SegaGenesis,
    SegaMasterSystem,
    SegaNaomi,
    SegaSaturn,
    SegaSg1000,

    // SNK
    SnkNeoGeo,
    SnkNeoGeoCd,
    SnkNeoGeoPocket,
    SnkNeoGeoPocketColor,

    // Sony
    SonyPlayStation2,
    SonyPlayStation3,
    SonyPlayStationPortable,
    SonyPlayStationVita,
    SonyPlayStation,
}

/// All system variants in declaration order.
const ALL_SYSTEMS: &[System] = &[
    System::ArcadeFinalBurnNeo,
    System::ArcadeMame,
    System::ArcadeMame2003Plus,
    System::Atari2600,
    System::Atari5200,
    System::Atari7800,
    System::AtariJaguar,
    System::AtariLynx,
    System::CbsColecoVision,
    System::Commodore64,
    System::MicrosoftXbox,
    System::MicrosoftXbox360,
    System::NecSuperGrafx,
    System::NecTurboGrafx16,
    System::NecTurboGrafxCd,
    System::Nintendo3ds,
    System::Nintendo64,
    System::NintendoDs,
    System::NintendoFamicomDiskSystem,
    System::NintendoGameBoyAdvance,
    System::NintendoGameBoyColor,
    System::NintendoGameBoy,
    System::NintendoGameCube,
    System::NintendoNes,
    System::NintendoPokemonMini,
    System::NintendoSnes,
    System::NintendoSuperGameBoy,
    System::NintendoSwitch,
    System::NintendoVirtualBoy,
    System::NintendoWiiU,
    System::NintendoWii,
    System::Pico8,
    System::Sega32x,
    System::SegaCd,
    System::SegaDreamcast,
    System::SegaGameGear,
    System::SegaGenesis,
    System::SegaMasterSystem,
    System::SegaNaomi,
    System::SegaSaturn,
    System::SegaSg1000,
    System::SnkNeoGeo,
    System::SnkNeoGeoCd,
    System::SnkNeoGeoPocket,
    System::SnkNeoGeoPocketColor,
    System::SonyPlayStation2,
    System::SonyPlayStation3,
    System::SonyPlayStationPortable,
    System::SonyPlayStationVita,
    System::SonyPlayStation,
];

impl System {
    /// Canonical identifier used in config files and log messages.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ArcadeFinalBurnNeo => "arcade_finalburnneo",
            Self::ArcadeMame => "arcade_mame",
            Self::ArcadeMame2003Plus => "arcade_mame2003plus",
            Self::Atari2600 => "atari_2600",
            Self::Atari5200 => "atari_5200",
            Self::Atari7800 => "atari_7800",
            Self::AtariJaguar => "atari_jaguar",
            Self::AtariLynx => "atari_lynx",
            Self::CbsColecoVision => "cbs_colecovision",
            Self::Commodore64 => "commodore_64",
            Self::MicrosoftXbox => "microsoft_xbox",
            Self::MicrosoftXbox360 => "microsoft_xbox_360",
            Self::NecSuperGrafx => "nec_supergrafx",
            Self::NecTurboGrafx16 => "nec_turbografx_16",
            Self::NecTurboGrafxCd => "nec_turbografx_cd",
            Self::Nintendo3ds => "nintendo_3ds",
            Self::Nintendo64 => "nintendo_64",
            Self::NintendoDs => "nintendo_ds",
            Self::NintendoFamicomDiskSystem => "nintendo_famicom_disk_system",
            Self::NintendoGameBoyAdvance => "nintendo_game_boy_advance",
            Self::NintendoGameBoyColor => "nintendo_game_boy_color",
            Self::NintendoGameBoy => "nintendo_game_boy",
            Self::NintendoGameCube => "nintendo_gamecube",
            Self::NintendoNes => "nintendo_nes",
            Self::NintendoPokemonMini => "nintendo_pokemon_mini",
            Self::NintendoSnes => "nintendo_snes",
            Self::NintendoSuperGameBoy => "nintendo_super_game_boy",
            Self::NintendoSwitch => "nintendo_switch",
            Self::NintendoVirtualBoy => "nintendo_virtual_boy",
            Self::NintendoWiiU => "nintendo_wiiu",
            Self::NintendoWii => "nintendo_wii",
            Self::Pico8 => "pico_8",
            Self::Sega32x => "sega_32x",
            Self::SegaCd => "sega_cd",
            Self::SegaDreamcast => "sega_dreamcast",
            Self::SegaGameGear => "sega_game_gear",
            Self::SegaGenesis => "sega_genesis",
            Self::SegaMasterSystem => "sega_master_system",
            Self::SegaNaomi => "sega_naomi",
            Self::SegaSaturn => "sega_saturn",
            Self::SegaSg1000 => "sega_sg_1000",
            Self::SnkNeoGeo => "snk_neo_geo",
            Self::SnkNeoGeoCd => "snk_neo_geo_cd",
            Self::SnkNeoGeoPocket => "snk_neo_geo_pocket",
            Self::SnkNeoGeoPocketColor => "snk_neo_geo_pocket_color",
            Self::SonyPlayStation2 => "sony_playstation_2",
            Self::SonyPlayStation3 => "sony_playstation_3",
            Self::SonyPlayStationPortable => "sony_playstation_portable",
            Self::SonyPlayStationVita => "sony_playstation_vita",
            Self::SonyPlayStation => "sony_playstation",
        }
    }

    /// Full display name for the system.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ArcadeFinalBurnNeo => "Arcade (FinalBurn Neo)",
            Self::ArcadeMame => "Arcade (MAME)",
            Self::ArcadeMame2003Plus => "Arcade (MAME 2003-Plus)",
            Self::Atari2600 => "Atari 2600",
            Self::Atari5200 => "Atari 5200",
            Self::Atari7800 => "Atari 7800",
            Self::AtariJaguar => "Atari Jaguar",
            Self::AtariLynx => "Atari Lynx",
            Self::CbsColecoVision => "ColecoVision",
            Self::Commodore64 => "Commodore 64",
            Self::MicrosoftXbox => "Microsoft Xbox",
            Self::MicrosoftXbox360 => "Microsoft Xbox 360",
            Self::NecSuperGrafx => "NEC SuperGrafx",
            Self::NecTurboGrafx16 => "NEC TurboGrafx-16 / PC Engine",
            Self::NecTurboGrafxCd => "NEC TurboGrafx-CD / PC Engine CD",
            Self::Nintendo3ds => "Nintendo 3DS",
            Self::Nintendo64 => "Nintendo 64",
            Self::NintendoDs => "Nintendo DS",
            Self::NintendoFamicomDiskSystem => "Famicom Disk System",
            Self::NintendoGameBoyAdvance => "Game Boy Advance",
            Self::NintendoGameBoyColor => "Game Boy Color",
            Self::NintendoGameBoy => "Game Boy",
            Self::NintendoGameCube => "Nintendo GameCube",
            Self::NintendoNes => "Nintendo Entertainment System",
            Self::NintendoPokemonMini => "Pokémon mini",
            Self::NintendoSnes => "Super Nintendo Entertainment System",
            Self::NintendoSuperGameBoy => "Super Game Boy",
            Self::NintendoSwitch => "Nintendo Switch",
            Self::NintendoVirtualBoy => "Virtual Boy",
            Self::NintendoWiiU => "Nintendo Wii U",
            Self::NintendoWii => "Nintendo Wii",
            Self::Pico8 => "PICO-8",
            Self::Sega32x => "Sega 32X",
            Self::SegaCd => "Sega CD / Mega CD",
            Self::SegaDreamcast => "Sega Dreamcast",
            Self::SegaGameGear => "Sega Game Gear",
            Self::SegaGenesis => "Sega Genesis / Mega Drive",
            Self::SegaMasterSystem => "Sega Master System",
            Self::SegaNaomi => "Sega NAOMI",
            Self::SegaSaturn => "Sega Saturn",
            Self::SegaSg1000 => "Sega SG-1000",
            Self::SnkNeoGeo => "SNK Neo Geo",
            Self::SnkNeoGeoCd => "SNK Neo Geo CD",
            Self::SnkNeoGeoPocket => "SNK Neo Geo Pocket",
            Self::SnkNeoGeoPocketColor => "SNK Neo Geo Pocket Color",
            Self::SonyPlayStation2 => "Sony PlayStation 2",
            Self::SonyPlayStation3 => "Sony PlayStation 3",
            Self::SonyPlayStationPortable => "Sony PlayStation Portable",
            Self::SonyPlayStationVita => "Sony PlayStation Vita",
            Self::SonyPlayStation => "Sony PlayStation",
        }
    }

    /// Manufacturer (or platform family for arcade and fantasy consoles).
    pub fn manufacturer(&self) -> &'static str {
        match self {
            Self::ArcadeFinalBurnNeo | Self::ArcadeMame | Self::ArcadeMame2003Plus => "Arcade",

            Self::Atari2600
            | Self::Atari5200
            | Self::Atari7800
            | Self::AtariJaguar
            | Self::AtariLynx => "Atari",

            Self::CbsColecoVision => "Coleco",
            Self::Commodore64 => "Commodore",

            Self::MicrosoftXbox | Self::MicrosoftXbox360 => "Microsoft",

            Self::NecSuperGrafx | Self::NecTurboGrafx16 | Self::NecTurboGrafxCd => "NEC",

            Self::Nintendo3ds
            | Self::Nintendo64
            | Self::NintendoDs
            | Self::NintendoFamicomDiskSystem
            | Self::NintendoGameBoyAdvance
            | Self::NintendoGameBoyColor
            | Self::NintendoGameBoy
            | Self::NintendoGameCube
            | Self::NintendoNes
            | Self::NintendoPokemonMini
            | Self::NintendoSnes
            | Self::NintendoSuperGameBoy
            | Self::NintendoSwitch
            | Self::NintendoVirtualBoy
            | Self::NintendoWiiU
            | Self::NintendoWii => "Nintendo",

            Self::Pico8 => "Lexaloffle",

            Self::Sega32x
            | Self::SegaCd
            | Self::SegaDreamcast
            | Self::SegaGameGear
            | Self::SegaGenesis
            | Self::SegaMasterSystem
            | Self::SegaNaomi
            | Self::SegaSaturn
            | Self::SegaSg1000 => "Sega",

            Self::SnkNeoGeo
            | Self::SnkNeoGeoCd
            | Self::SnkNeoGeoPocket
            | Self::SnkNeoGeoPocketColor => "SNK",

            Self::SonyPlayStation2
            | Self::SonyPlayStation3
            | Self::SonyPlayStationPortable
            | Self::SonyPlayStationVita
            | Self::SonyPlayStation => "Sony",
        }
    }

    /// All accepted names for this system (case-insensitive matching).
    ///
    /// The canonical id always comes first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::ArcadeFinalBurnNeo => &["arcade_finalburnneo", "fbneo", "finalburnneo"],
            Self::ArcadeMame => &["arcade_mame", "mame"],
            Self::ArcadeMame2003Plus => &["arcade_mame2003plus", "mame2003plus", "mame2003"],
            Self::Atari2600 => &["atari_2600", "atari2600", "2600"],
            Self::Atari5200 => &["atari_5200", "atari5200", "5200"],
            Self::Atari7800 => &["atari_7800", "atari7800", "7800"],
            Self::AtariJaguar => &["atari_jaguar", "jaguar", "atarijaguar"],
            Self::AtariLynx => &["atari_lynx", "lynx", "atarilynx"],
            Self::CbsColecoVision => &["cbs_colecovision", "colecovision", "coleco"],
            Self::Commodore64 => &["commodore_64", "c64"],
            Self::MicrosoftXbox => &["microsoft_xbox", "xbox"],
            Self::MicrosoftXbox360 => &["microsoft_xbox_360", "xbox360", "x360"],
            Self::NecSuperGrafx => &["nec_supergrafx", "supergrafx", "sgfx"],
            Self::NecTurboGrafx16 => &["nec_turbografx_16", "tg16", "pcengine", "pce"],
            Self::NecTurboGrafxCd => &["nec_turbografx_cd", "tg-cd", "pcenginecd", "pcecd"],
            Self::Nintendo3ds => &["nintendo_3ds", "3ds", "n3ds"],
            Self::Nintendo64 => &["nintendo_64", "n64"],
            Self::NintendoDs => &["nintendo_ds", "nds", "ds"],
            Self::NintendoFamicomDiskSystem => &["nintendo_famicom_disk_system", "fds"],
            Self::NintendoGameBoyAdvance => &["nintendo_game_boy_advance", "gba"],
            Self::NintendoGameBoyColor => &["nintendo_game_boy_color", "gbc"],
            Self::NintendoGameBoy => &["nintendo_game_boy", "gb", "gameboy"],
            Self::NintendoGameCube => &["nintendo_gamecube", "gamecube", "gc", "ngc"],
            Self::NintendoNes => &["nintendo_nes", "nes", "famicom", "fc"],
            Self::NintendoPokemonMini => &["nintendo_pokemon_mini", "pokemini"],
            Self::NintendoSnes => &["nintendo_snes", "snes", "sfc"],
            Self::NintendoSuperGameBoy => &["nintendo_super_game_boy", "sgb"],
            Self::NintendoSwitch => &["nintendo_switch", "switch"],
            Self::NintendoVirtualBoy => &["nintendo_virtual_boy", "virtualboy", "vb"],
            Self::NintendoWiiU => &["nintendo_wiiu", "wiiu"],
            Self::NintendoWii => &["nintendo_wii", "wii"],
            Self::Pico8 => &["pico_8", "pico8", "pico-8"],
            Self::Sega32x => &["sega_32x", "32x", "sega32x"],
            Self::SegaCd => &["sega_cd", "segacd", "megacd"],
            Self::SegaDreamcast => &["sega_dreamcast", "dreamcast", "dc"],
            Self::SegaGameGear => &["sega_game_gear", "gamegear", "gg"],
            Self::SegaGenesis => &["sega_genesis", "genesis", "megadrive", "md"],
            Self::SegaMasterSystem => &["sega_master_system", "mastersystem", "sms"],
            Self::SegaNaomi => &["sega_naomi", "naomi"],
            Self::SegaSaturn => &["sega_saturn", "saturn"],
            Self::SegaSg1000 => &["sega_sg_1000", "sg1000", "sg-1000"],
            Self::SnkNeoGeo => &["snk_neo_geo", "neogeo"],
            Self::SnkNeoGeoCd => &["snk_neo_geo_cd", "neogeocd"],
            Self::SnkNeoGeoPocket => &["snk_neo_geo_pocket", "ngp"],
            Self::SnkNeoGeoPocketColor => &["snk_neo_geo_pocket_color", "ngpc"],
            Self::SonyPlayStation2 => &["sony_playstation_2", "ps2"],
            Self::SonyPlayStation3 => &["sony_playstation_3", "ps3"],
            Self::SonyPlayStationPortable => &["sony_playstation_portable", "psp"],
            Self::SonyPlayStationVita => &["sony_playstation_vita", "psvita", "vita"],
            Self::SonyPlayStation => &["sony_playstation", "psx", "ps1"],
        }
    }

    /// Look up a system by its exact canonical id.
    pub fn from_id(id: &str) -> Option<System> {
        ALL_SYSTEMS.iter().copied().find(|s| s.id() == id)
    }

    /// All 50 system variants.
    pub fn all() -> &'static [System] {
        ALL_SYSTEMS
    }
}

impl std::fmt::Display for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `System`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown system: '{0}'")]
pub struct SystemParseError(pub String);

impl std::str::FromStr for System {
    type Err = SystemParseError;

    /// Parse a system from its id or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_SYSTEMS
            .iter()
            .copied()
            .find(|system| system.aliases().contains(&lower.as_str()))
            .ok_or_else(|| SystemParseError(s.to_string()))
    }
}

// Config files key their maps by canonical id, so serde uses `id()` only.
impl Serialize for System {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for System {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        System::from_id(&id)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown system id '{id}'")))
    }
}

#[cfg(test)]
#[path = "tests/system_tests.rs"]
mod tests;
