//! ROM pack levels: cumulative, curated subsets of systems.
//!
//! Level 1 covers the small 8/16-bit libraries every handheld can hold.
//! Each higher level adds the next generation of disc-based systems on top
//! of everything below it.

use crate::System;

const LEVEL_1_SYSTEMS: &[System] = &[
    System::ArcadeFinalBurnNeo,
    System::Pico8,
    System::NecTurboGrafx16,
    System::NecTurboGrafxCd,
    System::NintendoGameBoy,
    System::NintendoGameBoyAdvance,
    System::NintendoGameBoyColor,
    System::NintendoNes,
    System::NintendoSnes,
    System::Sega32x,
    System::SegaCd,
    System::SegaGameGear,
    System::SegaGenesis,
    System::SnkNeoGeoPocketColor,
];

const LEVEL_2_ADDITIONS: &[System] = &[System::SonyPlayStation];

const LEVEL_3_ADDITIONS: &[System] = &[
    System::Nintendo64,
    System::SegaDreamcast,
    System::SegaSaturn,
    System::SnkNeoGeoCd,
];

const LEVEL_4_ADDITIONS: &[System] = &[System::NintendoGameCube, System::SonyPlayStation2];

const LEVEL_5_ADDITIONS: &[System] = &[
    System::NintendoSwitch,
    System::NintendoWiiU,
    System::SonyPlayStation3,
];

const ALL_LEVELS: &[Level] = &[
    Level::One,
    Level::Two,
    Level::Three,
    Level::Four,
    Level::Five,
];

/// A ROM pack level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Level {
    /// Numeric tier, 1 through 5.
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Systems only this level adds on top of the previous one.
    pub fn additions(&self) -> &'static [System] {
        match self {
            Self::One => LEVEL_1_SYSTEMS,
            Self::Two => LEVEL_2_ADDITIONS,
            Self::Three => LEVEL_3_ADDITIONS,
            Self::Four => LEVEL_4_ADDITIONS,
            Self::Five => LEVEL_5_ADDITIONS,
        }
    }

    /// Every system in this level, in copy order.
    pub fn systems(&self) -> Vec<System> {
        ALL_LEVELS
            .iter()
            .take_while(|level| *level <= self)
            .flat_map(|level| level.additions().iter().copied())
            .collect()
    }

    pub fn all() -> &'static [Level] {
        ALL_LEVELS
    }

    /// Parse a level name such as `3`, `level-3` or `LEVEL_3`.
    ///
    /// Every `level-` and `level_` occurrence is removed before matching,
    /// so `level3` is rejected.
    pub fn parse(input: &str) -> Result<Level, LevelParseError> {
        let normalized = input
            .to_lowercase()
            .replace("level-", "")
            .replace("level_", "");
        match normalized.as_str() {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            _ => Err(LevelParseError(input.to_string())),
        }
    }

    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level-{}", self.number())
    }
}

impl std::str::FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error returned for an unrecognized ROM pack level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a supported ROM pack name.")]
pub struct LevelParseError(pub String);

#[cfg(test)]
#[path = "tests/level_tests.rs"]
mod tests;
