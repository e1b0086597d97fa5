use crate::FrontendError;
use crate::layout::{self, Layout, LayoutFrontend};

/// Every supported destination OS/application, in CLI listing order.
const ALL_KINDS: &[FrontendKind] = &[
    FrontendKind::Batocera,
    FrontendKind::Knulli,
    FrontendKind::EmuDeck,
    FrontendKind::EsDe,
    FrontendKind::MinUi,
    FrontendKind::MuOs,
    FrontendKind::Rocknix,
    FrontendKind::Onion,
    FrontendKind::Spruce,
];

/// Identifies a frontend by its CLI key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontendKind {
    Batocera,
    Knulli,
    EmuDeck,
    EsDe,
    MinUi,
    MuOs,
    Rocknix,
    Onion,
    Spruce,
}

impl FrontendKind {
    /// Lowercase key accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Batocera => "batocera",
            Self::Knulli => "knulli",
            Self::EmuDeck => "emudeck",
            Self::EsDe => "esde",
            Self::MinUi => "minui",
            Self::MuOs => "muos",
            Self::Rocknix => "rocknix",
            Self::Onion => "onion",
            Self::Spruce => "spruce",
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Self::Batocera => layout::BATOCERA,
            Self::Knulli => layout::KNULLI,
            Self::EmuDeck => layout::EMUDECK,
            Self::EsDe => layout::ESDE,
            Self::MinUi => layout::MINUI,
            Self::MuOs => layout::MUOS,
            Self::Rocknix => layout::ROCKNIX,
            Self::Onion => layout::ONION,
            Self::Spruce => layout::SPRUCE,
        }
    }

    /// Display name of the frontend (e.g., "ES-DE").
    pub fn name(&self) -> &'static str {
        self.layout().name
    }

    pub fn all() -> &'static [FrontendKind] {
        ALL_KINDS
    }

    /// Comma-separated list of every key, for help and error output.
    pub fn available() -> String {
        ALL_KINDS
            .iter()
            .map(FrontendKind::key)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build a frontend rooted at `destination_dir`.
    pub fn create(&self, destination_dir: impl Into<String>) -> LayoutFrontend {
        LayoutFrontend::new(self.layout(), destination_dir)
    }
}

impl std::fmt::Display for FrontendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for FrontendKind {
    type Err = FrontendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.key() == lower)
            .ok_or_else(|| FrontendError::Unknown(s.to_string()))
    }
}

/// Create a boxed frontend by CLI key (case-insensitive).
pub fn create(name: &str, destination_dir: &str) -> Result<Box<dyn crate::Frontend>, FrontendError> {
    let kind: FrontendKind = name.parse()?;
    Ok(Box::new(kind.create(destination_dir)))
}
