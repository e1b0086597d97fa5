//! Core identifiers shared by every retro-sync crate: gaming systems,
//! ROM pack levels, and POSIX path helpers.

pub mod level;
pub mod path;
pub mod system;

pub use level::{Level, LevelParseError};
pub use path::{join_posix, with_trailing_slash};
pub use system::{System, SystemParseError};
