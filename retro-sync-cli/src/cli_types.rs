//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "retro-sync")]
#[command(about = "Copy BIOS and ROM files to emulation frontends", long_about = None)]
pub(crate) struct Cli {
    /// Source config file (default: ~/.config/retro-sync/source_config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Copy BIOS and ROM files for a ROM pack level into a frontend layout
    Copy {
        /// Destination OS/application (batocera, knulli, emudeck, esde, minui, muos, rocknix, onion, spruce)
        frontend: String,

        /// Destination root directory; use host:/path for a remote device
        destination_dir: String,

        /// ROM pack level (1-5 or level-1 through level-5)
        level: Option<String>,

        /// Print the rsync commands without running them
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Copy each ROM source folder's contents with a single trailing slash
        #[arg(long)]
        copy_source_dir: bool,

        /// Skip BIOS files
        #[arg(long)]
        skip_bios: bool,

        /// Skip ROM files
        #[arg(long)]
        skip_roms: bool,
    },

    /// Show the size of the source ROM folders for a level (runs du over ssh)
    #[command(visible_aliases = ["rom-sizes", "rom_sizes"])]
    Sizes {
        /// ROM pack level (1-5 or level-1 through level-5)
        level: Option<String>,

        /// Print the ssh command without running it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List supported frontends, levels, or systems
    List {
        #[arg(value_enum, default_value_t = ListTarget::Frontends)]
        target: ListTarget,

        /// Show ROM folders for this frontend (with `list systems`)
        #[arg(long)]
        frontend: Option<String>,
    },

    /// Inspect configuration and saved defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ListTarget {
    Frontends,
    Levels,
    Systems,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved source config and saved defaults
    Show,

    /// Print the source config and settings file paths
    Path,

    /// Save the level used when none is given (omit LEVEL to clear)
    SetLevel {
        level: Option<String>,
    },
}
