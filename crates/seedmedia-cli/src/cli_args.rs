//! CLI argument definitions for the SeedMedia command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand, ValueEnum};
use seedmedia_spec::PaletteMode;

/// SeedMedia - Placeholder album artwork and audio for the demo store
#[derive(Parser)]
#[command(name = "seedmedia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fill in missing covers and 440 Hz placeholder clips, keeping existing files
    Basic {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Regenerate every cover and genre-flavored melody clip
    Enhanced {
        #[command(flatten)]
        common: CommonArgs,

        /// How cover gradients pick their palette (overrides config)
        #[arg(long, value_enum)]
        palette: Option<PaletteArg>,
    },
}

/// Flags shared by both generation modes.
#[derive(Args, Debug, Clone)]
pub(crate) struct CommonArgs {
    /// Project root; media goes under public/uploads/
    #[arg(short, long, default_value = ".")]
    pub root: String,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base seed for random choices (overrides config)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Output a machine-readable JSON report (no colored output)
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaletteArg {
    Random,
    Genre,
}

impl From<PaletteArg> for PaletteMode {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Random => PaletteMode::Random,
            PaletteArg::Genre => PaletteMode::Genre,
        }
    }
}
