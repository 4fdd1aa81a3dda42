//! SeedMedia CLI - Placeholder media generation for a demo music store
//!
//! This binary writes album covers and audio clips under
//! `public/uploads/` so freshly seeded catalog data has media to serve.

mod cli_args;

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use cli_args::{Cli, CommonArgs, Commands};
use seedmedia_cli::commands::{self, RunOptions};
use seedmedia_spec::PaletteMode;

fn resolve(common: &CommonArgs, palette: Option<PaletteMode>) -> anyhow::Result<RunOptions> {
    RunOptions::resolve(
        Path::new(&common.root),
        common.config.as_deref().map(Path::new),
        common.seed,
        palette,
        common.json,
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Basic { common } => {
            resolve(&common, None).and_then(|options| commands::basic::run(&options))
        }
        Commands::Enhanced { common, palette } => resolve(&common, palette.map(Into::into))
            .and_then(|options| commands::enhanced::run(&options)),
    };

    // Per-item failures are in the report; only setup errors change the code
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli_args::PaletteArg;

    #[test]
    fn test_cli_parses_basic_defaults() {
        let cli = Cli::try_parse_from(["seedmedia", "basic"]).unwrap();
        match cli.command {
            Commands::Basic { common } => {
                assert_eq!(common.root, ".");
                assert!(common.config.is_none());
                assert!(common.seed.is_none());
                assert!(!common.json);
            }
            _ => panic!("expected basic command"),
        }
    }

    #[test]
    fn test_cli_parses_enhanced_with_flags() {
        let cli = Cli::try_parse_from([
            "seedmedia",
            "enhanced",
            "--root",
            "/srv/store",
            "--seed",
            "42",
            "--palette",
            "genre",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Enhanced { common, palette } => {
                assert_eq!(common.root, "/srv/store");
                assert_eq!(common.seed, Some(42));
                assert_eq!(palette, Some(PaletteArg::Genre));
                assert!(common.json);
            }
            _ => panic!("expected enhanced command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_palette() {
        let err = Cli::try_parse_from(["seedmedia", "enhanced", "--palette", "sepia"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_basic_has_no_palette_flag() {
        assert!(Cli::try_parse_from(["seedmedia", "basic", "--palette", "genre"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["seedmedia"]).is_err());
    }

    #[test]
    fn test_palette_arg_maps_to_mode() {
        assert_eq!(PaletteMode::from(PaletteArg::Random), PaletteMode::Random);
        assert_eq!(PaletteMode::from(PaletteArg::Genre), PaletteMode::Genre);
    }
}
