//! CLI command implementations

pub mod basic;
pub mod enhanced;

use anyhow::{Context, Result};
use seedmedia_spec::{GenerationError, GeneratorConfig, PaletteMode};
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::{ItemRecord, MediaKind};

/// Settings resolved from flags and the optional config file.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Project root; media goes under `public/uploads/`.
    pub root: PathBuf,
    /// Effective configuration.
    pub config: GeneratorConfig,
    /// Print a JSON report instead of progress lines.
    pub json: bool,
}

impl RunOptions {
    /// Loads the config file (if any) and applies flag overrides on top.
    ///
    /// # Arguments
    /// * `root` - Project root directory
    /// * `config_path` - Optional JSON config file
    /// * `seed` - Seed override
    /// * `palette` - Enhanced palette override
    /// * `json` - Whether to print a JSON report
    pub fn resolve(
        root: &Path,
        config_path: Option<&Path>,
        seed: Option<u32>,
        palette: Option<PaletteMode>,
        json: bool,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => GeneratorConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if let Some(seed) = seed {
            config.seed = seed;
        }
        if let Some(palette) = palette {
            config.enhanced.palette = palette;
        }
        config.validate().context("Invalid configuration")?;

        Ok(Self {
            root: root.to_path_buf(),
            config,
            json,
        })
    }

    /// Default configuration rooted at `root`.
    pub fn with_defaults(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            config: GeneratorConfig::default(),
            json: false,
        }
    }
}

/// Encoded bytes plus what the report needs to know about them.
pub(crate) struct Produced {
    pub bytes: Vec<u8>,
    pub hash: String,
    pub genre: Option<&'static str>,
}

/// Runs `produce` and writes its output to `dir/file`, turning any failure
/// into a failed record.
pub(crate) fn write_item<F>(kind: MediaKind, dir: &Path, file: &str, produce: F) -> ItemRecord
where
    F: FnOnce() -> Result<Produced, GenerationError>,
{
    let outcome = produce().and_then(|produced| {
        if produced.bytes.is_empty() {
            return Err(GenerationError::new(
                "OUTPUT_001",
                "generator returned no data",
                "output",
            ));
        }
        let path = dir.join(file);
        fs::write(&path, &produced.bytes).map_err(|e| {
            GenerationError::new(
                "OUTPUT_002",
                format!("failed to write {}: {}", path.display(), e),
                "output",
            )
        })?;
        Ok(produced)
    });

    match outcome {
        Ok(produced) => {
            ItemRecord::generated(kind, file, produced.hash).with_genre(produced.genre)
        }
        Err(err) => ItemRecord::failed(kind, file, &err),
    }
}
