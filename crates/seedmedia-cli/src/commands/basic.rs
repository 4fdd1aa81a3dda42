//! Basic placeholder run.
//!
//! Fills in whatever is missing: zero-byte covers already in the artwork
//! directory are regenerated, absent targets are created, and existing
//! non-empty files are left untouched.

use anyhow::{Context, Result};
use seedmedia_backend_artwork::{generate_basic_artwork, CoverParams};
use seedmedia_backend_audio::{generate_placeholder_tone, ToneParams};
use seedmedia_spec::{expected_artworks, ArtworkDescriptor, GenerationError, PaletteMode};
use std::path::Path;

use super::{write_item, Produced, RunOptions};
use crate::layout::{basic_clip_name, empty_jpegs, has_content, MediaDirs};
use crate::report::{ItemRecord, MediaKind, Reporter, RunReport};

/// Run the basic generation pass.
///
/// # Returns
/// The run report. Per-item failures are recorded in it; only setup
/// failures (directories) return an error.
pub fn run(options: &RunOptions) -> Result<RunReport> {
    let config = &options.config;
    let dirs = MediaDirs::prepare(&options.root).with_context(|| {
        format!(
            "Failed to create media directories under {}",
            options.root.display()
        )
    })?;

    let mut reporter = Reporter::new(
        RunReport::new(
            "basic",
            config.seed,
            dirs.artwork.display().to_string(),
            dirs.audio.display().to_string(),
        ),
        options.json,
    );
    reporter.banner("SeedMedia Placeholder Generator");

    let params = CoverParams {
        width: config.basic.width,
        height: config.basic.height,
        quality: config.basic.quality,
        seed: config.seed,
        palette: PaletteMode::Random,
    };

    let empties = empty_jpegs(&dirs.artwork)
        .with_context(|| format!("Failed to scan {}", dirs.artwork.display()))?;
    if !empties.is_empty() {
        reporter.section("Regenerating empty artwork files");
        for name in &empties {
            reporter.record(cover_item(&dirs.artwork, name, &params));
        }
    }

    reporter.section("Generating album artwork");
    for name in expected_artworks() {
        if empties.iter().any(|e| e == name) {
            continue;
        }
        let record = if has_content(&dirs.artwork.join(name)) {
            ItemRecord::skipped(MediaKind::Artwork, *name)
        } else {
            cover_item(&dirs.artwork, name, &params)
        };
        reporter.record(record);
    }

    reporter.section("Generating placeholder audio clips");
    let tone = ToneParams::new(config.basic.clip_seconds as f64, config.sample_rate);
    for index in 1..=config.basic.clip_count {
        let name = basic_clip_name(index);
        let record = if has_content(&dirs.audio.join(&name)) {
            ItemRecord::skipped(MediaKind::Audio, name)
        } else {
            write_item(MediaKind::Audio, &dirs.audio, &name, || {
                let result =
                    generate_placeholder_tone(&tone).map_err(GenerationError::from_backend)?;
                Ok(Produced {
                    bytes: result.wav.wav_data,
                    hash: result.wav.pcm_hash,
                    genre: None,
                })
            })
        };
        reporter.record(record);
    }

    reporter.finish()
}

fn cover_item(dir: &Path, name: &str, params: &CoverParams) -> ItemRecord {
    write_item(MediaKind::Artwork, dir, name, || {
        let desc = ArtworkDescriptor::parse(name);
        let result =
            generate_basic_artwork(&desc, params).map_err(GenerationError::from_backend)?;
        Ok(Produced {
            bytes: result.jpeg_data,
            hash: result.hash,
            genre: None,
        })
    })
}
