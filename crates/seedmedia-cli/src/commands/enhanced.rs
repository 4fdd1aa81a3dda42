//! Enhanced run.
//!
//! Rewrites every target cover and every melody clip, whether or not the
//! files already exist.

use anyhow::{Context, Result};
use seedmedia_backend_artwork::{generate_enhanced_artwork, CoverParams};
use seedmedia_backend_audio::{generate_melody, MelodyParams};
use seedmedia_spec::{expected_artworks, ArtworkDescriptor, GenerationError, ENHANCED_GENRE_CYCLE};

use super::{write_item, Produced, RunOptions};
use crate::layout::{enhanced_clip_name, MediaDirs};
use crate::report::{MediaKind, Reporter, RunReport};

/// Genre for the 1-based clip `index`.
pub fn genre_for_clip(index: u32) -> &'static str {
    let slot = (index.max(1) - 1) as usize % ENHANCED_GENRE_CYCLE.len();
    ENHANCED_GENRE_CYCLE[slot]
}

/// Run the enhanced generation pass.
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
            "enhanced",
            config.seed,
            dirs.artwork.display().to_string(),
            dirs.audio.display().to_string(),
        ),
        options.json,
    );
    reporter.banner("SeedMedia Enhanced Generator");

    let params = CoverParams {
        width: config.enhanced.width,
        height: config.enhanced.height,
        quality: config.enhanced.quality,
        seed: config.seed,
        palette: config.enhanced.palette,
    };

    reporter.section("Regenerating enhanced album artwork");
    for name in expected_artworks() {
        let record = write_item(MediaKind::Artwork, &dirs.artwork, name, || {
            let desc = ArtworkDescriptor::parse(name);
            let result =
                generate_enhanced_artwork(&desc, &params).map_err(GenerationError::from_backend)?;
            Ok(Produced {
                bytes: result.jpeg_data,
                hash: result.hash,
                genre: result.genre,
            })
        });
        reporter.record(record);
    }

    reporter.section("Generating musical audio clips");
    for index in 1..=config.enhanced.clip_count {
        let name = enhanced_clip_name(index);
        let melody = MelodyParams::new(
            config.enhanced.clip_seconds as f64,
            config.sample_rate,
            genre_for_clip(index),
        );
        let record = write_item(MediaKind::Audio, &dirs.audio, &name, || {
            let result = generate_melody(&melody).map_err(GenerationError::from_backend)?;
            Ok(Produced {
                bytes: result.wav.wav_data,
                hash: result.wav.pcm_hash,
                genre: result.genre,
            })
        });
        reporter.record(record);
    }

    reporter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_cycle() {
        assert_eq!(genre_for_clip(1), "pop");
        assert_eq!(genre_for_clip(2), "rock");
        assert_eq!(genre_for_clip(7), "classical");
        assert_eq!(genre_for_clip(8), "pop");
        assert_eq!(genre_for_clip(30), "rock");
    }
}
