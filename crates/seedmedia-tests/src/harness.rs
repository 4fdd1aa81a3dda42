//! Test harness for running generation passes against a temporary root.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use seedmedia_cli::commands::{self, RunOptions};
use seedmedia_cli::layout::MediaDirs;
use seedmedia_cli::report::RunReport;
use seedmedia_spec::{GeneratorConfig, PaletteMode};

use crate::format_validators::{self, JpegInfo, WavInfo};

/// Configuration small enough that a full run stays fast.
pub const SMALL_CONFIG: &str = r#"{
    "seed": 7,
    "sample_rate": 8000,
    "basic": {"width": 96, "height": 96, "quality": 85, "clip_count": 2, "clip_seconds": 3},
    "enhanced": {"width": 128, "height": 128, "quality": 90, "clip_count": 8, "clip_seconds": 2}
}"#;

/// A temporary project root plus the configuration to run with.
pub struct TestHarness {
    /// Project root for test outputs.
    pub work_dir: TempDir,
    /// Configuration used by every run.
    pub config: GeneratorConfig,
}

impl TestHarness {
    /// Create a harness with [`SMALL_CONFIG`].
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::from_json(SMALL_CONFIG).expect("small config"))
    }

    /// Create a harness with an explicit configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            config,
        }
    }

    /// Project root path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Output directories under the root.
    pub fn dirs(&self) -> MediaDirs {
        MediaDirs::under(self.path())
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            root: self.path().to_path_buf(),
            config: self.config.clone(),
            json: true,
        }
    }

    /// Run the basic pass and return its report.
    pub fn run_basic(&self) -> RunReport {
        commands::basic::run(&self.options()).expect("basic run failed")
    }

    /// Run the enhanced pass and return its report.
    pub fn run_enhanced(&self) -> RunReport {
        commands::enhanced::run(&self.options()).expect("enhanced run failed")
    }

    /// Run the enhanced pass with a palette override.
    pub fn run_enhanced_with_palette(&self, palette: PaletteMode) -> RunReport {
        let mut options = self.options();
        options.config.enhanced.palette = palette;
        commands::enhanced::run(&options).expect("enhanced run failed")
    }

    /// Path of a cover file.
    pub fn artwork(&self, name: &str) -> PathBuf {
        self.dirs().artwork.join(name)
    }

    /// Path of a clip file.
    pub fn audio(&self, name: &str) -> PathBuf {
        self.dirs().audio.join(name)
    }

    /// Read a file, panicking with its path on failure.
    pub fn read(&self, path: &Path) -> Vec<u8> {
        fs::read(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Read and validate a cover.
    pub fn jpeg_info(&self, name: &str) -> JpegInfo {
        let data = self.read(&self.artwork(name));
        format_validators::validate_jpeg(&data)
            .unwrap_or_else(|e| panic!("{} is not a valid JPEG: {}", name, e))
    }

    /// Read and validate a clip.
    pub fn wav_info(&self, name: &str) -> WavInfo {
        let data = self.read(&self.audio(name));
        format_validators::validate_wav(&data)
            .unwrap_or_else(|e| panic!("{} is not a valid WAV: {}", name, e))
    }

    /// Sorted file names in a directory.
    pub fn list(&self, dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter_map(|e| e.file_name().to_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    /// BLAKE3 hash of a file.
    pub fn file_hash(&self, path: &Path) -> String {
        blake3::hash(&self.read(path)).to_hex().to_string()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
