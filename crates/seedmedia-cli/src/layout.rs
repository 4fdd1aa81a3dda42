//! Output directory layout.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Artwork directory relative to the project root.
pub const ARTWORK_SUBDIR: &str = "public/uploads/artwork";
/// Audio directory relative to the project root.
pub const AUDIO_SUBDIR: &str = "public/uploads/audio";

/// The two directories a run writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDirs {
    /// Album cover directory.
    pub artwork: PathBuf,
    /// Audio clip directory.
    pub audio: PathBuf,
}

impl MediaDirs {
    /// Resolves the directories under `root` without touching the filesystem.
    pub fn under(root: &Path) -> Self {
        Self {
            artwork: root.join(ARTWORK_SUBDIR),
            audio: root.join(AUDIO_SUBDIR),
        }
    }

    /// Resolves and creates both directories.
    pub fn prepare(root: &Path) -> io::Result<Self> {
        let dirs = Self::under(root);
        fs::create_dir_all(&dirs.artwork)?;
        fs::create_dir_all(&dirs.audio)?;
        Ok(dirs)
    }
}

/// True when `path` exists and holds at least one byte.
pub fn has_content(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file() && m.len() > 0).unwrap_or(false)
}

/// Lists `*.jpg` files in `dir` that are zero bytes long, sorted by name.
pub fn empty_jpegs(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_jpg = path.extension().is_some_and(|ext| ext == "jpg");
        if is_jpg && entry.metadata()?.len() == 0 {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Basic-mode clip name: `sample-song-{index}.wav`.
pub fn basic_clip_name(index: u32) -> String {
    format!("sample-song-{}.wav", index)
}

/// Enhanced-mode clip name: `song-sample-{index:03}.wav`.
pub fn enhanced_clip_name(index: u32) -> String {
    format!("song-sample-{:03}.wav", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_creates_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = MediaDirs::prepare(tmp.path()).unwrap();
        assert!(dirs.artwork.is_dir());
        assert!(dirs.audio.is_dir());
        assert!(dirs.artwork.ends_with("public/uploads/artwork"));
    }

    #[test]
    fn test_has_content() {
        let tmp = tempfile::tempdir().unwrap();
        let empty = tmp.path().join("empty.jpg");
        let full = tmp.path().join("full.jpg");
        fs::write(&empty, b"").unwrap();
        fs::write(&full, b"x").unwrap();

        assert!(!has_content(&empty));
        assert!(has_content(&full));
        assert!(!has_content(&tmp.path().join("missing.jpg")));
        assert!(!has_content(tmp.path()));
    }

    #[test]
    fn test_empty_jpegs_sorted_and_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("b.jpg"), b"").unwrap();
        fs::write(tmp.path().join("a.jpg"), b"").unwrap();
        fs::write(tmp.path().join("c.jpg"), b"data").unwrap();
        fs::write(tmp.path().join("d.png"), b"").unwrap();

        assert_eq!(empty_jpegs(tmp.path()).unwrap(), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_clip_names() {
        assert_eq!(basic_clip_name(1), "sample-song-1.wav");
        assert_eq!(basic_clip_name(10), "sample-song-10.wav");
        assert_eq!(enhanced_clip_name(7), "song-sample-007.wav");
        assert_eq!(enhanced_clip_name(30), "song-sample-030.wav");
    }
}
