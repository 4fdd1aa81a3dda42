//! Genre profile table.
//!
//! A genre profile pairs the accent colors used for cover gradients with the
//! musical parameters used for enhanced audio clips. The table is static and
//! read-only; lookups never fail because unknown genres resolve to
//! [`DEFAULT_GENRE`].

/// 8-bit RGB color.
pub type Rgb = [u8; 3];

/// Key of the profile used when a genre is not in the table.
pub const DEFAULT_GENRE: &str = "pop";

/// A genre's palette and musical parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreProfile {
    /// Lookup key (lowercase).
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Gradient endpoints: inner/top color first.
    pub accent: [Rgb; 2],
    /// Tempo in beats per minute.
    pub tempo: u32,
    /// Tonal center.
    pub key_center: &'static str,
    /// Chord progression.
    pub chords: &'static [&'static str],
}

/// All genre profiles.
pub const GENRES: &[GenreProfile] = &[
    GenreProfile {
        key: "pop",
        name: "Pop",
        accent: [[255, 105, 180], [135, 206, 250]],
        tempo: 120,
        key_center: "C",
        chords: &["C", "G", "Am", "F"],
    },
    GenreProfile {
        key: "rock",
        name: "Rock",
        accent: [[139, 0, 0], [255, 69, 0]],
        tempo: 140,
        key_center: "E",
        chords: &["E", "A", "B"],
    },
    GenreProfile {
        key: "jazz",
        name: "Jazz",
        accent: [[75, 0, 130], [255, 215, 0]],
        tempo: 100,
        key_center: "Bb",
        chords: &["Dm7", "G7", "Cmaj7"],
    },
    GenreProfile {
        key: "electronic",
        name: "Electronic",
        accent: [[0, 255, 255], [255, 0, 255]],
        tempo: 128,
        key_center: "Am",
        chords: &["Am", "F", "C", "G"],
    },
    GenreProfile {
        key: "folk",
        name: "Folk",
        accent: [[34, 139, 34], [210, 180, 140]],
        tempo: 90,
        key_center: "D",
        chords: &["D", "G", "A"],
    },
    GenreProfile {
        key: "hip-hop",
        name: "Hip-Hop",
        accent: [[0, 0, 0], [255, 215, 0]],
        tempo: 90,
        key_center: "Gm",
        chords: &["Gm", "Eb", "Bb"],
    },
    GenreProfile {
        key: "r&b",
        name: "R&B",
        accent: [[139, 0, 139], [255, 192, 203]],
        tempo: 72,
        key_center: "Eb",
        chords: &["Ebmaj7", "Cm7", "Abmaj7", "Bb7"],
    },
    GenreProfile {
        key: "classical",
        name: "Classical",
        accent: [[25, 25, 112], [240, 248, 255]],
        tempo: 80,
        key_center: "G",
        chords: &["G", "D", "Em", "C"],
    },
    GenreProfile {
        key: "edm",
        name: "EDM",
        accent: [[255, 0, 255], [0, 255, 255]],
        tempo: 128,
        key_center: "Fm",
        chords: &["Fm", "Db", "Ab", "Eb"],
    },
    GenreProfile {
        key: "indie",
        name: "Indie",
        accent: [[188, 143, 143], [245, 222, 179]],
        tempo: 110,
        key_center: "G",
        chords: &["G", "Em", "C", "D"],
    },
];

/// Genres cycled through when generating enhanced clips.
pub const ENHANCED_GENRE_CYCLE: &[&str] = &[
    "pop",
    "rock",
    "jazz",
    "electronic",
    "folk",
    "hip-hop",
    "classical",
];

/// Fixed swatches for basic covers: royal blue, crimson, dark orange,
/// indigo, teal, red-orange, dark magenta, dark green.
pub const BASIC_SWATCHES: &[Rgb] = &[
    [65, 105, 225],
    [220, 20, 60],
    [255, 140, 0],
    [75, 0, 130],
    [0, 128, 128],
    [255, 69, 0],
    [139, 0, 139],
    [0, 100, 0],
];

/// Catalog genre names mapped to profile keys.
const CATALOG_GENRE_KEYS: &[(&str, &str)] = &[
    ("indie pop", "indie"),
    ("alternative rock", "rock"),
    ("electronic", "electronic"),
    ("jazz", "jazz"),
    ("folk", "folk"),
    ("synthwave", "electronic"),
    ("classical", "classical"),
    ("indie rock", "indie"),
    ("hip-hop", "hip-hop"),
    ("post-rock", "rock"),
    ("americana", "folk"),
    ("electronic rock", "rock"),
    ("blues", "jazz"),
    ("psychedelic rock", "rock"),
    ("r&b", "r&b"),
    ("world", "folk"),
    ("edm", "edm"),
    ("modern classical", "classical"),
];

impl GenreProfile {
    /// Looks up a profile by key (case-insensitive, surrounding whitespace
    /// ignored). Absent genres return the default profile.
    pub fn lookup(name: &str) -> &'static GenreProfile {
        Self::find(name).unwrap_or_else(Self::default_profile)
    }

    /// Looks up a profile by key without falling back.
    pub fn find(name: &str) -> Option<&'static GenreProfile> {
        let name = name.trim();
        GENRES.iter().find(|g| g.key.eq_ignore_ascii_case(name))
    }

    /// Returns the default profile.
    pub fn default_profile() -> &'static GenreProfile {
        GENRES
            .iter()
            .find(|g| g.key == DEFAULT_GENRE)
            .unwrap_or(&GENRES[0])
    }

    /// Maps a catalog genre such as "Alternative Rock" onto a profile.
    pub fn for_album_genre(catalog_genre: &str) -> &'static GenreProfile {
        let lowered = catalog_genre.trim().to_ascii_lowercase();
        CATALOG_GENRE_KEYS
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|&(_, key)| Self::lookup(key))
            .unwrap_or_else(|| Self::lookup(&lowered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_genre() {
        let rock = GenreProfile::lookup("rock");
        assert_eq!(rock.tempo, 140);
        assert_eq!(rock.chords, &["E", "A", "B"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(GenreProfile::lookup("Hip-Hop").key, "hip-hop");
        assert_eq!(GenreProfile::lookup("  JAZZ ").key, "jazz");
    }

    #[test]
    fn test_unknown_genre_falls_back_to_default() {
        let profile = GenreProfile::lookup("sea shanty");
        assert_eq!(profile.key, DEFAULT_GENRE);
        assert_eq!(profile.tempo, 120);
        assert!(GenreProfile::find("sea shanty").is_none());
    }

    #[test]
    fn test_keys_are_unique_and_lowercase() {
        for (i, a) in GENRES.iter().enumerate() {
            assert_eq!(a.key, a.key.to_lowercase());
            for b in &GENRES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_cycle_genres_exist() {
        for key in ENHANCED_GENRE_CYCLE {
            assert!(GenreProfile::find(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_catalog_genre_mapping() {
        assert_eq!(GenreProfile::for_album_genre("Alternative Rock").key, "rock");
        assert_eq!(GenreProfile::for_album_genre("R&B").key, "r&b");
        assert_eq!(GenreProfile::for_album_genre("Synthwave").key, "electronic");
        assert_eq!(GenreProfile::for_album_genre("Jazz").key, "jazz");
        assert_eq!(GenreProfile::for_album_genre("Polka").key, DEFAULT_GENRE);
    }

    #[test]
    fn test_basic_swatches_distinct() {
        for (i, a) in BASIC_SWATCHES.iter().enumerate() {
            for b in &BASIC_SWATCHES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
