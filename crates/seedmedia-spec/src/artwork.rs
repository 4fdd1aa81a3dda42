//! Artwork target table and filename descriptors.
//!
//! Cover filenames follow `album-<artist-slug>-<title-slug>.jpg`. The slug
//! boundary between artist and title is not marked, so the parser first
//! tries the seeded artist catalog and only then falls back to a word-count
//! heuristic. Malformed names are not rejected; they simply produce odd
//! labels.

/// Maximum number of characters rendered for any cover label.
pub const MAX_LABEL_CHARS: usize = 30;

/// Every album cover the demo store references.
pub const EXPECTED_ARTWORKS: &[&str] = &[
    "album-luna-martinez-starlight-dreams.jpg",
    "album-luna-martinez-midnight-reverie.jpg",
    "album-the-midnight-owls-concrete-hearts.jpg",
    "album-the-midnight-owls-echo-chamber.jpg",
    "album-jasmine-chen-digital-horizons.jpg",
    "album-jasmine-chen-neon-nights.jpg",
    "album-marcus-johnson-blue-note-sessions.jpg",
    "album-wildfire-collective-mountain-songs.jpg",
    "album-wildfire-collective-whispers-in-the-wind.jpg",
    "album-neon-dreams-retrowave-memories.jpg",
    "album-rosa-delgado-piano-reflections.jpg",
    "album-the-basement-sessions-homegrown.jpg",
    "album-the-basement-sessions-late-night-thoughts.jpg",
    "album-dj-solaris-boom-bap-chronicles.jpg",
    "album-echo-valley-distant-shores.jpg",
    "album-echo-valley-horizons.jpg",
    "album-sarah-winters-wildflower.jpg",
    "album-voltage-electric-soul.jpg",
    "album-the-blues-brothers-revival-chicago-nights.jpg",
    "album-cosmic-waves-interstellar-journey.jpg",
    "album-maya-torres-velvet-voice.jpg",
    "album-maya-torres-midnight-soul.jpg",
    "album-the-wanderers-global-rhythms.jpg",
    "album-apex-beats-progressive-waves.jpg",
    "album-oliver-grant-silent-echoes.jpg",
    "album-luna-martinez-indie-nights-vol-1.jpg",
    "album-jasmine-chen-electronic-fusion.jpg",
];

/// Returns the shared artwork target list.
pub fn expected_artworks() -> &'static [&'static str] {
    EXPECTED_ARTWORKS
}

/// A seeded artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtistEntry {
    /// Display name.
    pub name: &'static str,
    /// Filename slug (lowercase, dash-separated).
    pub slug: &'static str,
    /// Catalog genre.
    pub genre: &'static str,
}

/// Artists referenced by [`EXPECTED_ARTWORKS`].
pub const ARTISTS: &[ArtistEntry] = &[
    ArtistEntry { name: "Luna Martinez", slug: "luna-martinez", genre: "Indie Pop" },
    ArtistEntry { name: "The Midnight Owls", slug: "the-midnight-owls", genre: "Alternative Rock" },
    ArtistEntry { name: "Jasmine Chen", slug: "jasmine-chen", genre: "Electronic" },
    ArtistEntry { name: "Marcus Johnson", slug: "marcus-johnson", genre: "Jazz" },
    ArtistEntry { name: "Wildfire Collective", slug: "wildfire-collective", genre: "Folk" },
    ArtistEntry { name: "Neon Dreams", slug: "neon-dreams", genre: "Synthwave" },
    ArtistEntry { name: "Rosa Delgado", slug: "rosa-delgado", genre: "Classical" },
    ArtistEntry { name: "The Basement Sessions", slug: "the-basement-sessions", genre: "Indie Rock" },
    ArtistEntry { name: "DJ Solaris", slug: "dj-solaris", genre: "Hip-Hop" },
    ArtistEntry { name: "Echo Valley", slug: "echo-valley", genre: "Post-Rock" },
    ArtistEntry { name: "Sarah Winters", slug: "sarah-winters", genre: "Americana" },
    ArtistEntry { name: "Voltage", slug: "voltage", genre: "Electronic Rock" },
    ArtistEntry { name: "The Blues Brothers Revival", slug: "the-blues-brothers-revival", genre: "Blues" },
    ArtistEntry { name: "Cosmic Waves", slug: "cosmic-waves", genre: "Psychedelic Rock" },
    ArtistEntry { name: "Maya Torres", slug: "maya-torres", genre: "R&B" },
    ArtistEntry { name: "The Wanderers", slug: "the-wanderers", genre: "World" },
    ArtistEntry { name: "Apex Beats", slug: "apex-beats", genre: "EDM" },
    ArtistEntry { name: "Oliver Grant", slug: "oliver-grant", genre: "Modern Classical" },
];

/// Labels derived from an artwork filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkDescriptor {
    /// The filename as given.
    pub filename: String,
    /// Title-cased slug, used as the single label on basic covers.
    pub display_name: String,
    /// Artist name (subtitle on enhanced covers).
    pub artist: String,
    /// Album title (headline on enhanced covers).
    pub title: String,
    /// Catalog genre when the artist is known.
    pub genre: Option<&'static str>,
}

impl ArtworkDescriptor {
    /// Parses a cover filename into labels.
    pub fn parse(filename: &str) -> Self {
        let slug = filename.replace("album-", "").replace(".jpg", "");
        let display_name = title_case(&slug.replace('-', " "));

        let known = ARTISTS
            .iter()
            .filter(|a| {
                slug.strip_prefix(a.slug)
                    .is_some_and(|rest| rest.starts_with('-'))
            })
            .max_by_key(|a| a.slug.len());

        let (artist, title, genre) = match known {
            Some(entry) => {
                let rest = &slug[entry.slug.len() + 1..];
                (
                    entry.name.to_string(),
                    title_case(&rest.replace('-', " ")),
                    Some(entry.genre),
                )
            }
            None => {
                let (artist, title) = split_by_word_count(&display_name);
                (artist, title, None)
            }
        };

        Self {
            filename: filename.to_string(),
            display_name,
            artist,
            title,
            genre,
        }
    }

    /// Basic cover label, truncated for rendering.
    pub fn display_label(&self) -> String {
        truncate_label(&self.display_name, MAX_LABEL_CHARS)
    }

    /// Enhanced cover headline, truncated for rendering.
    pub fn title_label(&self) -> String {
        truncate_label(&self.title, MAX_LABEL_CHARS)
    }

    /// Enhanced cover subtitle, truncated for rendering.
    pub fn artist_label(&self) -> String {
        truncate_label(&self.artist, MAX_LABEL_CHARS)
    }
}

/// More than three words: the first two name the artist. Otherwise the
/// first word does.
fn split_by_word_count(words: &str) -> (String, String) {
    let parts: Vec<&str> = words.split_whitespace().collect();
    let split = if parts.len() > 3 { 2 } else { parts.len().min(1) };
    (parts[..split].join(" "), parts[split..].join(" "))
}

/// Upper-cases every letter that follows a non-letter and lower-cases the
/// rest, so `indie nights vol 1` becomes `Indie Nights Vol 1`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Truncates to at most `max_chars` characters.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_known_artist() {
        let desc = ArtworkDescriptor::parse("album-jasmine-chen-neon-nights.jpg");
        assert_eq!(
            desc,
            ArtworkDescriptor {
                filename: "album-jasmine-chen-neon-nights.jpg".to_string(),
                display_name: "Jasmine Chen Neon Nights".to_string(),
                artist: "Jasmine Chen".to_string(),
                title: "Neon Nights".to_string(),
                genre: Some("Electronic"),
            }
        );
    }

    #[test]
    fn test_parse_three_word_artist() {
        let desc = ArtworkDescriptor::parse("album-the-midnight-owls-echo-chamber.jpg");
        assert_eq!(desc.artist, "The Midnight Owls");
        assert_eq!(desc.title, "Echo Chamber");
    }

    #[test]
    fn test_parse_uses_catalog_capitalization() {
        let desc = ArtworkDescriptor::parse("album-dj-solaris-boom-bap-chronicles.jpg");
        assert_eq!(desc.artist, "DJ Solaris");
        assert_eq!(desc.display_name, "Dj Solaris Boom Bap Chronicles");
    }

    #[test]
    fn test_parse_unknown_artist_long_name() {
        let desc = ArtworkDescriptor::parse("album-nova-kline-paper-moons.jpg");
        assert_eq!(desc.artist, "Nova Kline");
        assert_eq!(desc.title, "Paper Moons");
        assert_eq!(desc.genre, None);
    }

    #[test]
    fn test_parse_unknown_artist_short_name() {
        let desc = ArtworkDescriptor::parse("album-kite-runner.jpg");
        assert_eq!(desc.artist, "Kite");
        assert_eq!(desc.title, "Runner");
    }

    #[test]
    fn test_parse_degenerate_names() {
        let desc = ArtworkDescriptor::parse("album-.jpg");
        assert_eq!(desc.artist, "");
        assert_eq!(desc.title, "");

        let desc = ArtworkDescriptor::parse("cover.png");
        assert_eq!(desc.display_name, "Cover.Png");
        assert_eq!(desc.artist, "Cover.Png");
        assert_eq!(desc.title, "");
    }

    #[test]
    fn test_labels_truncated_to_thirty_chars() {
        let desc = ArtworkDescriptor::parse("album-the-blues-brothers-revival-chicago-nights.jpg");
        assert_eq!(desc.display_name.chars().count(), 41);
        assert_eq!(desc.display_label(), "The Blues Brothers Revival Chi");
        assert!(desc.display_label().chars().count() <= MAX_LABEL_CHARS);

        let desc = ArtworkDescriptor::parse("album-jasmine-chen-neon-nights.jpg");
        assert!(desc.display_label().chars().count() <= MAX_LABEL_CHARS);
        assert!(desc.title_label().chars().count() <= MAX_LABEL_CHARS);
        assert!(desc.artist_label().chars().count() <= MAX_LABEL_CHARS);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("indie nights vol 1"), "Indie Nights Vol 1");
        assert_eq!(title_case("r&b"), "R&B");
        assert_eq!(title_case("ECHO"), "Echo");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_label("Señor Café", 4), "Seño");
        assert_eq!(truncate_label("short", 30), "short");
    }

    #[test]
    fn test_every_target_has_a_known_artist() {
        for filename in expected_artworks() {
            let desc = ArtworkDescriptor::parse(filename);
            assert!(desc.genre.is_some(), "no catalog artist for {}", filename);
            assert!(!desc.title.is_empty(), "empty title for {}", filename);
        }
    }

    #[test]
    fn test_targets_are_unique() {
        for (i, a) in EXPECTED_ARTWORKS.iter().enumerate() {
            assert!(a.starts_with("album-") && a.ends_with(".jpg"));
            for b in &EXPECTED_ARTWORKS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
