//! Note frequency table and the melody pattern used by enhanced clips.

/// Natural notes of the fourth octave, in hertz.
pub const NOTE_TABLE: &[(&str, f64)] = &[
    ("C", 261.63),
    ("D", 293.66),
    ("E", 329.63),
    ("F", 349.23),
    ("G", 392.00),
    ("A", 440.00),
    ("B", 493.88),
];

/// Note sequence tiled across a clip, one note per beat.
pub const MELODY_PATTERN: &[&str] = &["C", "E", "G", "E", "C", "G", "E", "C"];

/// Looks up the frequency of a note name (case-insensitive).
pub fn note_frequency(name: &str) -> Option<f64> {
    NOTE_TABLE
        .iter()
        .find(|(note, _)| note.eq_ignore_ascii_case(name))
        .map(|&(_, freq)| freq)
}
