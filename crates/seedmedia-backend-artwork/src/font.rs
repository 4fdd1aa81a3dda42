//! Built-in 5x7 bitmap font.
//!
//! Each glyph is seven rows of five bits, most significant bit on the left.
//! Text is scaled by an integer factor and advances six cells per
//! character. Characters without a glyph render as `?`.

use crate::canvas::Canvas;
use crate::color::Color;

/// Glyph width in font cells.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font cells.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance in font cells (glyph plus one cell of spacing).
pub const ADVANCE: u32 = 6;
/// Line height in font cells (glyph plus one row of spacing).
pub const LINE_HEIGHT: u32 = 8;

const QUESTION: [u8; 7] = [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04];

/// Returns the row bitmap for `c`, or `None` if the font lacks it.
pub fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        ' ' => [0x00; 7],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x00, 0x00, 0x04],
        '&' => [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D],
        '\'' => [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '?' => QUESTION,
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        'a' => [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F],
        'b' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E],
        'c' => [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E],
        'd' => [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F],
        'e' => [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E],
        'f' => [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08],
        'g' => [0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E],
        'h' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11],
        'i' => [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E],
        'j' => [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C],
        'k' => [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12],
        'l' => [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'm' => [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11],
        'n' => [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11],
        'o' => [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E],
        'p' => [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10],
        'q' => [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01],
        'r' => [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10],
        's' => [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E],
        't' => [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06],
        'u' => [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D],
        'v' => [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'w' => [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A],
        'x' => [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11],
        'y' => [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E],
        'z' => [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F],
        _ => return None,
    };
    Some(rows)
}

/// Integer scale whose line height best matches a nominal pixel size.
pub fn scale_for_pixel_size(px: u32) -> u32 {
    ((px + LINE_HEIGHT / 2) / LINE_HEIGHT).max(1)
}

/// Width in pixels of `text` at `scale`, without trailing spacing.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        0
    } else {
        (count * ADVANCE - (ADVANCE - GLYPH_WIDTH)) * scale
    }
}

/// Largest scale up to `preferred` at which `text` fits in `max_width`
/// pixels. Never below 1; text too long even at scale 1 is clipped when drawn.
pub fn fit_scale(text: &str, max_width: u32, preferred: u32) -> u32 {
    (1..=preferred.max(1))
        .rev()
        .find(|&scale| text_width(text, scale) <= max_width)
        .unwrap_or(1)
}

/// Draws `text` with its top-left corner at `(x, y)`, replacing pixels.
pub fn draw_text(canvas: &mut Canvas, x: i64, y: i64, text: &str, color: Color, scale: u32) {
    let scale = scale.max(1) as i64;
    let mut pen_x = x;
    for c in text.chars() {
        let rows = glyph(c).unwrap_or(QUESTION);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH as i64 {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let px = pen_x + col * scale;
                let py = y + row as i64 * scale;
                for sy in 0..scale {
                    for sx in 0..scale {
                        canvas.put(px + sx, py + sy, color);
                    }
                }
            }
        }
        pen_x += ADVANCE as i64 * scale;
        if pen_x >= canvas.width as i64 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(canvas: &Canvas) -> usize {
        canvas.data.iter().filter(|c| **c == Color::white()).count()
    }

    #[test]
    fn test_every_catalog_label_has_glyphs() {
        for filename in seedmedia_spec::expected_artworks() {
            let desc = seedmedia_spec::ArtworkDescriptor::parse(filename);
            for c in desc.display_name.chars().chain(desc.artist.chars()) {
                assert!(glyph(c).is_some(), "no glyph for {:?} in {}", c, filename);
            }
        }
    }

    #[test]
    fn test_glyph_rows_fit_five_columns() {
        for c in (' '..='~').filter_map(glyph) {
            assert!(c.iter().all(|row| *row < 0x20));
        }
    }

    #[test]
    fn test_unknown_character_renders_question_mark() {
        let mut unknown = Canvas::new(10, 10, Color::black());
        let mut question = Canvas::new(10, 10, Color::black());
        draw_text(&mut unknown, 0, 0, "é", Color::white(), 1);
        draw_text(&mut question, 0, 0, "?", Color::white(), 1);
        assert_eq!(unknown.to_rgb8(), question.to_rgb8());
        assert!(lit(&unknown) > 0);
    }

    #[test]
    fn test_scaling_multiplies_pixels() {
        let mut small = Canvas::new(40, 40, Color::black());
        let mut large = Canvas::new(40, 40, Color::black());
        draw_text(&mut small, 0, 0, "A", Color::white(), 1);
        draw_text(&mut large, 0, 0, "A", Color::white(), 3);
        assert_eq!(lit(&large), lit(&small) * 9);
    }

    #[test]
    fn test_text_clips_at_edges() {
        let mut canvas = Canvas::new(20, 10, Color::black());
        draw_text(&mut canvas, -3, 5, "HELLO WORLD", Color::white(), 2);
        assert!(lit(&canvas) > 0);
    }

    #[test]
    fn test_fit_scale_shrinks_long_text() {
        // 30 characters are 179 units wide
        let label = "Jasmine Chen Electronic Fusion";
        assert_eq!(text_width(label, 1), 179);
        assert_eq!(fit_scale(label, 360, 3), 2);
        assert_eq!(fit_scale(label, 600, 3), 3);
        assert_eq!(fit_scale(label, 100, 3), 1);
        assert_eq!(fit_scale("", 0, 4), 4);
    }

    #[test]
    fn test_scale_for_pixel_size() {
        assert_eq!(scale_for_pixel_size(32), 4);
        assert_eq!(scale_for_pixel_size(24), 3);
        assert_eq!(scale_for_pixel_size(18), 2);
        assert_eq!(scale_for_pixel_size(1), 1);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 3), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 2), 22);
    }
}
