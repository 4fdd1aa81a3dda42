//! JPEG file format validator.

use super::FormatError;

/// Information extracted from a JPEG frame header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JpegInfo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Sample precision in bits.
    pub precision: u8,
    /// Number of color components (3 for YCbCr).
    pub components: u8,
    /// Whether the frame is progressive.
    pub progressive: bool,
}

/// Validate JPEG markers and extract the frame header.
///
/// Requires SOI at the start, EOI at the end, and a start-of-frame segment
/// before the first scan.
pub fn validate_jpeg(data: &[u8]) -> Result<JpegInfo, FormatError> {
    if data.len() < 4 || data[0..2] != [0xFF, 0xD8] {
        return Err(FormatError::at_offset("JPEG", "Missing SOI marker", 0));
    }
    if data[data.len() - 2..] != [0xFF, 0xD9] {
        return Err(FormatError::at_offset(
            "JPEG",
            "Missing EOI marker",
            data.len() - 2,
        ));
    }

    let mut offset = 2;
    while offset + 4 <= data.len() {
        if data[offset] != 0xFF {
            return Err(FormatError::at_offset(
                "JPEG",
                format!("expected marker, got 0x{:02X}", data[offset]),
                offset,
            ));
        }
        let marker = data[offset + 1];
        // Fill bytes
        if marker == 0xFF {
            offset += 1;
            continue;
        }
        if marker == 0xDA || marker == 0xD9 {
            break;
        }

        let seg_len = u16::from_be_bytes([data[offset + 2], data[offset + 3]]) as usize;
        if seg_len < 2 || offset + 2 + seg_len > data.len() {
            return Err(FormatError::at_offset("JPEG", "Truncated segment", offset));
        }

        let is_sof = (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);
        if is_sof {
            if seg_len < 8 {
                return Err(FormatError::at_offset("JPEG", "Truncated frame header", offset));
            }
            let at = offset + 4;
            return Ok(JpegInfo {
                precision: data[at],
                height: u16::from_be_bytes([data[at + 1], data[at + 2]]) as u32,
                width: u16::from_be_bytes([data[at + 3], data[at + 4]]) as u32,
                components: data[at + 5],
                progressive: marker == 0xC2,
            });
        }

        offset += 2 + seg_len;
    }

    Err(FormatError::new("JPEG", "No frame header before scan data"))
}
