//! Color utilities for cover rendering.

use seedmedia_spec::Rgb;

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Create from 8-bit RGB.
    pub fn from_rgb8(rgb: Rgb) -> Self {
        Self {
            r: rgb[0] as f64 / 255.0,
            g: rgb[1] as f64 / 255.0,
            b: rgb[2] as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Create from 8-bit RGB plus an 8-bit alpha.
    pub fn from_rgba8(rgb: Rgb, alpha: u8) -> Self {
        Self {
            a: alpha as f64 / 255.0,
            ..Self::from_rgb8(rgb)
        }
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(&self, a: f64) -> Self {
        Self { a, ..*self }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGB, dropping alpha.
    pub fn to_rgb8(&self) -> Rgb {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        ]
    }

    /// Composites `self` over an opaque or translucent `dst` (Porter-Duff over).
    pub fn over(&self, dst: &Color) -> Color {
        let src_a = self.a.clamp(0.0, 1.0);
        let dst_a = dst.a.clamp(0.0, 1.0);
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return Color::transparent();
        }
        let channel = |s: f64, d: f64| (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        Color {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: out_a,
        }
    }
}

/// Interpolates two 8-bit colors at `t`, truncating each channel toward zero.
///
/// This is the per-channel rule both cover gradients use.
pub fn lerp_rgb8(start: Rgb, end: Rgb, t: f64) -> Rgb {
    let channel = |a: u8, b: u8| {
        let value = a as f64 + (b as f64 - a as f64) * t;
        value.clamp(0.0, 255.0) as u8
    };
    [
        channel(start[0], end[0]),
        channel(start[1], end[1]),
        channel(start[2], end[2]),
    ]
}
