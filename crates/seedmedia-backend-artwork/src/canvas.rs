//! Pixel buffer that covers are rendered into.
//!
//! Every drawing primitive takes signed coordinates and silently clips to
//! the canvas, so shapes and text may start or run off any edge.

use crate::color::Color;

/// A 2D RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Color>,
}

impl Canvas {
    /// Create a new canvas filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a fully transparent layer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::transparent())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Returns unsigned coordinates when `(x, y)` lies on the canvas.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            Some((x as u32, y as u32))
        } else {
            None
        }
    }

    /// Replaces a pixel, ignoring coordinates off the canvas.
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, color: Color) {
        if let Some((x, y)) = self.contains(x, y) {
            self.set(x, y, color);
        }
    }

    /// Fills the inclusive rectangle `[x0, x1] x [y0, y1]`, replacing pixels.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width as i64 - 1);
        let y1 = y1.min(self.height as i64 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set(x as u32, y as u32, color);
            }
        }
    }

    /// Composites `layer` over this canvas pixel by pixel.
    ///
    /// Both canvases must have the same dimensions; extra pixels in either
    /// are ignored.
    pub fn composite(&mut self, layer: &Canvas) {
        for (dst, src) in self.data.iter_mut().zip(&layer.data) {
            if src.a > 0.0 {
                *dst = src.over(dst);
            }
        }
    }

    /// Convert to 8-bit RGB bytes (row-major, alpha dropped).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgb8());
        }
        bytes
    }
}
