//! Background gradients.

use seedmedia_spec::Rgb;

use crate::canvas::Canvas;
use crate::color::{lerp_rgb8, Color};

/// Fills the canvas with a top-to-bottom gradient.
///
/// Row `y` uses `t = y / height`, so the last row stops just short of `end`.
pub fn vertical_gradient(canvas: &mut Canvas, start: Rgb, end: Rgb) {
    let height = canvas.height as f64;
    for y in 0..canvas.height {
        let color = Color::from_rgb8(lerp_rgb8(start, end, y as f64 / height));
        for x in 0..canvas.width {
            canvas.set(x, y, color);
        }
    }
}

/// Fills the canvas with a gradient radiating from its center.
///
/// The blend factor is the distance from the center divided by half the
/// canvas diagonal, capped at 1, so `outer` is reached exactly at the
/// corners.
pub fn radial_gradient(canvas: &mut Canvas, inner: Rgb, outer: Rgb) {
    let w = canvas.width as f64;
    let h = canvas.height as f64;
    let max_distance = (w * w / 4.0 + h * h / 4.0).sqrt();

    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let dx = x as f64 - w / 2.0;
            let dy = y as f64 - h / 2.0;
            let ratio = ((dx * dx + dy * dy).sqrt() / max_distance).min(1.0);
            canvas.set(x, y, Color::from_rgb8(lerp_rgb8(inner, outer, ratio)));
        }
    }
}
