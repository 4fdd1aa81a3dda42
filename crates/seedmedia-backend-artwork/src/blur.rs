//! Gaussian blur approximated by three box-blur passes.

use crate::canvas::Canvas;
use crate::color::Color;

/// Number of box passes per axis.
const PASSES: usize = 3;

/// Box radii whose repeated application approximates a Gaussian with
/// standard deviation `sigma`.
pub fn box_radii(sigma: f64) -> [usize; PASSES] {
    let n = PASSES as f64;
    let ideal_width = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut lower = ideal_width.floor() as i64;
    if lower % 2 == 0 {
        lower -= 1;
    }
    let lower = lower.max(1);
    let upper = lower + 2;

    let lf = lower as f64;
    let ideal_m = (12.0 * sigma * sigma - n * lf * lf - 4.0 * n * lf - 3.0 * n) / (-4.0 * lf - 4.0);
    let m = ideal_m.round().max(0.0) as usize;

    let mut radii = [0; PASSES];
    for (i, radius) in radii.iter_mut().enumerate() {
        let width = if i < m { lower } else { upper };
        *radius = ((width - 1) / 2) as usize;
    }
    radii
}

/// Blurs the color channels of a canvas in place. Alpha is left untouched.
///
/// Samples past the edge repeat the nearest edge pixel.
pub fn gaussian_blur(canvas: &mut Canvas, sigma: f64) {
    if sigma <= 0.0 || canvas.width == 0 || canvas.height == 0 {
        return;
    }
    let w = canvas.width as usize;
    let h = canvas.height as usize;

    let mut planes = [
        canvas.data.iter().map(|c| c.r).collect::<Vec<f64>>(),
        canvas.data.iter().map(|c| c.g).collect::<Vec<f64>>(),
        canvas.data.iter().map(|c| c.b).collect::<Vec<f64>>(),
    ];
    let mut scratch = vec![0.0; w * h];

    for plane in planes.iter_mut() {
        for radius in box_radii(sigma) {
            box_blur_h(plane, &mut scratch, w, h, radius);
            box_blur_v(&scratch, plane, w, h, radius);
        }
    }

    for (i, pixel) in canvas.data.iter_mut().enumerate() {
        *pixel = Color::rgba(planes[0][i], planes[1][i], planes[2][i], pixel.a);
    }
}

fn box_blur_h(src: &[f64], dst: &mut [f64], w: usize, h: usize, r: usize) {
    let d = (2 * r + 1) as f64;
    let last = w as i64 - 1;
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        let at = |x: i64| row[x.clamp(0, last) as usize];

        let mut sum: f64 = (-(r as i64)..=r as i64).map(at).sum();
        for x in 0..w {
            dst[y * w + x] = sum / d;
            let x = x as i64;
            sum += at(x + r as i64 + 1) - at(x - r as i64);
        }
    }
}

fn box_blur_v(src: &[f64], dst: &mut [f64], w: usize, h: usize, r: usize) {
    let d = (2 * r + 1) as f64;
    let last = h as i64 - 1;
    for x in 0..w {
        let at = |y: i64| src[y.clamp(0, last) as usize * w + x];

        let mut sum: f64 = (-(r as i64)..=r as i64).map(at).sum();
        for y in 0..h {
            dst[y * w + x] = sum / d;
            let y = y as i64;
            sum += at(y + r as i64 + 1) - at(y - r as i64);
        }
    }
}
