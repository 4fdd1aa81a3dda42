//! Decorative overlay shapes.
//!
//! Shapes are drawn onto a transparent layer with `Canvas::put`, so
//! overlapping strokes do not build up opacity. The finished layer is
//! alpha-composited onto the cover in one step.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::rng::DeterministicRng;

/// The three overlay styles a cover can get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPattern {
    Circles,
    Lines,
    Rectangles,
}

impl OverlayPattern {
    /// All patterns, in selection order.
    pub const ALL: [OverlayPattern; 3] = [
        OverlayPattern::Circles,
        OverlayPattern::Lines,
        OverlayPattern::Rectangles,
    ];

    /// Lowercase name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayPattern::Circles => "circles",
            OverlayPattern::Lines => "lines",
            OverlayPattern::Rectangles => "rectangles",
        }
    }
}

impl std::fmt::Display for OverlayPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// White at 8-bit alpha `alpha`.
fn white(alpha: u8) -> Color {
    Color::white().with_alpha(alpha as f64 / 255.0)
}

/// Draws a circle outline `stroke` pixels thick, growing inward from `radius`.
pub fn stroke_circle(layer: &mut Canvas, cx: i64, cy: i64, radius: i64, stroke: i64, color: Color) {
    let outer = radius as f64;
    let inner = (radius - stroke) as f64;
    for y in cy - radius..=cy + radius {
        for x in cx - radius..=cx + radius {
            let dx = (x - cx) as f64;
            let dy = (y - cy) as f64;
            let d = (dx * dx + dy * dy).sqrt();
            if d <= outer && d > inner {
                layer.put(x, y, color);
            }
        }
    }
}

/// Draws a line segment `stroke` pixels wide.
pub fn stroke_line(
    layer: &mut Canvas,
    from: (i64, i64),
    to: (i64, i64),
    stroke: i64,
    color: Color,
) {
    let half = (stroke as f64 / 2.0).max(0.5);
    let pad = half.ceil() as i64;
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (dx, dy) = ((to.0 - from.0) as f64, (to.1 - from.1) as f64);
    let len_sq = dx * dx + dy * dy;

    for y in from.1.min(to.1) - pad..=from.1.max(to.1) + pad {
        for x in from.0.min(to.0) - pad..=from.0.max(to.0) + pad {
            let (px, py) = (x as f64 - x0, y as f64 - y0);
            let t = if len_sq > 0.0 {
                ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (ex, ey) = (px - t * dx, py - t * dy);
            if (ex * ex + ey * ey).sqrt() <= half {
                layer.put(x, y, color);
            }
        }
    }
}

/// Draws the outline of the inclusive rectangle `[x0, x1] x [y0, y1]`,
/// `stroke` pixels thick, growing inward.
pub fn stroke_rect(layer: &mut Canvas, x0: i64, y0: i64, x1: i64, y1: i64, stroke: i64, color: Color) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            let inside = x >= x0 + stroke && x <= x1 - stroke && y >= y0 + stroke && y <= y1 - stroke;
            if !inside {
                layer.put(x, y, color);
            }
        }
    }
}

/// Picks a pattern at random and draws a random set of its shapes onto a
/// fresh transparent layer.
pub fn random_overlay(width: u32, height: u32, rng: &mut DeterministicRng) -> (OverlayPattern, Canvas) {
    let pattern = OverlayPattern::ALL[rng.gen_range(0..OverlayPattern::ALL.len())];
    let mut layer = Canvas::transparent(width, height);
    let (w, h) = (width as i64, height as i64);

    match pattern {
        OverlayPattern::Circles => {
            for _ in 0..rng.gen_range(3..=8) {
                let x = rng.gen_range(0..=w);
                let y = rng.gen_range(0..=h);
                let radius = rng.gen_range(30..=150);
                stroke_circle(&mut layer, x, y, radius, 3, white(50));
            }
        }
        OverlayPattern::Lines => {
            for _ in 0..rng.gen_range(5..=15) {
                let from = (rng.gen_range(0..=w), rng.gen_range(0..=h));
                let to = (rng.gen_range(0..=w), rng.gen_range(0..=h));
                stroke_line(&mut layer, from, to, 2, white(40));
            }
        }
        OverlayPattern::Rectangles => {
            // Covers narrower than 100 px pin the origin to the top-left
            let (max_x, max_y) = ((w - 100).max(0), (h - 100).max(0));
            for _ in 0..rng.gen_range(3..=7) {
                let x0 = rng.gen_range(0..=max_x);
                let y0 = rng.gen_range(0..=max_y);
                let x1 = x0 + rng.gen_range(50..=200);
                let y1 = y0 + rng.gen_range(50..=200);
                stroke_rect(&mut layer, x0, y0, x1, y1, 2, white(60));
            }
        }
    }

    (pattern, layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(layer: &Canvas) -> usize {
        layer.data.iter().filter(|c| c.a > 0.0).count()
    }

    #[test]
    fn test_stroke_circle_is_a_ring() {
        let mut layer = Canvas::transparent(100, 100);
        stroke_circle(&mut layer, 50, 50, 30, 3, Color::white());

        assert_eq!(layer.get(50, 50).a, 0.0);
        assert_eq!(layer.get(80, 50).a, 1.0);
        assert_eq!(layer.get(78, 50).a, 1.0);
        assert_eq!(layer.get(77, 50).a, 0.0);
        assert_eq!(layer.get(81, 50).a, 0.0);
    }

    #[test]
    fn test_stroke_circle_clips() {
        let mut layer = Canvas::transparent(20, 20);
        stroke_circle(&mut layer, 0, 0, 150, 3, Color::white());
        assert_eq!(painted(&layer), 0);
        stroke_circle(&mut layer, 0, 0, 10, 3, Color::white());
        assert!(painted(&layer) > 0);
    }

    #[test]
    fn test_stroke_line_horizontal() {
        let mut layer = Canvas::transparent(20, 10);
        stroke_line(&mut layer, (2, 5), (17, 5), 2, Color::white());

        for x in 2..=17 {
            assert_eq!(layer.get(x, 5).a, 1.0, "gap at x={}", x);
        }
        assert_eq!(layer.get(10, 8).a, 0.0);
        assert_eq!(layer.get(0, 5).a, 0.0);
    }

    #[test]
    fn test_stroke_line_degenerate_point() {
        let mut layer = Canvas::transparent(5, 5);
        stroke_line(&mut layer, (2, 2), (2, 2), 2, Color::white());
        assert_eq!(layer.get(2, 2).a, 1.0);
    }

    #[test]
    fn test_stroke_rect_outline() {
        let mut layer = Canvas::transparent(20, 20);
        stroke_rect(&mut layer, 2, 2, 12, 12, 2, Color::white());

        assert_eq!(layer.get(2, 2).a, 1.0);
        assert_eq!(layer.get(3, 7).a, 1.0);
        assert_eq!(layer.get(4, 7).a, 0.0);
        assert_eq!(layer.get(12, 12).a, 1.0);
        assert_eq!(layer.get(13, 12).a, 0.0);
        // 11x11 outer minus 7x7 inner
        assert_eq!(painted(&layer), 121 - 49);
    }

    #[test]
    fn test_overlapping_strokes_do_not_accumulate() {
        let mut layer = Canvas::transparent(20, 20);
        stroke_rect(&mut layer, 0, 0, 10, 10, 2, white(60));
        stroke_rect(&mut layer, 0, 0, 10, 10, 2, white(60));
        assert!(layer.data.iter().all(|c| c.a == 0.0 || c.a == 60.0 / 255.0));
    }

    #[test]
    fn test_random_overlay_is_deterministic() {
        let (p1, l1) = random_overlay(200, 200, &mut DeterministicRng::new(7));
        let (p2, l2) = random_overlay(200, 200, &mut DeterministicRng::new(7));
        assert_eq!(p1, p2);
        assert_eq!(l1.to_rgb8(), l2.to_rgb8());
        assert_eq!(
            l1.data.iter().map(|c| c.a).collect::<Vec<_>>(),
            l2.data.iter().map(|c| c.a).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_random_overlay_covers_all_patterns() {
        let mut seen = Vec::new();
        for seed in 0..64 {
            let (pattern, layer) = random_overlay(120, 120, &mut DeterministicRng::new(seed));
            assert!(layer.data.iter().all(|c| c.a <= 60.0 / 255.0 + 1e-12));
            if !seen.contains(&pattern) {
                seen.push(pattern);
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_rectangles_on_tiny_canvas() {
        for seed in 0..32 {
            let (_, layer) = random_overlay(40, 40, &mut DeterministicRng::new(seed));
            assert_eq!(layer.width, 40);
        }
    }
}
