//! Cover rendering entry points.
//!
//! Both variants follow the same pipeline: background gradient, optional
//! blur and decorative overlay, a translucent banner across the bottom, and
//! text on the banner. All random choices come from an RNG seeded by the
//! run seed and the target filename.

use seedmedia_spec::{
    content_hash, ArtworkDescriptor, GenreProfile, PaletteMode, Rgb, BASIC_SWATCHES, GENRES,
};

use crate::blur::gaussian_blur;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::ArtworkResult;
use crate::font::{draw_text, fit_scale, scale_for_pixel_size};
use crate::gradient::{radial_gradient, vertical_gradient};
use crate::jpeg::{encode_jpeg, validate_dimensions};
use crate::overlay::{random_overlay, OverlayPattern};
use crate::rng::DeterministicRng;

/// Left margin of basic cover text.
pub const BASIC_TEXT_X: i64 = 20;
/// Left margin of enhanced cover text.
pub const ENHANCED_TEXT_X: i64 = 30;
/// Basic cover banner height in pixels.
pub const BASIC_BANNER_HEIGHT: i64 = 80;
/// Basic cover banner alpha.
pub const BASIC_BANNER_ALPHA: u8 = 128;
/// Enhanced cover banner height in pixels.
pub const ENHANCED_BANNER_HEIGHT: i64 = 120;
/// Enhanced cover banner alpha.
pub const ENHANCED_BANNER_ALPHA: u8 = 180;
/// Blur radius applied to enhanced backgrounds.
pub const ENHANCED_BLUR_RADIUS: f64 = 2.0;

const SUBTITLE_GRAY: Rgb = [200, 200, 200];

/// Rendering parameters shared by both variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverParams {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// JPEG quality (1-100).
    pub quality: u8,
    /// Run seed; combined with the filename for each cover.
    pub seed: u32,
    /// Palette selection (enhanced covers only).
    pub palette: PaletteMode,
}

impl CoverParams {
    /// 400x400 at quality 85.
    pub fn basic(seed: u32) -> Self {
        Self {
            width: 400,
            height: 400,
            quality: 85,
            seed,
            palette: PaletteMode::Random,
        }
    }

    /// 600x600 at quality 90.
    pub fn enhanced(seed: u32, palette: PaletteMode) -> Self {
        Self {
            width: 600,
            height: 600,
            quality: 90,
            seed,
            palette,
        }
    }
}

/// A rendered cover before encoding.
#[derive(Debug, Clone)]
pub struct RenderedCover {
    /// Final pixels.
    pub canvas: Canvas,
    /// Gradient endpoints used.
    pub palette: [Rgb; 2],
    /// Genre whose palette was used (enhanced covers only).
    pub genre: Option<&'static str>,
    /// Overlay drawn (enhanced covers only).
    pub pattern: Option<OverlayPattern>,
}

/// Result of cover generation.
#[derive(Debug)]
pub struct GenerateResult {
    /// Encoded JPEG bytes.
    pub jpeg_data: Vec<u8>,
    /// BLAKE3 hash of the JPEG bytes.
    pub hash: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Gradient endpoints used.
    pub palette: [Rgb; 2],
    /// Genre whose palette was used.
    pub genre: Option<&'static str>,
    /// Overlay drawn.
    pub pattern: Option<OverlayPattern>,
}

impl GenerateResult {
    fn encode(cover: RenderedCover, quality: u8) -> ArtworkResult<Self> {
        let jpeg_data = encode_jpeg(&cover.canvas, quality)?;
        Ok(Self {
            hash: content_hash(&jpeg_data),
            jpeg_data,
            width: cover.canvas.width,
            height: cover.canvas.height,
            palette: cover.palette,
            genre: cover.genre,
            pattern: cover.pattern,
        })
    }
}

/// Renders and encodes a basic cover.
pub fn generate_basic_artwork(
    desc: &ArtworkDescriptor,
    params: &CoverParams,
) -> ArtworkResult<GenerateResult> {
    GenerateResult::encode(render_basic_cover(desc, params)?, params.quality)
}

/// Renders and encodes an enhanced cover.
pub fn generate_enhanced_artwork(
    desc: &ArtworkDescriptor,
    params: &CoverParams,
) -> ArtworkResult<GenerateResult> {
    GenerateResult::encode(render_enhanced_cover(desc, params)?, params.quality)
}

/// Renders a basic cover: two distinct swatches in a vertical gradient,
/// with the display name on a half-transparent banner.
pub fn render_basic_cover(
    desc: &ArtworkDescriptor,
    params: &CoverParams,
) -> ArtworkResult<RenderedCover> {
    validate_dimensions(params.width, params.height)?;
    let mut rng = DeterministicRng::for_target(params.seed, &desc.filename);
    let palette = pick_two_swatches(&mut rng);

    let mut canvas = Canvas::new(params.width, params.height, Color::black());
    vertical_gradient(&mut canvas, palette[0], palette[1]);
    draw_banner(&mut canvas, BASIC_BANNER_HEIGHT, BASIC_BANNER_ALPHA);

    let h = params.height as i64;
    let label = desc.display_label();
    draw_text(
        &mut canvas,
        BASIC_TEXT_X,
        h - 60,
        &label,
        Color::white(),
        label_scale(&label, BASIC_TEXT_X, params.width, 24),
    );

    Ok(RenderedCover {
        canvas,
        palette,
        genre: None,
        pattern: None,
    })
}

/// Renders an enhanced cover: a blurred radial gradient, a random shape
/// overlay, and title plus artist on a dark banner.
pub fn render_enhanced_cover(
    desc: &ArtworkDescriptor,
    params: &CoverParams,
) -> ArtworkResult<RenderedCover> {
    validate_dimensions(params.width, params.height)?;
    let mut rng = DeterministicRng::for_target(params.seed, &desc.filename);
    let profile = pick_profile(desc, params.palette, &mut rng);
    let palette = profile.accent;

    let mut canvas = Canvas::new(params.width, params.height, Color::black());
    radial_gradient(&mut canvas, palette[0], palette[1]);
    gaussian_blur(&mut canvas, ENHANCED_BLUR_RADIUS);

    let (pattern, layer) = random_overlay(params.width, params.height, &mut rng);
    canvas.composite(&layer);
    draw_banner(&mut canvas, ENHANCED_BANNER_HEIGHT, ENHANCED_BANNER_ALPHA);

    let h = params.height as i64;
    let title = desc.title_label();
    let artist = desc.artist_label();
    draw_text(
        &mut canvas,
        ENHANCED_TEXT_X,
        h - 90,
        &title,
        Color::white(),
        label_scale(&title, ENHANCED_TEXT_X, params.width, 32),
    );
    draw_text(
        &mut canvas,
        ENHANCED_TEXT_X,
        h - 50,
        &artist,
        Color::from_rgb8(SUBTITLE_GRAY),
        label_scale(&artist, ENHANCED_TEXT_X, params.width, 18),
    );

    Ok(RenderedCover {
        canvas,
        palette,
        genre: Some(profile.key),
        pattern: Some(pattern),
    })
}

/// Scale for a label drawn `x` pixels from the left edge: the nominal pixel
/// size, shrunk until the label keeps the same margin on the right.
pub fn label_scale(label: &str, x: i64, width: u32, px: u32) -> u32 {
    let room = (width as i64 - 2 * x).max(0) as u32;
    fit_scale(label, room, scale_for_pixel_size(px))
}

fn pick_two_swatches(rng: &mut DeterministicRng) -> [Rgb; 2] {
    let first = rng.gen_range(0..BASIC_SWATCHES.len());
    // Draw from the remaining swatches and skip over the first pick
    let mut second = rng.gen_range(0..BASIC_SWATCHES.len() - 1);
    if second >= first {
        second += 1;
    }
    [BASIC_SWATCHES[first], BASIC_SWATCHES[second]]
}

fn pick_profile(
    desc: &ArtworkDescriptor,
    mode: PaletteMode,
    rng: &mut DeterministicRng,
) -> &'static GenreProfile {
    match mode {
        PaletteMode::Random => rng
            .choose(GENRES)
            .unwrap_or_else(GenreProfile::default_profile),
        PaletteMode::Genre => desc
            .genre
            .map(GenreProfile::for_album_genre)
            .unwrap_or_else(GenreProfile::default_profile),
    }
}

/// Composites a black banner over the bottom `banner_height` rows.
fn draw_banner(canvas: &mut Canvas, banner_height: i64, alpha: u8) {
    let (w, h) = (canvas.width as i64, canvas.height as i64);
    let mut layer = Canvas::transparent(canvas.width, canvas.height);
    layer.fill_rect(0, h - banner_height, w, h, Color::from_rgba8([0, 0, 0], alpha));
    canvas.composite(&layer);
}
