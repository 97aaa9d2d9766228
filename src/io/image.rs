//! Pattern rasterization and PNG export with theme-aware styling
//!
//! The renderer consumes the finished coordinate sequence from the walkers
//! and owns everything visual: the lattice is projected onto a rotated plane
//! via `(x, y) = ((i + j)/2, (i − j)/2)`, framed by its bounding box, and
//! drawn as a wide low-alpha accent underlay beneath the main stroke, with
//! decorative dots sampled along longer paths.

use crate::io::configuration::{
    ACCENT_RADIUS_PX, CANVAS_MARGIN_FRACTION, CANVAS_SIZE_PX, DOT_RADIUS_PX, DOT_SAMPLE_TARGET,
    MIN_POINTS_FOR_DOTS, STROKE_RADIUS_PX,
};
use crate::io::error::{KolamError, Result, invalid_parameter};
use clap::ValueEnum;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Background theme for rendered patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// White background with muted accents
    Light,
    /// Near-black background with bright strokes
    Dark,
}

/// Color scheme derived from a theme
#[derive(Clone, Copy, Debug)]
pub struct ThemeColors {
    /// Canvas background
    pub background: [u8; 4],
    /// Stroke color used when the caller picks none
    pub stroke: [u8; 4],
    /// Wide underlay drawn beneath the main stroke
    pub accent: [u8; 4],
}

impl Theme {
    /// Colors for this theme
    pub const fn colors(self) -> ThemeColors {
        match self {
            Self::Light => ThemeColors {
                background: [0xff, 0xff, 0xff, 0xff],
                stroke: [0x1f, 0x77, 0xb4, 0xff],
                accent: [0xf8, 0xf9, 0xfa, 0xff],
            },
            Self::Dark => ThemeColors {
                background: [0x0d, 0x11, 0x17, 0xff],
                stroke: [0x58, 0xa6, 0xff, 0xff],
                accent: [0x21, 0x26, 0x2d, 0xff],
            },
        }
    }
}

/// Parse a `#rrggbb` hex color into RGBA
///
/// # Errors
///
/// Returns an error if the value is not six hex digits with an optional
/// leading `#`.
pub fn parse_hex_color(value: &str) -> Result<[u8; 4]> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    let channel = |range: std::ops::Range<usize>| -> Result<u8> {
        digits
            .get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
            .ok_or_else(|| invalid_parameter("color", &value, &"expected #rrggbb"))
    };

    if digits.len() != 6 {
        return Err(invalid_parameter("color", &value, &"expected #rrggbb"));
    }

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?, 0xff])
}

/// Project a lattice point onto the render plane
///
/// The 45° rotation `(x, y) = ((i + j)/2, (i − j)/2)` turns the diamond
/// boundary into an axis-aligned square, matching how kolams are drawn.
pub fn to_plane(point: [i32; 2]) -> [f64; 2] {
    let i = f64::from(point[0]);
    let j = f64::from(point[1]);
    [(i + j) / 2.0, (i - j) / 2.0]
}

/// Rasterize a generated path onto a square RGBA canvas
pub fn render_pattern(points: &[[i32; 2]], theme: Theme, stroke: Option<[u8; 4]>) -> RgbaImage {
    let colors = theme.colors();
    let stroke = stroke.unwrap_or(colors.stroke);
    let mut canvas = RgbaImage::from_pixel(CANVAS_SIZE_PX, CANVAS_SIZE_PX, Rgba(colors.background));

    let projected: Vec<[f64; 2]> = points.iter().copied().map(to_plane).collect();
    let Some(frame) = Frame::fit(&projected) else {
        return canvas;
    };
    let pixels: Vec<[f64; 2]> = projected.iter().map(|&p| frame.to_canvas(p)).collect();

    // Accent underlay first so the main stroke sits on top of it
    draw_polyline(
        &mut canvas,
        &pixels,
        ACCENT_RADIUS_PX,
        with_alpha(colors.accent, 77),
    );
    draw_polyline(
        &mut canvas,
        &pixels,
        STROKE_RADIUS_PX,
        with_alpha(stroke, 230),
    );

    if pixels.len() > MIN_POINTS_FOR_DOTS {
        let step = (pixels.len() / DOT_SAMPLE_TARGET).max(1);
        for pixel in pixels.iter().step_by(step) {
            stamp_disc(&mut canvas, *pixel, DOT_RADIUS_PX, with_alpha(stroke, 178));
        }
    }

    canvas
}

/// Render and save a pattern as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the given path
pub fn export_pattern_png(
    points: &[[i32; 2]],
    theme: Theme,
    stroke: Option<[u8; 4]>,
    output_path: &Path,
) -> Result<()> {
    let canvas = render_pattern(points, theme, stroke);

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| KolamError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| KolamError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

// Maps plane coordinates into the canvas, centered and scaled to fit the
// usable area with the y axis flipped for image row order.
#[derive(Debug)]
struct Frame {
    min: [f64; 2],
    scale: f64,
    offset: [f64; 2],
}

impl Frame {
    fn fit(points: &[[f64; 2]]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in points {
            min = [min[0].min(p[0]), min[1].min(p[1])];
            max = [max[0].max(p[0]), max[1].max(p[1])];
        }

        let width = max[0] - min[0];
        let height = max[1] - min[1];
        // A single point still gets a finite scale; the offsets below use
        // the true extents so it lands at the canvas center.
        let span = width.max(height).max(1.0);

        let canvas = f64::from(CANVAS_SIZE_PX);
        let usable = canvas * 2.0_f64.mul_add(-CANVAS_MARGIN_FRACTION, 1.0);
        let scale = usable / span;

        Some(Self {
            min,
            scale,
            offset: [
                width.mul_add(-scale, canvas) / 2.0,
                height.mul_add(-scale, canvas) / 2.0,
            ],
        })
    }

    fn to_canvas(&self, point: [f64; 2]) -> [f64; 2] {
        let x = (point[0] - self.min[0]).mul_add(self.scale, self.offset[0]);
        let y = (point[1] - self.min[1]).mul_add(self.scale, self.offset[1]);
        [x, f64::from(CANVAS_SIZE_PX) - y]
    }
}

const fn with_alpha(color: [u8; 4], alpha: u8) -> [u8; 4] {
    [color[0], color[1], color[2], alpha]
}

fn draw_polyline(canvas: &mut RgbaImage, pixels: &[[f64; 2]], radius: i32, color: [u8; 4]) {
    for pair in pixels.windows(2) {
        let (Some(a), Some(b)) = (pair.first(), pair.get(1)) else {
            continue;
        };
        let dx = b[0] - a[0];
        let dy = b[1] - a[1];
        let steps = dx.hypot(dy).ceil().max(1.0) as usize;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            stamp_disc(
                canvas,
                [dx.mul_add(t, a[0]), dy.mul_add(t, a[1])],
                radius,
                color,
            );
        }
    }
    if let [only] = pixels {
        stamp_disc(canvas, *only, radius, color);
    }
}

fn stamp_disc(canvas: &mut RgbaImage, center: [f64; 2], radius: i32, color: [u8; 4]) {
    let cx = center[0].round() as i32;
    let cy = center[1].round() as i32;
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && x < width && y >= 0 && y < height {
                let blended = blend(*canvas.get_pixel(x as u32, y as u32), color);
                canvas.put_pixel(x as u32, y as u32, blended);
            }
        }
    }
}

// Source-over compositing onto an opaque canvas
fn blend(dst: Rgba<u8>, src: [u8; 4]) -> Rgba<u8> {
    let alpha = f64::from(src[3]) / 255.0;
    let mix = |s: u8, d: u8| -> u8 {
        f64::from(s)
            .mul_add(alpha, f64::from(d) * (1.0 - alpha))
            .round() as u8
    };
    Rgba([
        mix(src[0], dst.0[0]),
        mix(src[1], dst.0[1]),
        mix(src[2], dst.0[2]),
        0xff,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_accepts_both_forms() {
        assert_eq!(parse_hex_color("#1f77b4").ok(), Some([0x1f, 0x77, 0xb4, 0xff]));
        assert_eq!(parse_hex_color("ff0000").ok(), Some([0xff, 0x00, 0x00, 0xff]));
    }

    #[test]
    fn test_hex_parsing_rejects_malformed_values() {
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("zzzzzz").is_err());
        assert!(parse_hex_color("#1f77b4a0").is_err());
    }

    #[test]
    fn test_projection_rotates_the_lattice() {
        let close = |actual: [f64; 2], expected: [f64; 2]| {
            (actual[0] - expected[0]).abs() < 1e-9 && (actual[1] - expected[1]).abs() < 1e-9
        };
        assert!(close(to_plane([0, 0]), [0.0, 0.0]));
        assert!(close(to_plane([4, 0]), [2.0, 2.0]));
        assert!(close(to_plane([0, 4]), [2.0, -2.0]));
        assert!(close(to_plane([3, 1]), [2.0, 1.0]));
    }

    #[test]
    fn test_render_fills_background() {
        let canvas = render_pattern(&[[2, 2]], Theme::Dark, None);
        assert_eq!(canvas.width(), CANVAS_SIZE_PX);
        assert_eq!(canvas.height(), CANVAS_SIZE_PX);
        let corner = canvas.get_pixel(0, 0);
        assert_eq!(corner.0, Theme::Dark.colors().background);
    }

    #[test]
    fn test_single_point_renders_at_the_canvas_center() {
        let canvas = render_pattern(&[[1, 1]], Theme::Light, Some([0xd6, 0x27, 0x28, 0xff]));
        let background = Theme::Light.colors().background;
        let mid = CANVAS_SIZE_PX / 2;

        assert_ne!(canvas.get_pixel(mid, mid).0, background);
        // The point no longer collapses onto the frame minimum
        assert_eq!(canvas.get_pixel(100, CANVAS_SIZE_PX - 100).0, background);
    }

    #[test]
    fn test_render_draws_the_stroke() {
        let points = [[2, 2], [3, 3], [4, 2], [3, 1], [2, 2]];
        let canvas = render_pattern(&points, Theme::Light, Some([0xff, 0x00, 0x00, 0xff]));
        let background = Theme::Light.colors().background;
        let touched = canvas.pixels().filter(|p| p.0 != background).count();
        assert!(touched > 0);
    }
}
