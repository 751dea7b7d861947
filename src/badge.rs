//! Centered circular logo badge drawn over the composited image.

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_text_mut};
use std::fs;

/// Smallest image edge, in pixels, that still gets a badge.
pub const MIN_BADGE_DIMENSION: u32 = 200;

/// Badge diameter as a fraction of the shorter image edge.
pub const BADGE_RATIO: f32 = 0.24;

/// Glyph color inside the white disc.
pub const BRAND_COLOR: Rgb<u8> = Rgb([59, 89, 152]);

const BADGE_GLYPH: char = 'f';
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Returns whether an image of the given size carries the badge.
pub fn applies(width: u32, height: u32) -> bool {
    width.min(height) >= MIN_BADGE_DIMENSION
}

/// Draws the white disc and the brand glyph at the image center.
///
/// Purely cosmetic and infallible: when no candidate font loads, a built-in
/// bitmap glyph is stamped instead, so generation never aborts here.
pub fn draw_center_badge(img: &mut RgbImage) {
    let (width, height) = img.dimensions();
    let diameter = (width.min(height) as f32 * BADGE_RATIO) as i32;
    let cx = width as i32 / 2;
    let cy = height as i32 / 2;
    draw_filled_circle_mut(img, (cx, cy), diameter / 2, WHITE);

    let font_px = (diameter as f32 * 0.7).max(10.0);
    match load_badge_font() {
        Some(font) => draw_glyph(img, &font, font_px, cx, cy),
        None => stamp_fallback_glyph(img, font_px as u32, cx, cy),
    }
}

/*---- Font resolution ----*/

// Checked in order; the first file that parses as a font wins. Covers the
// usual Windows, macOS and Linux install locations.
const FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\seguiemj.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

fn load_badge_font() -> Option<FontVec> {
    for path in FONT_CANDIDATES {
        let Ok(data) = fs::read(path) else {
            continue;
        };
        match FontVec::try_from_vec(data) {
            Ok(font) => {
                log::debug!("badge font: {path}");
                return Some(font);
            }
            Err(err) => log::warn!("unusable badge font {path}: {err}"),
        }
    }
    log::warn!("no badge font found, falling back to the built-in glyph");
    None
}

/*---- Glyph drawing ----*/

fn draw_glyph(img: &mut RgbImage, font: &FontVec, font_px: f32, cx: i32, cy: i32) {
    let scale = PxScale::from(font_px);
    let scaled = font.as_scaled(scale);
    let ascent = scaled.ascent();
    let glyph_id = font.glyph_id(BADGE_GLYPH);

    // draw_text_mut puts the baseline at y + ascent, so measuring the glyph
    // positioned at (0, ascent) yields ink bounds relative to the draw origin.
    let glyph = glyph_id.with_scale_and_position(scale, point(0.0, ascent));
    let (x, y) = match font.outline_glyph(glyph) {
        Some(outline) => {
            let bounds = outline.px_bounds();
            (
                cx - (bounds.width() / 2.0 + bounds.min.x) as i32,
                cy - (bounds.height() / 2.0 + bounds.min.y) as i32,
            )
        }
        None => {
            // Nominal metrics when the glyph has no outline to measure.
            let advance = scaled.h_advance(glyph_id);
            let em = ascent - scaled.descent();
            (cx - (advance / 2.0) as i32, cy - (em / 2.0) as i32)
        }
    };
    draw_text_mut(img, BRAND_COLOR, x, y, scale, font, &BADGE_GLYPH.to_string());
}

// 5x9 bitmap of the brand glyph, the guaranteed last resort when no system
// font is available.
const FALLBACK_GLYPH_ROWS: [&str; 9] = [
    "..##.",
    ".#..#",
    ".#...",
    "###..",
    ".#...",
    ".#...",
    ".#...",
    ".#...",
    ".#...",
];

fn stamp_fallback_glyph(img: &mut RgbImage, target_px: u32, cx: i32, cy: i32) {
    let rows = FALLBACK_GLYPH_ROWS.len() as u32;
    let cols = FALLBACK_GLYPH_ROWS[0].len() as u32;
    let cell = (target_px / rows).max(1);
    let left = cx - (cols * cell) as i32 / 2;
    let top = cy - (rows * cell) as i32 / 2;

    for (row_idx, row) in FALLBACK_GLYPH_ROWS.iter().enumerate() {
        for (col_idx, c) in row.bytes().enumerate() {
            if c != b'#' {
                continue;
            }
            for dy in 0..cell {
                for dx in 0..cell {
                    let px = left + (col_idx as u32 * cell + dx) as i32;
                    let py = top + (row_idx as u32 * cell + dy) as i32;
                    if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height()
                    {
                        img.put_pixel(px as u32, py as u32, BRAND_COLOR);
                    }
                }
            }
        }
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_only_at_threshold() {
        assert!(applies(200, 200));
        assert!(applies(640, 480));
        assert!(!applies(199, 400));
        assert!(!applies(400, 199));
        assert!(!applies(66, 66));
    }

    #[test]
    fn test_badge_draws_disc_and_glyph() {
        let mut img = RgbImage::from_pixel(300, 300, Rgb([0, 0, 0]));
        draw_center_badge(&mut img);

        // Inside the disc but left of any glyph ink: disc radius is 36 here
        // and the glyph is at most ~25 px wide.
        assert_eq!(*img.get_pixel(122, 150), WHITE);
        // Glyph ink is present whichever font path was taken.
        assert!(img.pixels().any(|p| *p == BRAND_COLOR));
        // Corners are untouched.
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(299, 299), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_fallback_glyph_stays_near_center() {
        let mut img = RgbImage::from_pixel(240, 240, WHITE);
        stamp_fallback_glyph(&mut img, 40, 120, 120);

        let ink: Vec<(u32, u32)> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == BRAND_COLOR)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!ink.is_empty());
        for (x, y) in ink {
            assert!((90..150).contains(&x), "x = {x}");
            assert!((90..150).contains(&y), "y = {y}");
        }
    }

    #[test]
    fn test_fallback_glyph_clips_at_image_edge() {
        // Stamping near the corner must not panic or wrap.
        let mut img = RgbImage::from_pixel(20, 20, WHITE);
        stamp_fallback_glyph(&mut img, 40, 2, 2);
        assert!(img.pixels().any(|p| *p == BRAND_COLOR));
    }
}
