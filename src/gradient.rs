//! Gradient fill generation and mask compositing.

use image::{GrayImage, Rgb, RgbImage};

/// Builds the fill image for the dark modules.
///
/// Identical endpoint colors produce a solid fill. Otherwise every column `x`
/// is painted with the blend of `start` and `end` at `t = x / (width - 1)`,
/// giving a left-to-right gradient that is constant along each column. A
/// one-pixel-wide image uses `t = 0`.
///
/// # Example
///
/// ```
/// use fbqr::gradient::linear_gradient;
/// use image::Rgb;
///
/// let img = linear_gradient(100, 20, Rgb([10, 25, 77]), Rgb([14, 203, 180]));
/// assert_eq!(*img.get_pixel(0, 0), Rgb([10, 25, 77]));
/// assert_eq!(*img.get_pixel(99, 0), Rgb([14, 203, 180]));
/// ```
pub fn linear_gradient(width: u32, height: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbImage {
    if start == end {
        return RgbImage::from_pixel(width, height, start);
    }
    let mut img = RgbImage::new(width, height);
    for (x, _y, pixel) in img.enumerate_pixels_mut() {
        let t = if width > 1 {
            x as f32 / (width - 1) as f32
        } else {
            0.0
        };
        *pixel = blend(start, end, t);
    }
    img
}

fn blend(start: Rgb<u8>, end: Rgb<u8>, t: f32) -> Rgb<u8> {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Rgb([
        channel(start[0], end[0]),
        channel(start[1], end[1]),
        channel(start[2], end[2]),
    ])
}

/// Composites `fill` over a white canvas, selected per pixel by `mask`.
///
/// Mask values of 128 and above pick the fill pixel, everything below stays
/// white. The output has exactly the mask's dimensions; `fill` must match.
pub fn composite_over_white(fill: &RgbImage, mask: &GrayImage) -> RgbImage {
    debug_assert_eq!(fill.dimensions(), mask.dimensions());
    let (width, height) = mask.dimensions();
    let mut out = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        if mask.get_pixel(x, y)[0] >= 128 {
            *pixel = *fill.get_pixel(x, y);
        }
    }
    out
}
