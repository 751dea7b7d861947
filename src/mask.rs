//! Rasterizes an encoded QR symbol into a binary mask bitmap.

use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};

use crate::FbqrResult;

/// Encodes `payload` and renders the module grid as a binary mask.
///
/// The symbol is always encoded at error-correction level H so the center
/// badge can cover part of it without breaking scans. Each module becomes a
/// `module_size` × `module_size` pixel block; dark modules are rendered as
/// 255 and everything else, including the `border`-module quiet zone, as 0.
///
/// # Arguments
///
/// * `payload` - The text to encode. Version selection is left to the encoder.
/// * `module_size` - Edge length of one module block in pixels.
/// * `border` - Quiet-zone width in modules on each side.
///
/// # Errors
///
/// Propagates the encoder's error when the payload exceeds the symbol
/// capacity at level H.
///
/// # Example
///
/// ```
/// use fbqr::mask::render_mask;
///
/// let mask = render_mask("https://facebook.com/example", 10, 4).unwrap();
/// assert_eq!(mask.width(), mask.height());
/// ```
pub fn render_mask(payload: &str, module_size: u32, border: u32) -> FbqrResult<GrayImage> {
    let code = QrCode::with_error_correction_level(payload, EcLevel::H)?;
    let modules = code.width() as u32;
    let size = (modules + 2 * border) * module_size;
    log::debug!("QR symbol is {modules}x{modules} modules, mask {size}x{size} px");

    let mut mask = GrayImage::new(size, size);
    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        let module_x = (x / module_size) as i64 - border as i64;
        let module_y = (y / module_size) as i64 - border as i64;
        *pixel = if module_is_dark(&code, module_x, module_y) {
            Luma([255u8])
        } else {
            Luma([0u8])
        };
    }
    Ok(mask)
}

// Coordinates outside the symbol (the quiet zone) are light.
fn module_is_dark(code: &QrCode, x: i64, y: i64) -> bool {
    let width = code.width() as i64;
    if x < 0 || y < 0 || x >= width || y >= width {
        return false;
    }
    code[(x as usize, y as usize)] == Color::Dark
}
