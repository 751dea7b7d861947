//! # fbqr
//!
//! A Rust crate for generating decorative QR codes with gradient styling.
//!
//! `fbqr` encodes a URL into a QR code at the highest error-correction level,
//! colors the dark modules with a named two-color horizontal gradient (or a
//! solid fill), overlays a centered circular "f" badge when the image is large
//! enough to carry one, and saves the result as a timestamped PNG. Symbol
//! encoding is delegated to the `qrcode` crate; this crate owns the
//! compositing pipeline built around it.
//!
//! ## Features
//!
//! - Encode any text or URL payload at error-correction level H.
//! - Four named color palettes: solid black plus three gradients.
//! - Centered logo badge with system-font lookup and a built-in fallback glyph.
//! - Timestamped PNG output with best-effort debug artifacts for
//!   troubleshooting.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fbqr = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Render a styled QR code and save it:
//!
//! ```no_run
//! use fbqr::{build_styled_qr, output, RenderOptions};
//! use std::path::Path;
//!
//! fn main() -> fbqr::FbqrResult<()> {
//!     let img = build_styled_qr(
//!         "https://facebook.com/example",
//!         "2",
//!         &RenderOptions::default(),
//!     )?;
//!     let path = output::save_with_timestamp(&img, Path::new("generated"), "facebook_qr")?;
//!     println!("saved to {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`mask`]: QR module grid rasterization into a binary mask bitmap.
//! - [`style`]: Named color palette lookup.
//! - [`gradient`]: Gradient fill and mask compositing.
//! - [`badge`]: Centered circular logo overlay.
//! - [`output`]: Timestamped saves and debug artifacts.

#![forbid(unsafe_code)]

pub mod badge;
pub mod gradient;
pub mod mask;
pub mod output;
pub mod style;

use std::path::PathBuf;

use image::{DynamicImage, RgbImage};

pub type FbqrResult<T> = Result<T, FbqrError>;

#[derive(thiserror::Error, Debug)]
pub enum FbqrError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rendering knobs for one generation request.
///
/// `module_size` is the edge length of one QR module in pixels and `border`
/// the quiet-zone width in modules. When `debug_dir` is set, the raw mask and
/// the pre-badge composite are written there on a best-effort basis.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub module_size: u32,
    pub border: u32,
    pub debug_dir: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_size: 10,
            border: 4,
            debug_dir: None,
        }
    }
}

/// Runs the full compositing pipeline and returns the finished image.
///
/// The payload is rasterized into a module mask, the palette selected by
/// `style_key` (falling back to the default entry for unknown keys) is turned
/// into a fill image, the fill is composited over a white canvas through the
/// mask, and the badge is drawn when the result is large enough.
///
/// # Arguments
///
/// * `payload` - The text to encode, typically a URL. Must be non-empty.
/// * `style_key` - Palette selector, see [`style::STYLES`].
/// * `options` - Module sizing and debug-artifact settings.
///
/// # Errors
///
/// Returns [`FbqrError::Encode`] when the payload exceeds the symbol capacity
/// at error-correction level H.
///
/// # Example
///
/// ```
/// use fbqr::{build_styled_qr, RenderOptions};
///
/// let img = build_styled_qr("https://facebook.com/example", "2", &RenderOptions::default())
///     .unwrap();
/// assert_eq!(img.width(), img.height());
/// ```
pub fn build_styled_qr(
    payload: &str,
    style_key: &str,
    options: &RenderOptions,
) -> FbqrResult<RgbImage> {
    let mask = mask::render_mask(payload, options.module_size, options.border)?;
    if let Some(dir) = &options.debug_dir {
        output::write_debug(&DynamicImage::from(mask.clone()), dir, "debug_qr_mask.png");
    }

    let palette = style::resolve(style_key);
    log::debug!("rendering payload with palette {}", palette.name);

    let (width, height) = mask.dimensions();
    let fill = gradient::linear_gradient(width, height, palette.start, palette.end);
    let mut composed = gradient::composite_over_white(&fill, &mask);
    if let Some(dir) = &options.debug_dir {
        output::write_debug(
            &DynamicImage::from(composed.clone()),
            dir,
            "debug_colored_qr.png",
        );
    }

    if badge::applies(width, height) {
        badge::draw_center_badge(&mut composed);
    }
    Ok(composed)
}
