//! Saves finished images and best-effort debug artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use image::{DynamicImage, RgbImage};

use crate::FbqrResult;

/// Saves `img` under `dir` as `<basename>_<YYYYMMDD_HHMMSS>.png`.
///
/// The directory is created if it does not exist. The timestamp has
/// one-second granularity, so runs within the same second overwrite each
/// other (last write wins).
///
/// # Arguments
///
/// * `img` - The finished image.
/// * `dir` - Output directory, created when absent.
/// * `basename` - Filename prefix, e.g. `facebook_qr`.
///
/// # Errors
///
/// Returns an error when the directory cannot be created or the PNG encoding
/// or write fails.
///
/// # Example
///
/// ```no_run
/// use fbqr::output::save_with_timestamp;
/// use image::RgbImage;
/// use std::path::Path;
///
/// let img = RgbImage::new(32, 32);
/// let path = save_with_timestamp(&img, Path::new("generated"), "facebook_qr").unwrap();
/// println!("{}", path.display());
/// ```
pub fn save_with_timestamp(img: &RgbImage, dir: &Path, basename: &str) -> FbqrResult<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{basename}_{stamp}.png"));
    img.save(&path)?;
    log::info!("saved {}", path.display());
    Ok(path)
}

/// Writes an intermediate artifact for troubleshooting, ignoring failures.
///
/// Never creates directories and never reports an error; a failed write is
/// logged at debug level and generation continues unconditionally.
pub fn write_debug(img: &DynamicImage, dir: &Path, filename: &str) {
    let path = dir.join(filename);
    if let Err(err) = img.save(&path) {
        log::debug!("debug artifact {} not written: {err}", path.display());
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_save_creates_directory_and_timestamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");
        let img = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));

        let path = save_with_timestamp(&img, &nested, "facebook_qr").unwrap();
        assert!(path.exists());

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("facebook_qr_"));
        assert!(name.ends_with(".png"));
        // facebook_qr_YYYYMMDD_HHMMSS.png
        assert_eq!(name.len(), "facebook_qr_".len() + 15 + ".png".len());
    }

    #[test]
    fn test_saved_file_round_trips_as_png() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(6, 3, Rgb([10, 25, 77]));

        let path = save_with_timestamp(&img, dir.path(), "facebook_qr").unwrap();
        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_write_debug_swallows_failures() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let img = DynamicImage::from(RgbImage::new(2, 2));

        // The target directory does not exist; the write fails silently.
        write_debug(&img, &missing, "debug_qr_mask.png");
        assert!(!missing.exists());
    }

    #[test]
    fn test_write_debug_writes_when_possible() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::from(RgbImage::new(2, 2));

        write_debug(&img, dir.path(), "debug_colored_qr.png");
        assert!(dir.path().join("debug_colored_qr.png").exists());
    }
}
