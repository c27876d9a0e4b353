use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{ImageFormat, RgbImage};

use crate::error::Result;
use crate::frame::{Gallery, RawFrame};

/// Decode an encoded image (JPEG, PNG, ...) held in memory into an RGB frame.
pub fn decode_frame(bytes: &[u8]) -> Result<RawFrame> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.into_rgb8())
}

/// Load an image file into an RGB frame.
pub fn load_frame(path: &Path) -> Result<RawFrame> {
    let img = image::open(path)?;
    Ok(img.into_rgb8())
}

/// Save an RGB image as JPEG.
pub fn save_jpeg(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Jpeg)?;
    Ok(())
}

/// Save an RGB image as PNG.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an RGB image, choosing the format from the file extension.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => save_png(image, path),
        Some("tiff" | "tif") => {
            image.save_with_format(path, ImageFormat::Tiff)?;
            Ok(())
        }
        _ => save_jpeg(image, path),
    }
}

/// File name of a gallery written at `unix_seconds`.
pub fn gallery_file_name(unix_seconds: u64) -> String {
    format!("gallery_{unix_seconds}.jpg")
}

/// First free gallery path in `dir` for `unix_seconds`: `gallery_<secs>.jpg`,
/// then `gallery_<secs>_1.jpg`, `gallery_<secs>_2.jpg`, ...
pub fn gallery_path(dir: &Path, unix_seconds: u64) -> PathBuf {
    let path = dir.join(gallery_file_name(unix_seconds));
    if !path.exists() {
        return path;
    }
    (1u32..)
        .map(|n| dir.join(format!("gallery_{unix_seconds}_{n}.jpg")))
        .find(|p| !p.exists())
        .unwrap_or(path)
}

/// Write a gallery into `dir` as `gallery_<unix-seconds>.jpg`, creating the
/// directory if needed. A gallery already written in the same second is not
/// overwritten. Returns the written path.
pub fn save_gallery(gallery: &Gallery, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = gallery_path(dir, now);
    save_jpeg(&gallery.image, &path)?;
    Ok(path)
}
