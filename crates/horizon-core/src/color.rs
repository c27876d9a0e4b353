use image::{GrayImage, Luma, RgbImage};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// Convert an RGB raster to 8-bit luminance using ITU-R BT.601 weights.
///
/// Values are rounded to the nearest integer so that pure white maps to 255
/// and pure black to 0.
pub fn luminance(image: &RgbImage) -> GrayImage {
    let (w, h) = image.dimensions();
    GrayImage::from_fn(w, h, |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let l = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
        Luma([l.round().clamp(0.0, 255.0) as u8])
    })
}
