use image::{GrayImage, RgbImage};

use crate::color::luminance;
use crate::consts::{DEFAULT_BLANK_THRESHOLD, HISTOGRAM_BINS};

/// 256-bucket histogram of an 8-bit luminance image.
pub fn luminance_histogram(gray: &GrayImage) -> [u64; HISTOGRAM_BINS] {
    let mut histogram = [0u64; HISTOGRAM_BINS];
    for px in gray.pixels() {
        histogram[px.0[0] as usize] += 1;
    }
    histogram
}

/// Fraction of all pixels held by the fullest luminance bucket.
///
/// Returns 1.0 for a zero-pixel frame, which has no informative content.
pub fn dominant_bucket_fraction(frame: &RgbImage) -> f64 {
    let histogram = luminance_histogram(&luminance(frame));
    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return 1.0;
    }
    let max = histogram.iter().copied().max().unwrap_or(0);
    max as f64 / total as f64
}

/// Classify a frame as blank when any single luminance bucket holds at least
/// `threshold` of its pixels.
///
/// Pure-white and pure-black placeholders fall out of the same rule: their
/// bucket (255 or 0) is the dominant one.
pub fn is_blank_with_threshold(frame: &RgbImage, threshold: f32) -> bool {
    dominant_bucket_fraction(frame) >= threshold as f64
}

/// Classify a frame as blank using the default 95% dominance threshold.
pub fn is_blank(frame: &RgbImage) -> bool {
    is_blank_with_threshold(frame, DEFAULT_BLANK_THRESHOLD)
}
