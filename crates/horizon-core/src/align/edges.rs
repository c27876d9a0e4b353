use image::GrayImage;
use imageproc::edges::canny;

/// Binary Canny edge map of a luminance image (edge pixels are 255).
///
/// Images smaller than 3x3 have no interior neighborhood for the gradient
/// kernels and produce an empty map of the same size.
pub fn edge_map(gray: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    let (w, h) = gray.dimensions();
    if w < 3 || h < 3 {
        return GrayImage::new(w, h);
    }
    canny(gray, low_threshold, high_threshold)
}

