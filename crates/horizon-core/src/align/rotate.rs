use image::imageops::{rotate180, rotate270, rotate90};
use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};

use crate::consts::ANGLE_EPSILON_DEGREES;

/// Corner coordinates are snapped to this grid before rounding the canvas
/// size outwards, so that float noise does not add a spurious pixel.
const CORNER_SNAP: f64 = 1e9;

/// Canvas size that holds `width x height` rotated by `angle_degrees` about
/// its center without clipping.
///
/// Per axis: `ceil(max corner) - floor(min corner)`.
pub fn expanded_dimensions(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let (w, h) = (width as f64, height as f64);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let snap = |v: f64| (v * CORNER_SNAP).round() / CORNER_SNAP;

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (x, y) in [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)] {
        let rx = snap(cos * (x - cx) - sin * (y - cy) + cx);
        let ry = snap(sin * (x - cx) + cos * (y - cy) + cy);
        min_x = min_x.min(rx);
        max_x = max_x.max(rx);
        min_y = min_y.min(ry);
        max_y = max_y.max(ry);
    }

    let nw = (max_x.ceil() - min_x.floor()).max(0.0) as u32;
    let nh = (max_y.ceil() - min_y.floor()).max(0.0) as u32;
    (nw, nh)
}

/// Exact quarter turns (clockwise) if `angle_degrees` is a multiple of 90.
fn quarter_turns(angle_degrees: f64) -> Option<u32> {
    let quarters = angle_degrees.rem_euclid(360.0) / 90.0;
    if (quarters - quarters.round()).abs() < ANGLE_EPSILON_DEGREES / 90.0 {
        Some(quarters.round() as u32 % 4)
    } else {
        None
    }
}

/// Rotate an image about its center by `angle_degrees`, clockwise-positive in
/// image coordinates, growing the canvas so no source content is clipped.
///
/// Uncovered canvas is filled black. Multiples of 90° are exact pixel
/// transposes; anything else is resampled bicubically.
pub fn rotate_expand(image: &RgbImage, angle_degrees: f64) -> RgbImage {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 || !angle_degrees.is_finite() {
        return image.clone();
    }

    match quarter_turns(angle_degrees) {
        Some(0) => return image.clone(),
        Some(1) => return rotate90(image),
        Some(2) => return rotate180(image),
        Some(3) => return rotate270(image),
        _ => {}
    }

    let (nw, nh) = expanded_dimensions(w, h, angle_degrees);
    let projection = Projection::translate(nw as f32 / 2.0, nh as f32 / 2.0)
        * Projection::rotate(angle_degrees.to_radians() as f32)
        * Projection::translate(-(w as f32) / 2.0, -(h as f32) / 2.0);

    let mut out = RgbImage::new(nw, nh);
    warp_into(
        image,
        &projection,
        Interpolation::Bicubic,
        Rgb([0, 0, 0]),
        &mut out,
    );
    out
}
