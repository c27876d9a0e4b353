use image::GrayImage;
use imageproc::hough::{detect_lines, LineDetectionOptions, PolarLine};

use crate::consts::HORIZONTAL_NORMAL_DEGREES;
use crate::frame::AlignmentEstimate;

/// Run the Hough line transform over an edge map at 1 pixel / 1 degree
/// resolution.
pub fn detect_polar_lines(
    edges: &GrayImage,
    vote_threshold: u32,
    suppression_radius: u32,
) -> Vec<PolarLine> {
    if edges.width() == 0 || edges.height() == 0 {
        return Vec::new();
    }
    let options = LineDetectionOptions {
        vote_threshold,
        suppression_radius,
    };
    detect_lines(edges, options)
}

/// Deviation of a line from horizontal in degrees.
///
/// `angle_in_degrees` is the clockwise angle of the line's normal from the
/// x-axis in image coordinates, so a horizontal line has a normal at 90°.
pub fn deviation_from_horizontal(line: &PolarLine) -> f64 {
    line.angle_in_degrees as f64 - HORIZONTAL_NORMAL_DEGREES
}

/// Arithmetic mean of the line deviations. No lines means no rotation.
pub fn mean_deviation(lines: &[PolarLine]) -> AlignmentEstimate {
    if lines.is_empty() {
        return AlignmentEstimate::level();
    }
    let sum: f64 = lines.iter().map(deviation_from_horizontal).sum();
    AlignmentEstimate {
        angle_degrees: sum / lines.len() as f64,
        line_count: lines.len(),
    }
}
