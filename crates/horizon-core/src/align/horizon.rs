use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::luminance;
use crate::consts::{
    ANGLE_EPSILON_DEGREES, DEFAULT_CANNY_HIGH, DEFAULT_CANNY_LOW, DEFAULT_SUPPRESSION_RADIUS,
    DEFAULT_VOTE_THRESHOLD,
};
use crate::frame::{AlignmentEstimate, Panel};

use super::edges::edge_map;
use super::hough::{detect_polar_lines, mean_deviation};
use super::rotate::rotate_expand;

/// Edge and line detection parameters for horizon estimation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HorizonParams {
    /// Canny hysteresis low threshold.
    #[serde(default = "default_canny_low")]
    pub canny_low: f32,
    /// Canny hysteresis high threshold.
    #[serde(default = "default_canny_high")]
    pub canny_high: f32,
    /// Minimum accumulator votes for a Hough line.
    #[serde(default = "default_vote_threshold")]
    pub vote_threshold: u32,
    /// Non-maximum suppression radius in the Hough accumulator.
    #[serde(default = "default_suppression_radius")]
    pub suppression_radius: u32,
}

fn default_canny_low() -> f32 {
    DEFAULT_CANNY_LOW
}
fn default_canny_high() -> f32 {
    DEFAULT_CANNY_HIGH
}
fn default_vote_threshold() -> u32 {
    DEFAULT_VOTE_THRESHOLD
}
fn default_suppression_radius() -> u32 {
    DEFAULT_SUPPRESSION_RADIUS
}

impl Default for HorizonParams {
    fn default() -> Self {
        Self {
            canny_low: DEFAULT_CANNY_LOW,
            canny_high: DEFAULT_CANNY_HIGH,
            vote_threshold: DEFAULT_VOTE_THRESHOLD,
            suppression_radius: DEFAULT_SUPPRESSION_RADIUS,
        }
    }
}

/// Estimate the horizon tilt of a panel.
///
/// Luminance -> Canny edges -> Hough lines -> mean of `theta - 90°` over all
/// detected lines. Every line votes, not only near-horizontal ones.
pub fn estimate_tilt(panel: &Panel, params: &HorizonParams) -> AlignmentEstimate {
    if panel.width() == 0 || panel.height() == 0 {
        return AlignmentEstimate::level();
    }
    let gray = luminance(panel);
    let edges = edge_map(&gray, params.canny_low, params.canny_high);
    let lines = detect_polar_lines(&edges, params.vote_threshold, params.suppression_radius);
    mean_deviation(&lines)
}

/// Level a panel and also return the estimate that drove the rotation.
pub fn align_estimated(panel: &Panel, params: &HorizonParams) -> (RgbImage, AlignmentEstimate) {
    if panel.width() == 0 || panel.height() == 0 {
        return (panel.clone(), AlignmentEstimate::level());
    }

    let estimate = estimate_tilt(panel, params);
    debug!(
        angle = estimate.angle_degrees,
        lines = estimate.line_count,
        "Horizon tilt estimated"
    );

    if estimate.angle_degrees.abs() < ANGLE_EPSILON_DEGREES {
        return (panel.clone(), estimate);
    }
    (rotate_expand(panel, -estimate.angle_degrees), estimate)
}

/// Level a panel with explicit detection parameters.
pub fn align_with(panel: &Panel, params: &HorizonParams) -> RgbImage {
    align_estimated(panel, params).0
}

/// Level a panel with default detection parameters.
///
/// The result contains the whole source panel and is generally larger than it.
pub fn align(panel: &Panel) -> RgbImage {
    align_with(panel, &HorizonParams::default())
}
