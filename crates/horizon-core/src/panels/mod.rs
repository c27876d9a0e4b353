mod split;
mod stitch;

use std::time::Instant;

use tracing::debug;

use crate::align::{align_estimated, HorizonParams};
use crate::error::{HorizonError, Result};
use crate::frame::{CorrectedFrame, RawFrame};

pub use split::{last_panel_height, panel_height, split_panels};
pub use stitch::{stitch_panels, trim_amounts, TrimAmounts};

/// Split a frame into `panel_count` strips, level each independently and
/// stitch them back together.
///
/// Frames shorter than `panel_count` rows are returned unmodified.
pub fn process(frame: &RawFrame, panel_count: usize) -> CorrectedFrame {
    match process_with(frame, panel_count, &HorizonParams::default(), None) {
        Ok(corrected) => corrected,
        // Without a deadline there is no failure path.
        Err(_) => frame.clone(),
    }
}

/// Same as [`process`] with explicit detection parameters and an optional
/// deadline, checked before each panel is aligned.
pub fn process_with(
    frame: &RawFrame,
    panel_count: usize,
    params: &HorizonParams,
    deadline: Option<Instant>,
) -> Result<CorrectedFrame> {
    let Some(strip_height) = panel_height(frame.height(), panel_count) else {
        debug!(
            height = frame.height(),
            panel_count, "Frame too short to split, passing through"
        );
        return Ok(frame.clone());
    };

    let started = Instant::now();
    let strips = split_panels(frame, panel_count);
    let mut aligned = Vec::with_capacity(strips.len());
    for (i, strip) in strips.iter().enumerate() {
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                return Err(HorizonError::DeadlineExceeded {
                    elapsed_ms: started.elapsed().as_millis() as u64,
                });
            }
        }
        let (panel, estimate) = align_estimated(strip, params);
        debug!(
            panel = i,
            angle = estimate.angle_degrees,
            width = panel.width(),
            height = panel.height(),
            "Panel leveled"
        );
        aligned.push(panel);
    }

    let last_height = strips.last().map_or(strip_height, |s| s.height());
    Ok(stitch_panels(&aligned, frame.width(), strip_height, last_height))
}
