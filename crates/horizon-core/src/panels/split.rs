use image::imageops::crop_imm;

use crate::frame::{Panel, RawFrame};

/// Height of each strip, or `None` when the frame cannot be split.
pub fn panel_height(frame_height: u32, panel_count: usize) -> Option<u32> {
    if panel_count == 0 || (frame_height as usize) < panel_count {
        return None;
    }
    Some(frame_height / panel_count as u32)
}

/// Height of the last strip, which runs to the bottom of the frame and so
/// carries the `height mod n` remainder rows.
pub fn last_panel_height(frame_height: u32, panel_count: usize) -> Option<u32> {
    let strip_height = panel_height(frame_height, panel_count)?;
    Some(frame_height - strip_height * (panel_count as u32 - 1))
}

/// Crop `panel_count` contiguous full-width strips of `floor(height / n)` rows.
///
/// The last strip ends at the frame's bottom edge. Returns an empty vector
/// when the frame is shorter than `panel_count`.
pub fn split_panels(frame: &RawFrame, panel_count: usize) -> Vec<Panel> {
    let (Some(strip_height), Some(last_height)) = (
        panel_height(frame.height(), panel_count),
        last_panel_height(frame.height(), panel_count),
    ) else {
        return Vec::new();
    };
    let last = panel_count as u32 - 1;
    (0..panel_count as u32)
        .map(|i| {
            let h = if i == last { last_height } else { strip_height };
            crop_imm(frame, 0, i * strip_height, frame.width(), h).to_image()
        })
        .collect()
}
