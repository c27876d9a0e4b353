use image::imageops::{crop_imm, replace};
use image::RgbImage;

use crate::frame::{CorrectedFrame, Panel};

/// Rows removed from the top and bottom of the stitched canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrimAmounts {
    pub top: u32,
    pub bottom: u32,
}

/// Growth of the first and last panel beyond the strips they were cut from.
///
/// `last_strip_height` includes the remainder rows, so they are not mistaken
/// for growth. Interior panel growth is not compensated.
pub fn trim_amounts(panels: &[Panel], strip_height: u32, last_strip_height: u32) -> TrimAmounts {
    match (panels.first(), panels.last()) {
        (Some(first), Some(last)) => TrimAmounts {
            top: first.height().saturating_sub(strip_height),
            bottom: last.height().saturating_sub(last_strip_height),
        },
        _ => TrimAmounts::default(),
    }
}

/// Paste panels top to bottom at x = 0 on a canvas `width` pixels wide, then
/// trim the first and last panels' growth.
///
/// Panels wider than `width` are clipped on the right. When the trims would
/// leave no rows the untrimmed canvas is returned.
pub fn stitch_panels(
    panels: &[Panel],
    width: u32,
    strip_height: u32,
    last_strip_height: u32,
) -> CorrectedFrame {
    let total_height: u32 = panels.iter().map(|p| p.height()).sum();
    let mut combined = RgbImage::new(width, total_height);

    let mut y_offset = 0i64;
    for panel in panels {
        replace(&mut combined, panel, 0, y_offset);
        y_offset += panel.height() as i64;
    }

    let trim = trim_amounts(panels, strip_height, last_strip_height);
    let bottom = total_height.saturating_sub(trim.bottom);
    if bottom <= trim.top {
        return combined;
    }
    crop_imm(&combined, 0, trim.top, width, bottom - trim.top).to_image()
}
