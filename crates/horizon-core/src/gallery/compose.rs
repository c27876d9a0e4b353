use image::imageops::replace;
use image::RgbImage;

use crate::frame::{CorrectedFrame, Gallery};

fn stack_vertically(frames: &[&RgbImage]) -> Option<RgbImage> {
    if frames.is_empty() {
        return None;
    }
    let width = frames.iter().map(|f| f.width()).max().unwrap_or(0);
    let height: u32 = frames.iter().map(|f| f.height()).sum();

    let mut canvas = RgbImage::new(width, height);
    let mut y_offset = 0i64;
    for frame in frames {
        replace(&mut canvas, *frame, 0, y_offset);
        y_offset += frame.height() as i64;
    }
    Some(canvas)
}

/// Stack frames vertically on a black canvas as wide as the widest frame.
///
/// Returns `None` for an empty sequence.
pub fn compose(frames: &[CorrectedFrame]) -> Option<RgbImage> {
    let refs: Vec<&RgbImage> = frames.iter().collect();
    stack_vertically(&refs)
}

/// Compose a gallery from `(source_id, frame)` pairs, keeping their order.
pub fn compose_gallery(entries: &[(String, CorrectedFrame)]) -> Option<Gallery> {
    let refs: Vec<&RgbImage> = entries.iter().map(|(_, f)| f).collect();
    let image = stack_vertically(&refs)?;
    Some(Gallery {
        image,
        sources: entries.iter().map(|(id, _)| id.clone()).collect(),
    })
}
