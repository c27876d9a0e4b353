#![allow(dead_code)]

use std::collections::HashMap;

use horizon_core::error::{HorizonError, Result};
use horizon_core::frame::RawFrame;
use horizon_core::io::FrameSource;
use image::{Rgb, RgbImage};

/// Frame filled with a single color.
pub fn solid_frame(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(rgb))
}

/// Frame whose top `top_rows` rows are `top` and the rest `bottom`.
pub fn split_frame(width: u32, height: u32, top_rows: u32, top: [u8; 3], bottom: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(width, height, |_, y| {
        if y < top_rows {
            Rgb(top)
        } else {
            Rgb(bottom)
        }
    })
}

/// Frame of `levels.len()` uniform gray strips, each `strip_height` rows.
///
/// Strip boundaries coincide with panel boundaries when split into
/// `levels.len()` panels, so no panel contains an edge.
pub fn striped_frame(width: u32, strip_height: u32, levels: &[u8]) -> RgbImage {
    let height = strip_height * levels.len() as u32;
    RgbImage::from_fn(width, height, |_, y| {
        let v = levels[(y / strip_height) as usize];
        Rgb([v, v, v])
    })
}

/// Panel with a black sky above a white sea, separated by a straight horizon
/// through the panel center that rises to the right by `degrees`.
pub fn tilted_panel(width: u32, height: u32, degrees: f64) -> RgbImage {
    let slope = degrees.to_radians().tan();
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
    RgbImage::from_fn(width, height, |x, y| {
        let boundary = cy - (x as f64 + 0.5 - cx) * slope;
        if y as f64 + 0.5 > boundary {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

/// Stack several images of equal width vertically.
pub fn stack(panels: &[RgbImage]) -> RgbImage {
    let width = panels[0].width();
    let height = panels.iter().map(|p| p.height()).sum();
    let mut out = RgbImage::new(width, height);
    let mut y0 = 0;
    for p in panels {
        for (x, y, px) in p.enumerate_pixels() {
            out.put_pixel(x, y0 + y, *px);
        }
        y0 += p.height();
    }
    out
}

/// In-memory frame source keyed by station id.
#[derive(Default)]
pub struct MemorySource {
    frames: HashMap<String, RgbImage>,
}

impl MemorySource {
    pub fn with(mut self, id: &str, frame: RgbImage) -> Self {
        self.frames.insert(id.to_string(), frame);
        self
    }
}

impl FrameSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch(&self, source_id: &str) -> Result<RawFrame> {
        self.frames
            .get(source_id)
            .cloned()
            .ok_or_else(|| HorizonError::SourceUnavailable {
                source_id: source_id.to_string(),
                reason: "not in memory".to_string(),
            })
    }
}
