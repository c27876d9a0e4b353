use image::RgbImage;

/// A raw capture as delivered by a frame source: several camera panels
/// stacked vertically in one RGB raster.
pub type RawFrame = RgbImage;

/// One horizontal strip of a frame, corresponding to one physical camera view.
pub type Panel = RgbImage;

/// A frame whose panels have been individually leveled and re-stitched.
pub type CorrectedFrame = RgbImage;

/// Horizon tilt estimate for a single panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AlignmentEstimate {
    /// Mean deviation of the detected lines from horizontal, in degrees.
    pub angle_degrees: f64,
    /// Number of Hough lines the estimate is based on. Zero means no evidence
    /// was found and `angle_degrees` is exactly 0.
    pub line_count: usize,
}

impl AlignmentEstimate {
    /// Estimate used when no line evidence is available.
    pub fn level() -> Self {
        Self::default()
    }

    pub fn has_evidence(&self) -> bool {
        self.line_count > 0
    }
}

/// The composed montage of one cycle.
#[derive(Clone, Debug)]
pub struct Gallery {
    /// Stacked corrected frames, top to bottom.
    pub image: RgbImage,
    /// Ids of the sources that contributed, in the same order as the image rows.
    pub sources: Vec<String>,
}

impl Gallery {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
