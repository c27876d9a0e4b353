/// Number of stacked camera panels in one frame of the reference rig.
pub const DEFAULT_PANEL_COUNT: usize = 6;

/// Fraction of pixels a single luminance bucket must hold for a frame to be
/// classified blank.
pub const DEFAULT_BLANK_THRESHOLD: f32 = 0.95;

/// Number of buckets in the 8-bit luminance histogram.
pub const HISTOGRAM_BINS: usize = 256;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Canny hysteresis low threshold on gradient magnitude.
pub const DEFAULT_CANNY_LOW: f32 = 50.0;

/// Canny hysteresis high threshold on gradient magnitude.
pub const DEFAULT_CANNY_HIGH: f32 = 150.0;

/// Minimum Hough accumulator votes for a line to be reported.
pub const DEFAULT_VOTE_THRESHOLD: u32 = 150;

/// Radius of non-maximum suppression in the Hough accumulator.
pub const DEFAULT_SUPPRESSION_RADIUS: u32 = 8;

/// Polar angle (degrees) of the normal of a perfectly horizontal line.
pub const HORIZONTAL_NORMAL_DEGREES: f64 = 90.0;

/// Angles closer to zero than this are treated as no rotation.
pub const ANGLE_EPSILON_DEGREES: f64 = 1e-9;

/// Default interval between gallery cycles in watch mode (one hour).
pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 3600;

/// Default timeout for a single remote frame request.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
