pub mod blank;

pub use blank::{dominant_bucket_fraction, is_blank, is_blank_with_threshold, luminance_histogram};
