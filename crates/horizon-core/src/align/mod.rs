pub mod edges;
pub mod horizon;
pub mod hough;
pub mod rotate;

pub use horizon::{align, align_estimated, align_with, estimate_tilt, HorizonParams};
pub use rotate::{expanded_dimensions, rotate_expand};
