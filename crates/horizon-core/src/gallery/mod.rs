mod compose;

pub use compose::{compose, compose_gallery};
