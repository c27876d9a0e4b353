#[cfg(feature = "http")]
pub mod http;
pub mod image_io;
pub mod source;

#[cfg(feature = "http")]
pub use http::HttpSource;
pub use source::{DirectorySource, FrameSource};
