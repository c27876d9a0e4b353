use thiserror::Error;

#[derive(Error, Debug)]
pub enum HorizonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Source {source_id} unavailable: {reason}")]
    SourceUnavailable { source_id: String, reason: String },

    #[error("Frame processing deadline exceeded after {elapsed_ms} ms")]
    DeadlineExceeded { elapsed_ms: u64 },

    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, HorizonError>;
