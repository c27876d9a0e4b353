use std::path::{Path, PathBuf};

use crate::error::{HorizonError, Result};
use crate::frame::RawFrame;

use super::image_io::load_frame;

/// Supplier of raw frames keyed by capture-station id.
///
/// Any error returned by `fetch` is treated as the source being unavailable
/// for the current cycle.
pub trait FrameSource: Send + Sync {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    /// Retrieve the latest frame of one station.
    fn fetch(&self, source_id: &str) -> Result<RawFrame>;
}

/// Reads `<dir>/<source_id>.<extension>` from the local filesystem.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    dir: PathBuf,
    extension: String,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a station's frame is expected at.
    pub fn path_for(&self, source_id: &str) -> PathBuf {
        self.dir.join(format!("{source_id}.{}", self.extension))
    }
}

impl FrameSource for DirectorySource {
    fn name(&self) -> &str {
        "directory"
    }

    fn fetch(&self, source_id: &str) -> Result<RawFrame> {
        let path = self.path_for(source_id);
        if !path.is_file() {
            return Err(HorizonError::SourceUnavailable {
                source_id: source_id.to_string(),
                reason: format!("no frame at {}", path.display()),
            });
        }
        load_frame(&path)
    }
}
