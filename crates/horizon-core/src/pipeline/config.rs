use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::align::HorizonParams;
use crate::consts::{DEFAULT_BLANK_THRESHOLD, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PANEL_COUNT};
use crate::error::{HorizonError, Result};
use crate::io::{DirectorySource, FrameSource};

/// Everything one gallery cycle needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Station ids in the order their frames appear in the gallery.
    #[serde(default)]
    pub source_ids: Vec<String>,
    /// Number of stacked panels per frame.
    #[serde(default = "default_panel_count")]
    pub panel_count: usize,
    /// Dominant-bucket fraction at or above which a frame is blank.
    #[serde(default = "default_blank_threshold")]
    pub blank_threshold: f32,
    /// Per-frame leveling budget. `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_timeout_ms: Option<u64>,
    /// Directory galleries are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub alignment: HorizonParams,
    #[serde(default)]
    pub source: SourceConfig,
}

fn default_panel_count() -> usize {
    DEFAULT_PANEL_COUNT
}
fn default_blank_threshold() -> f32 {
    DEFAULT_BLANK_THRESHOLD
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./gallery")
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            source_ids: Vec::new(),
            panel_count: DEFAULT_PANEL_COUNT,
            blank_threshold: DEFAULT_BLANK_THRESHOLD,
            frame_timeout_ms: None,
            output_dir: default_output_dir(),
            alignment: HorizonParams::default(),
            source: SourceConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.panel_count == 0 {
            return Err(HorizonError::InvalidConfig(
                "panel_count must be at least 1".into(),
            ));
        }
        if !(self.blank_threshold > 0.0 && self.blank_threshold <= 1.0) {
            return Err(HorizonError::InvalidConfig(format!(
                "blank_threshold must be in (0, 1], got {}",
                self.blank_threshold
            )));
        }
        if self.alignment.canny_low > self.alignment.canny_high {
            return Err(HorizonError::InvalidConfig(format!(
                "canny_low ({}) exceeds canny_high ({})",
                self.alignment.canny_low, self.alignment.canny_high
            )));
        }
        if let SourceConfig::Http { url_template, .. } = &self.source {
            if !url_template.contains("{id}") {
                return Err(HorizonError::InvalidConfig(format!(
                    "url_template {url_template:?} has no {{id}} placeholder"
                )));
            }
        }
        Ok(())
    }

    /// Deadline for leveling a frame whose processing starts at `start`.
    pub fn frame_deadline(&self, start: Instant) -> Option<Instant> {
        self.frame_timeout_ms
            .map(|ms| start + Duration::from_millis(ms))
    }
}

/// Where raw frames come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// `<path>/<source_id>.<extension>` on the local filesystem.
    Directory {
        path: PathBuf,
        #[serde(default = "default_extension")]
        extension: String,
    },
    /// HTTP GET of `url_template` with `{id}` replaced by the station id.
    Http {
        url_template: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

fn default_extension() -> String {
    "jpg".to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Directory {
            path: PathBuf::from("./frames"),
            extension: default_extension(),
        }
    }
}

impl std::fmt::Display for SourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory { path, extension } => {
                write!(f, "Directory ({}/*.{})", path.display(), extension)
            }
            Self::Http { url_template, .. } => write!(f, "HTTP ({url_template})"),
        }
    }
}

impl SourceConfig {
    /// Instantiate the configured frame source.
    pub fn build(&self) -> Result<Box<dyn FrameSource>> {
        match self {
            Self::Directory { path, extension } => {
                Ok(Box::new(DirectorySource::new(path.clone(), extension.clone())))
            }
            #[cfg(feature = "http")]
            Self::Http {
                url_template,
                timeout_secs,
            } => Ok(Box::new(crate::io::HttpSource::new(
                url_template.clone(),
                Duration::from_secs(*timeout_secs),
            ))),
            #[cfg(not(feature = "http"))]
            Self::Http { .. } => Err(HorizonError::InvalidConfig(
                "HTTP sources require the `http` feature".into(),
            )),
        }
    }
}
