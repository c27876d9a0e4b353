use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use horizon_core::align::HorizonParams;
use horizon_core::consts::{DEFAULT_BLANK_THRESHOLD, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PANEL_COUNT};
use horizon_core::io::image_io::save_gallery;
use horizon_core::pipeline::config::{GalleryConfig, SourceConfig};
use horizon_core::pipeline::{run_cycle_reported, PipelineStage, ProgressReporter};
use indicatif::{ProgressBar, ProgressStyle};

use crate::summary::{print_cycle_report, print_cycle_summary};

#[derive(Args)]
pub struct RunArgs {
    /// Gallery config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma-separated station ids, in gallery order
    #[arg(long, value_delimiter = ',')]
    pub stations: Vec<String>,

    /// Directory holding <station>.<ext> frames
    #[arg(long, default_value = "./frames")]
    pub frames: PathBuf,

    /// Frame file extension in --frames
    #[arg(long, default_value = "jpg")]
    pub extension: String,

    /// Fetch frames over HTTP instead; `{id}` is replaced by the station id
    #[arg(long)]
    pub url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    pub http_timeout: u64,

    /// Number of stacked panels per frame
    #[arg(long, default_value_t = DEFAULT_PANEL_COUNT)]
    pub panels: usize,

    /// Dominant luminance fraction at which a frame counts as blank
    #[arg(long, default_value_t = DEFAULT_BLANK_THRESHOLD)]
    pub blank_threshold: f32,

    /// Per-frame leveling budget in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Directory galleries are written to
    #[arg(short, long, default_value = "./gallery")]
    pub output: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = load_config(args)?;
    run_once(&config)?;
    Ok(())
}

/// Resolve the cycle configuration from `--config` or the individual flags.
pub fn load_config(args: &RunArgs) -> Result<GalleryConfig> {
    let config = if let Some(ref config_path) = args.config {
        read_config(config_path)?
    } else {
        build_config_from_args(args)
    };
    config.validate().context("Invalid gallery config")?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<GalleryConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid gallery config")
}

fn build_config_from_args(args: &RunArgs) -> GalleryConfig {
    let source = match args.url {
        Some(ref url) => SourceConfig::Http {
            url_template: url.clone(),
            timeout_secs: args.http_timeout,
        },
        None => SourceConfig::Directory {
            path: args.frames.clone(),
            extension: args.extension.clone(),
        },
    };

    GalleryConfig {
        source_ids: args.stations.clone(),
        panel_count: args.panels,
        blank_threshold: args.blank_threshold,
        frame_timeout_ms: args.timeout_ms,
        output_dir: args.output.clone(),
        alignment: HorizonParams::default(),
        source,
    }
}

/// Run a single cycle and save its gallery. Returns the written path, if any.
pub fn run_once(config: &GalleryConfig) -> Result<Option<PathBuf>> {
    let source = config.source.build().context("Failed to open frame source")?;
    print_cycle_summary(config, source.name());

    let reporter = Arc::new(BarReporter::new()?);
    let report = run_cycle_reported(config, source.as_ref(), reporter.clone())?;
    reporter.bar.finish_with_message("Done");

    print_cycle_report(&report);

    match report.gallery {
        Some(ref gallery) => {
            let path = save_gallery(gallery, &config.output_dir)
                .with_context(|| format!("Failed to save gallery to {}", config.output_dir.display()))?;
            println!("\nGallery saved to {}", path.display());
            Ok(Some(path))
        }
        None => {
            println!("\nNo usable frames this cycle; nothing written.");
            Ok(None)
        }
    }
}

/// Drives an indicatif bar from pipeline progress callbacks.
struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    fn new() -> Result<Self> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg:20} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        Ok(Self { bar })
    }
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
        self.bar.set_length(total_items.unwrap_or(1) as u64);
        self.bar.set_position(0);
    }

    fn advance(&self, sources_done: usize) {
        self.bar.set_position(sources_done as u64);
    }

    fn finish_stage(&self) {
        if let Some(len) = self.bar.length() {
            self.bar.set_position(len);
        }
    }
}
