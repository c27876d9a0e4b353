use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use horizon_core::align::HorizonParams;
use horizon_core::consts::{DEFAULT_PANEL_COUNT, DEFAULT_VOTE_THRESHOLD};
use horizon_core::io::image_io::{load_frame, save_image};
use horizon_core::panels::process_with;

#[derive(Args)]
pub struct LevelArgs {
    /// Input image
    pub file: PathBuf,

    /// Number of stacked panels in the image
    #[arg(long, default_value_t = DEFAULT_PANEL_COUNT)]
    pub panels: usize,

    /// Minimum Hough votes for a line to count as horizon evidence
    #[arg(long, default_value_t = DEFAULT_VOTE_THRESHOLD)]
    pub vote_threshold: u32,

    /// Output file path (format from extension)
    #[arg(short, long, default_value = "leveled.jpg")]
    pub output: PathBuf,
}

pub fn run(args: &LevelArgs) -> Result<()> {
    let frame = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!(
        "Leveling {} ({}x{}, {} panels)",
        args.file.display(),
        frame.width(),
        frame.height(),
        args.panels
    );

    let params = HorizonParams {
        vote_threshold: args.vote_threshold,
        ..HorizonParams::default()
    };
    let leveled = process_with(&frame, args.panels, &params, None)?;

    save_image(&leveled, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!(
        "Saved {}x{} to {}",
        leveled.width(),
        leveled.height(),
        args.output.display()
    );

    Ok(())
}
