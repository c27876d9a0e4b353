use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use horizon_core::align::{estimate_tilt, HorizonParams};
use horizon_core::consts::{DEFAULT_BLANK_THRESHOLD, DEFAULT_PANEL_COUNT};
use horizon_core::io::image_io::load_frame;
use horizon_core::panels::{last_panel_height, panel_height, split_panels};
use horizon_core::validate::{dominant_bucket_fraction, is_blank_with_threshold};

#[derive(Args)]
pub struct CheckArgs {
    /// Input image
    pub file: PathBuf,

    /// Number of stacked panels in the image
    #[arg(long, default_value_t = DEFAULT_PANEL_COUNT)]
    pub panels: usize,

    /// Dominant luminance fraction at which a frame counts as blank
    #[arg(long, default_value_t = DEFAULT_BLANK_THRESHOLD)]
    pub blank_threshold: f32,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let frame = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let dominant = dominant_bucket_fraction(&frame);
    let blank = is_blank_with_threshold(&frame, args.blank_threshold);

    println!("File:       {}", args.file.display());
    println!("Dimensions: {}x{}", frame.width(), frame.height());
    println!("Dominant:   {:.1}% of pixels in one luminance bucket", dominant * 100.0);
    println!(
        "Blank:      {}",
        if blank { "yes (frame would be skipped)" } else { "no" }
    );

    if blank {
        return Ok(());
    }

    let Some(strip_height) = panel_height(frame.height(), args.panels) else {
        println!(
            "Panels:     frame shorter than {} rows, passed through unmodified",
            args.panels
        );
        return Ok(());
    };

    println!("Panels:     {} x {} rows", args.panels, strip_height);
    if let Some(last) = last_panel_height(frame.height(), args.panels).filter(|&h| h != strip_height) {
        println!("            last panel {last} rows (includes remainder)");
    }
    let params = HorizonParams::default();
    for (i, panel) in split_panels(&frame, args.panels).iter().enumerate() {
        let estimate = estimate_tilt(panel, &params);
        if estimate.has_evidence() {
            println!(
                "  Panel {}:  {:+.2}° ({} lines)",
                i + 1,
                estimate.angle_degrees,
                estimate.line_count
            );
        } else {
            println!("  Panel {}:  no horizon lines, left as is", i + 1);
        }
    }

    Ok(())
}
