use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use horizon_core::consts::DEFAULT_HTTP_TIMEOUT_SECS;
use horizon_core::pipeline::config::{GalleryConfig, SourceConfig};

/// NDBC buoy stations that carry a panel camera.
const BUOY_STATIONS: &[&str] = &[
    "45007", "45012", "46002", "46011", "46012", "46015", "46025", "46026", "46027", "46028",
    "46042", "46047", "46053", "46054", "46059", "46066", "46069", "46071", "46072", "46078",
    "46085", "46086", "46087", "46088", "46089", "51000", "51001", "51002", "51003", "51004",
    "51101", "46084",
];

const BUOYCAM_URL: &str = "https://www.ndbc.noaa.gov/buoycam.php?station={id}";

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a full default GalleryConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = GalleryConfig {
        source_ids: BUOY_STATIONS.iter().map(|s| s.to_string()).collect(),
        source: SourceConfig::Http {
            url_template: BUOYCAM_URL.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        },
        ..GalleryConfig::default()
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
