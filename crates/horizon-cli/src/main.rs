mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "horizon", about = "Horizon-leveled camera panel galleries")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one gallery cycle over all configured stations
    Run(commands::run::RunArgs),
    /// Run gallery cycles repeatedly on a fixed interval
    Watch(commands::watch::WatchArgs),
    /// Level the panels of a single image file
    Level(commands::level::LevelArgs),
    /// Report blank classification and per-panel tilt of an image file
    Check(commands::check::CheckArgs),
    /// Print or save a default gallery config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Level(args) => commands::level::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
