use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use horizon_core::consts::DEFAULT_WATCH_INTERVAL_SECS;
use tracing::{error, info};

use super::run::{load_config, run_once, RunArgs};

#[derive(Args)]
pub struct WatchArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Seconds between the start of consecutive cycles
    #[arg(long, default_value_t = DEFAULT_WATCH_INTERVAL_SECS)]
    pub interval: u64,

    /// Stop after this many cycles (runs forever if omitted)
    #[arg(long)]
    pub cycles: Option<usize>,
}

/// Re-run the gallery cycle on a fixed interval. A failed cycle is logged and
/// the loop carries on.
pub fn run(args: &WatchArgs) -> Result<()> {
    let config = load_config(&args.run)?;
    let interval = Duration::from_secs(args.interval);

    let mut cycle = 0usize;
    loop {
        cycle += 1;
        info!(cycle, "Starting scheduled cycle");
        let started = Instant::now();
        if let Err(e) = run_once(&config) {
            error!(cycle, "Gallery cycle failed: {e:#}");
        }

        if args.cycles.is_some_and(|max| cycle >= max) {
            break;
        }
        let delay = next_delay(interval, started.elapsed());
        println!("Next cycle in {}s", delay.as_secs());
        std::thread::sleep(delay);
    }

    Ok(())
}

/// Time left until the next cycle should start. A cycle that overran the
/// interval is followed immediately by the next one.
fn next_delay(interval: Duration, elapsed: Duration) -> Duration {
    interval.saturating_sub(elapsed)
}
