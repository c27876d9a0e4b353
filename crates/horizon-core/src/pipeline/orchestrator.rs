use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::{HorizonError, Result};
use crate::frame::CorrectedFrame;
use crate::gallery::compose_gallery;
use crate::io::FrameSource;
use crate::panels::process_with;
use crate::validate::is_blank_with_threshold;

use super::config::GalleryConfig;
use super::types::{CycleReport, SilentReporter, PipelineStage, ProgressReporter, SourceOutcome};

/// Fetch, validate and level the frame of a single source.
///
/// Every failure is folded into the returned outcome; the frame is present
/// only for `SourceOutcome::Accepted`.
pub fn level_source(
    source: &dyn FrameSource,
    source_id: &str,
    config: &GalleryConfig,
) -> (SourceOutcome, Option<CorrectedFrame>) {
    let frame = match source.fetch(source_id) {
        Ok(frame) => frame,
        Err(e) => {
            warn!(source = source_id, error = %e, "Source unavailable, skipping");
            return (SourceOutcome::Unavailable(e.to_string()), None);
        }
    };

    if is_blank_with_threshold(&frame, config.blank_threshold) {
        info!(source = source_id, "Skipping blank frame");
        return (SourceOutcome::Blank, None);
    }

    let deadline = config.frame_deadline(Instant::now());
    let leveled = catch_unwind(AssertUnwindSafe(|| {
        process_with(&frame, config.panel_count, &config.alignment, deadline)
    }));

    match leveled {
        Ok(Ok(corrected)) => {
            info!(
                source = source_id,
                width = corrected.width(),
                height = corrected.height(),
                "Frame leveled"
            );
            (SourceOutcome::Accepted, Some(corrected))
        }
        Ok(Err(HorizonError::DeadlineExceeded { elapsed_ms })) => {
            warn!(source = source_id, elapsed_ms, "Frame deadline exceeded, skipping");
            (SourceOutcome::TimedOut, None)
        }
        Ok(Err(e)) => {
            warn!(source = source_id, error = %e, "Error processing frame, skipping");
            (SourceOutcome::Failed(e.to_string()), None)
        }
        Err(_) => {
            warn!(source = source_id, "Leveling panicked, skipping");
            (SourceOutcome::Failed("leveling panicked".into()), None)
        }
    }
}

/// Run one gallery cycle with a thread-safe progress reporter.
///
/// Sources are processed in parallel; outcomes and gallery rows follow the
/// order of `config.source_ids`. Only an invalid configuration is an error.
pub fn run_cycle_reported(
    config: &GalleryConfig,
    source: &dyn FrameSource,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<CycleReport> {
    config.validate()?;
    let total = config.source_ids.len();
    info!(
        sources = total,
        panel_count = config.panel_count,
        source = source.name(),
        "Starting gallery cycle"
    );

    reporter.begin_stage(PipelineStage::Leveling, Some(total));
    let done = AtomicUsize::new(0);
    let results: Vec<(SourceOutcome, Option<CorrectedFrame>)> = config
        .source_ids
        .par_iter()
        .map(|id| {
            let result = level_source(source, id, config);
            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            reporter.advance(completed);
            result
        })
        .collect();
    reporter.finish_stage();

    let mut outcomes = Vec::with_capacity(total);
    let mut accepted = Vec::new();
    for (id, (outcome, frame)) in config.source_ids.iter().zip(results) {
        if let Some(frame) = frame {
            accepted.push((id.clone(), frame));
        }
        outcomes.push((id.clone(), outcome));
    }

    reporter.begin_stage(PipelineStage::Composing, None);
    let gallery = compose_gallery(&accepted);
    reporter.finish_stage();

    match &gallery {
        Some(g) => info!(
            accepted = accepted.len(),
            total,
            width = g.width(),
            height = g.height(),
            "Gallery composed"
        ),
        None => info!(total, "No frames available for gallery"),
    }

    Ok(CycleReport { outcomes, gallery })
}

/// Run one gallery cycle without progress reporting.
pub fn run_cycle(config: &GalleryConfig, source: &dyn FrameSource) -> Result<CycleReport> {
    run_cycle_reported(config, source, Arc::new(SilentReporter))
}
