pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{level_source, run_cycle, run_cycle_reported};
pub use types::{CycleReport, PipelineStage, ProgressReporter, SourceOutcome};
