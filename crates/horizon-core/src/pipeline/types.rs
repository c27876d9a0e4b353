use crate::frame::Gallery;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Leveling,
    Composing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leveling => write!(f, "Leveling frames"),
            Self::Composing => write!(f, "Composing gallery"),
        }
    }
}

/// What happened to one source during a cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceOutcome {
    /// Frame was leveled and is part of the gallery.
    Accepted,
    /// Frame was near-uniform and skipped.
    Blank,
    /// The source could not deliver a decodable frame.
    Unavailable(String),
    /// Leveling failed unexpectedly.
    Failed(String),
    /// Leveling ran past the per-frame deadline.
    TimedOut,
}

impl SourceOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for SourceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => write!(f, "Accepted"),
            Self::Blank => write!(f, "Blank"),
            Self::Unavailable(reason) => write!(f, "Unavailable ({reason})"),
            Self::Failed(reason) => write!(f, "Failed ({reason})"),
            Self::TimedOut => write!(f, "Timed out"),
        }
    }
}

/// Result of one gallery cycle.
#[derive(Clone, Debug)]
pub struct CycleReport {
    /// One entry per configured source, in configured order.
    pub outcomes: Vec<(String, SourceOutcome)>,
    /// `None` when no source was accepted.
    pub gallery: Option<Gallery>,
}

impl CycleReport {
    pub fn accepted_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_accepted()).count()
    }

    pub fn outcome_of(&self, source_id: &str) -> Option<&SourceOutcome> {
        self.outcomes
            .iter()
            .find(|(id, _)| id == source_id)
            .map(|(_, o)| o)
    }
}

/// Receives progress of a gallery cycle from the worker threads.
///
/// Called concurrently while sources are leveled in parallel, hence
/// `Send + Sync`. Every method defaults to doing nothing.
pub trait ProgressReporter: Send + Sync {
    /// A cycle stage starts. For `Leveling` the total is the number of
    /// configured sources; `Composing` has no item count.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One more source has been leveled, skipped or given up on.
    /// `sources_done` counts completions, not source positions.
    fn advance(&self, _sources_done: usize) {}

    /// The stage begun last has ended.
    fn finish_stage(&self) {}
}

/// Reporter for callers that do not track progress.
pub(super) struct SilentReporter;

impl ProgressReporter for SilentReporter {}
