/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Decoding,
    Slicing,
    Alignment,
    PostProcessing,
    Encoding,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decoding => write!(f, "Decoding image"),
            Self::Slicing => write!(f, "Slicing frames"),
            Self::Alignment => write!(f, "Aligning frames"),
            Self::PostProcessing => write!(f, "Cropping and scaling"),
            Self::Encoding => write!(f, "Encoding animation"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Progress reporting for the pipeline.
///
/// Implementors can use this to drive spinners, logging, or any other
/// feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., frame count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used by the unreported entry points.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
