pub mod expand;
pub mod normalize;
pub mod pipeline;

pub use expand::{MinuteExpander, MinuteSpan, MinuteSteps};
pub use normalize::{DateNormalizer, NormalizeOptions};
pub use pipeline::{Pipeline, PipelineReport};

/// Row counts of one stage run (header lines excluded).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageReport {
    pub rows_read: u64,
    pub rows_written: u64,
}
