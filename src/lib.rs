#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod image;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::{
    load_options, parse_threshold, parse_threshold_arg, DegeneratePolicy, HeaderPolicy,
    PipelineOptions, ThresholdParsing,
};
pub use crate::diagnostics::RunReport;
pub use crate::error::{Result, SobelError};
pub use crate::pipeline::{EdgeOutput, SobelPipeline};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sobel_pgm::prelude::*;
///
/// # fn main() -> sobel_pgm::Result<()> {
/// let mut input = IntensityGrid::new();
/// input.set(128, 128, 255);
///
/// let out = SobelPipeline::new(PipelineOptions::default()).process(&input)?;
/// println!("max magnitude {:.1}", out.report.max_magnitude);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{IntensityGrid, MagnitudeGrid, GRID_SIZE};
    pub use crate::{PipelineOptions, SobelPipeline};
}
