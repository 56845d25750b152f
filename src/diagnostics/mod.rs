//! Run diagnostics: per-stage timings and a serializable summary.

pub mod report;
pub mod timing;

pub use report::RunReport;
pub use timing::{StageTiming, TimingBreakdown};
