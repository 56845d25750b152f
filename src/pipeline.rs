//! Pipeline driving Sobel edge detection end-to-end.
//!
//! [`SobelPipeline`] owns the run options and executes the four stages in
//! order: load, gradients, magnitude normalization, then optional threshold
//! and write. Every stage runs to completion before the next begins and all
//! buffers are owned by the run.
//!
//! ```no_run
//! use sobel_pgm::{PipelineOptions, SobelPipeline};
//! use std::path::Path;
//!
//! # fn main() -> sobel_pgm::Result<()> {
//! let pipeline = SobelPipeline::new(PipelineOptions::default().with_threshold(Some(0.5)));
//! let report = pipeline.run_files(Path::new("in.pgm"), Path::new("edges.pgm"))?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
use crate::config::PipelineOptions;
use crate::diagnostics::{RunReport, TimingBreakdown};
use crate::edges::{
    gradient_magnitude, normalize, sobel_gradients, threshold_in_place, Grad, OUTPUT_MAX,
};
use crate::error::Result;
use crate::image::{load_pgm, save_pgm, IntensityGrid, MagnitudeGrid};
use log::{debug, info};
use std::path::Path;

/// Result of running the in-memory stages on one grid.
#[derive(Clone, Debug)]
pub struct EdgeOutput {
    /// Final output values, in [0, 255].
    pub image: MagnitudeGrid,
    /// Intermediate gradient planes.
    pub grad: Grad,
    pub report: RunReport,
}

pub struct SobelPipeline {
    options: PipelineOptions,
}

impl SobelPipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Run gradients, normalization and the optional threshold on `input`.
    pub fn process(&self, input: &IntensityGrid) -> Result<EdgeOutput> {
        let mut timings = TimingBreakdown::default();

        let grad = timings.measure("gradients", || sobel_gradients(input));
        let mut magnitude = timings.measure("magnitude", || gradient_magnitude(&grad));
        let max_magnitude = magnitude.max;
        let degenerate = magnitude.is_degenerate();
        timings.measure("normalize", || {
            normalize(&mut magnitude, self.options.degenerate)
        })?;

        let mut image = magnitude.grid;
        let lit_pixels = match self.options.threshold {
            Some(t) => timings.measure("threshold", || threshold_in_place(&mut image, t)),
            None => count_lit(&image),
        };

        debug!(
            "processed grid: max magnitude {max_magnitude:.3}, {lit_pixels} pixels at {OUTPUT_MAX}"
        );
        Ok(EdgeOutput {
            image,
            grad,
            report: RunReport {
                header: None,
                max_magnitude,
                degenerate,
                threshold: self.options.threshold,
                lit_pixels,
                timings,
            },
        })
    }

    /// Load `input`, process it and write the result to `output`.
    ///
    /// The output file is only created once processing has succeeded.
    pub fn run_files(&self, input: &Path, output: &Path) -> Result<RunReport> {
        let mut load_timing = TimingBreakdown::default();
        let (header, grid) =
            load_timing.measure("load", || load_pgm(input, self.options.header))?;

        let EdgeOutput { image, report, .. } = self.process(&grid)?;
        let mut report = RunReport {
            header: Some(header),
            ..report
        };

        let mut timings = load_timing;
        for stage in report.timings.stages.drain(..) {
            timings.push(stage.label, stage.elapsed_ms);
        }
        timings.measure("write", || save_pgm(output, &image))?;
        report.timings = timings;

        info!(
            "{} -> {}: {}",
            input.display(),
            output.display(),
            report.summary()
        );
        debug!("run report: {}", report.to_json());
        Ok(report)
    }
}

fn count_lit(image: &MagnitudeGrid) -> usize {
    image.as_slice().iter().filter(|&&v| v == OUTPUT_MAX).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DegeneratePolicy;
    use crate::error::SobelError;
    use crate::image::GRID_SIZE;

    fn diagonal_step() -> IntensityGrid {
        let mut grid = IntensityGrid::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if x > y {
                    grid.set(x, y, 200);
                }
            }
        }
        grid
    }

    #[test]
    fn records_each_stage() {
        let pipeline = SobelPipeline::new(PipelineOptions::default().with_threshold(Some(0.5)));
        let out = pipeline.process(&diagonal_step()).unwrap();
        let labels: Vec<_> = out.report.timings.stages.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["gradients", "magnitude", "normalize", "threshold"]);
        assert_eq!(out.report.threshold, Some(0.5));
        assert!(out.report.lit_pixels > 0);
    }

    #[test]
    fn unthresholded_output_reaches_255() {
        let pipeline = SobelPipeline::new(PipelineOptions::default());
        let out = pipeline.process(&diagonal_step()).unwrap();
        assert!(out.report.lit_pixels >= 1);
        assert!(out
            .image
            .as_slice()
            .iter()
            .all(|&v| (0.0..=OUTPUT_MAX).contains(&v)));
    }

    #[test]
    fn degenerate_policy_is_honored() {
        let flat = IntensityGrid::filled(128);
        let zero = SobelPipeline::new(PipelineOptions::default())
            .process(&flat)
            .unwrap();
        assert!(zero.report.degenerate);
        assert_eq!(zero.report.lit_pixels, 0);

        let fail = SobelPipeline::new(
            PipelineOptions::default().with_degenerate_policy(DegeneratePolicy::Fail),
        );
        assert!(matches!(
            fail.process(&flat).unwrap_err(),
            SobelError::DegenerateInput
        ));
    }
}
