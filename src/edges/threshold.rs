//! Hard binary threshold on normalized output values.
//!
//! The threshold is given in unit-interval terms and compared against pixel
//! values scaled back to [0, 255]. There is no hysteresis and no neighborhood
//! term: each pixel is decided on its own.
use super::magnitude::OUTPUT_MAX;
use crate::image::MagnitudeGrid;
use log::debug;

#[inline]
pub fn apply_threshold(threshold: f64, pixel: f64) -> f64 {
    if pixel >= threshold * OUTPUT_MAX {
        OUTPUT_MAX
    } else {
        0.0
    }
}

/// Binarize `grid` in place. Returns the number of pixels switched on.
pub fn threshold_in_place(grid: &mut MagnitudeGrid, threshold: f64) -> usize {
    let mut lit = 0;
    for v in grid.as_mut_slice() {
        *v = apply_threshold(threshold, *v);
        if *v == OUTPUT_MAX {
            lit += 1;
        }
    }
    debug!("threshold {threshold}: {lit} pixels on");
    lit
}
