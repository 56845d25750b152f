//! Gradient magnitude and normalization to the brightest pixel.
//!
//! Two passes over the grid. Pass A fills interior cells with
//! `sqrt(gx^2 + gy^2)` and tracks the maximum. Pass B runs only after pass A
//! has seen every cell and rescales the full grid so the maximum maps to 255.
use super::grad::{Grad, KERNEL_RADIUS};
use crate::config::DegeneratePolicy;
use crate::error::{Result, SobelError};
use crate::image::{MagnitudeGrid, GRID_SIZE};
use log::{debug, warn};

/// Brightest output value.
pub const OUTPUT_MAX: f64 = 255.0;

/// Raw gradient magnitude with its observed maximum.
#[derive(Clone, Debug)]
pub struct Magnitude {
    pub grid: MagnitudeGrid,
    pub max: f64,
}

impl Magnitude {
    /// True when no interior pixel has a non-zero gradient.
    pub fn is_degenerate(&self) -> bool {
        self.max <= 0.0
    }
}

/// Pass A: Euclidean magnitude over interior cells. Border cells stay 0.0.
pub fn gradient_magnitude(grad: &Grad) -> Magnitude {
    let mut grid = MagnitudeGrid::new();
    let mut max = 0.0f64;

    for y in KERNEL_RADIUS..GRID_SIZE - KERNEL_RADIUS {
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let out = grid.row_mut(y);
        for x in KERNEL_RADIUS..GRID_SIZE - KERNEL_RADIUS {
            let gx = f64::from(gx_row[x]);
            let gy = f64::from(gy_row[x]);
            let magnitude = (gx * gx + gy * gy).sqrt();
            out[x] = magnitude;
            if magnitude > max {
                max = magnitude;
            }
        }
    }

    Magnitude { grid, max }
}

/// Pass B: rescale every cell so that `max` maps to [`OUTPUT_MAX`].
///
/// A zero `max` cannot be divided by. `DegeneratePolicy::Zero` leaves the
/// grid as is (all zero, since every magnitude is bounded by `max`);
/// `DegeneratePolicy::Fail` reports [`SobelError::DegenerateInput`].
pub fn normalize(magnitude: &mut Magnitude, policy: DegeneratePolicy) -> Result<()> {
    if magnitude.is_degenerate() {
        return match policy {
            DegeneratePolicy::Zero => {
                warn!("flat gradient (max magnitude 0), writing an all-zero image");
                magnitude.grid.as_mut_slice().fill(0.0);
                Ok(())
            }
            DegeneratePolicy::Fail => Err(SobelError::DegenerateInput),
        };
    }

    let max = magnitude.max;
    for v in magnitude.grid.as_mut_slice() {
        *v = (*v / max) * OUTPUT_MAX;
    }
    debug!("normalized magnitude, max {max:.3} -> {OUTPUT_MAX}");
    Ok(())
}
